use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::*;
use crate::events::TokensPurchased;
use crate::states::*;

/// Purchase tokens without applying a bonus code.
///
/// The offering account supplies the token price; its discount and inventory
/// are not consulted, so a deactivated or expired offering can still be
/// bought at list price. The investor is credited exactly `token_amount`.
pub fn purchase_tokens(ctx: Context<PurchaseTokens>, token_amount: u64) -> Result<()> {
    require!(token_amount > 0, BonusError::InvalidTokenAmount);

    let offering = &ctx.accounts.offering;
    let investor = &mut ctx.accounts.investor;
    let treasury = &mut ctx.accounts.treasury;

    let cost_lamports = token_amount
        .checked_mul(offering.token_price_lamports)
        .ok_or(BonusError::Overflow)?;

    // Settle the purchase: lamports from the investor's wallet into the treasury.
    let cpi_accounts = system_program::Transfer {
        from: ctx.accounts.authority.to_account_info(),
        to: treasury.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, cost_lamports)?;

    treasury.total_raised = treasury
        .total_raised
        .checked_add(cost_lamports)
        .ok_or(BonusError::Overflow)?;

    investor.token_purchased = investor
        .token_purchased
        .checked_add(token_amount)
        .ok_or(BonusError::Overflow)?;

    emit!(TokensPurchased {
        investor: investor.key(),
        code: offering.code.clone(),
        token_amount,
        cost_lamports,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PurchaseTokens<'info> {
    /// Investor being credited. Only its authority wallet can buy for it.
    #[account(
        mut,
        has_one = authority @ BonusError::NotInvestorAuthority
    )]
    pub investor: Account<'info, Investor>,

    /// Token offering the investor selected (price source only).
    pub offering: Account<'info, BonusCode>,

    #[account(
        mut,
        seeds = [b"treasury"],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Wallet paying for the purchase.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
