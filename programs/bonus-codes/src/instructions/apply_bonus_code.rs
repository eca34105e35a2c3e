use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::*;
use crate::events::BonusCodeApplied;
use crate::states::*;

/// Apply a bonus code to a token purchase.
///
/// Flow:
/// - re-validate the code (active, unexpired, inventory left)
/// - compute bonus = token_amount * discount_percentage / 100 (floored)
///   and total = token_amount + bonus
/// - settle the base amount in lamports into the treasury
/// - credit the total to the investor
/// - consume one unit of the code's inventory
/// - write a redemption receipt and emit an event for history/indexers
///
/// The receipt PDA is seeded by (investor, bonus code), so an investor can
/// apply a given code at most once; a second attempt fails at account init.
pub fn apply_bonus_code(ctx: Context<ApplyBonusCode>, token_amount: u64) -> Result<()> {
    require!(token_amount > 0, BonusError::InvalidTokenAmount);

    let now = Clock::get()?.unix_timestamp;

    let bonus_code = &mut ctx.accounts.bonus_code;
    let investor = &mut ctx.accounts.investor;
    let treasury = &mut ctx.accounts.treasury;

    bonus_code.ensure_usable(now)?;

    let bonus_amount = bonus_code.bonus_for(token_amount)?;
    let total_amount = token_amount
        .checked_add(bonus_amount)
        .ok_or(BonusError::Overflow)?;

    // The bonus tokens are free; only the base amount is paid for.
    let cost_lamports = token_amount
        .checked_mul(bonus_code.token_price_lamports)
        .ok_or(BonusError::Overflow)?;

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
        .checked_add(total_amount)
        .ok_or(BonusError::Overflow)?;
    investor.codes_redeemed = investor
        .codes_redeemed
        .checked_add(1)
        .ok_or(BonusError::Overflow)?;

    bonus_code.redeemed_count = bonus_code
        .redeemed_count
        .checked_add(1)
        .ok_or(BonusError::Overflow)?;

    let redemption = &mut ctx.accounts.redemption;
    redemption.investor = investor.key();
    redemption.bonus_code = bonus_code.key();
    redemption.code = bonus_code.code.clone();
    redemption.token_amount = token_amount;
    redemption.bonus_amount = bonus_amount;
    redemption.total_amount = total_amount;
    redemption.redeemed_at = now;
    redemption.bump = ctx.bumps.redemption;

    emit!(BonusCodeApplied {
        investor: investor.key(),
        code: bonus_code.code.clone(),
        token_amount,
        bonus_amount,
        total_amount,
        cost_lamports,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ApplyBonusCode<'info> {
    /// Investor being credited. Only its authority wallet can redeem for it.
    #[account(
        mut,
        has_one = authority @ BonusError::NotInvestorAuthority
    )]
    pub investor: Account<'info, Investor>,

    /// Code being applied; also the offering whose token price settles the
    /// purchase.
    #[account(mut)]
    pub bonus_code: Account<'info, BonusCode>,

    /// Redemption receipt PDA. One PDA per (investor, bonus code).
    #[account(
        init,
        payer = authority,
        space = 8 + Redemption::SIZE,
        seeds = [
            b"redemption",
            investor.key().as_ref(),
            bonus_code.key().as_ref(),
        ],
        bump
    )]
    pub redemption: Account<'info, Redemption>,

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
