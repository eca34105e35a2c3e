use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::TreasuryWithdrawn;
use crate::states::*;
use crate::utils::transfer_lamports;

/// Admin withdraws purchase proceeds from the treasury.
///
/// The treasury account stays alive across withdrawals, so the rent-exempt
/// minimum for its data must remain behind.
pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, BonusError::InvalidWithdrawAmount);

    let treasury = &mut ctx.accounts.treasury;
    let admin = &ctx.accounts.admin;

    let rent = Rent::get()?;
    let min_balance = rent.minimum_balance(8 + Treasury::SIZE);
    let treasury_lamports = **treasury.to_account_info().lamports.borrow();
    let available = treasury_lamports.saturating_sub(min_balance);
    require!(amount <= available, BonusError::InsufficientTreasuryBalance);

    transfer_lamports(
        &treasury.to_account_info(),
        &admin.to_account_info(),
        amount,
    )?;

    treasury.total_withdrawn = treasury
        .total_withdrawn
        .checked_add(amount)
        .ok_or(BonusError::Overflow)?;

    msg!("Treasury withdrawal: {} lamports to {}", amount, admin.key());

    emit!(TreasuryWithdrawn {
        recipient: admin.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ BonusError::NotAdmin
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [b"treasury"],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Admin receiving the withdrawn lamports.
    #[account(mut)]
    pub admin: Signer<'info>,
}
