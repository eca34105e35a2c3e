use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::InvestorHistory;
use crate::states::*;

/// Helper: snapshot an investor's bonus history totals.
///
/// - Only the admin from GlobalConfig can call this.
/// - Emits an InvestorHistory event with the investor's running totals.
/// - The per-code detail lives in the Redemption receipts seeded by this
///   investor, which indexers enumerate directly.
pub fn check_bonus_history(ctx: Context<CheckBonusHistory>) -> Result<()> {
    let investor = &ctx.accounts.investor;

    emit!(InvestorHistory {
        investor: investor.key(),
        investor_id: investor.investor_id.clone(),
        token_purchased: investor.token_purchased,
        codes_redeemed: investor.codes_redeemed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CheckBonusHistory<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ BonusError::NotAdmin
    )]
    pub config: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,

    pub investor: Account<'info, Investor>,
}
