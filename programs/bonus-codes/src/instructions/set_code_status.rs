use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::BonusCodeStatusChanged;
use crate::states::*;

/// Flip a bonus code's active flag.
///
/// Idempotent: setting the flag to its current value succeeds and changes
/// nothing beyond the write. Deactivation does not touch existing
/// redemptions; it only blocks new ones.
pub fn set_code_status(ctx: Context<SetCodeStatus>, active: bool) -> Result<()> {
    let bonus_code = &mut ctx.accounts.bonus_code;
    bonus_code.active = active;

    msg!(
        "Bonus code {} {}",
        bonus_code.code,
        if active { "activated" } else { "deactivated" }
    );

    emit!(BonusCodeStatusChanged {
        code: bonus_code.code.clone(),
        active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCodeStatus<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ BonusError::NotAdmin
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut)]
    pub bonus_code: Account<'info, BonusCode>,

    pub admin: Signer<'info>,
}
