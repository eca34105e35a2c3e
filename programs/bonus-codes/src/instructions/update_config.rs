use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Rotate the admin credential.
///
/// Only the current admin can hand the platform to a new key. A retired or
/// leaked key stops working as soon as this lands.
pub fn update_config(ctx: Context<UpdateConfig>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), BonusError::InvalidAdmin);

    let config = &mut ctx.accounts.config;

    msg!("Admin rotated: {} -> {}", config.admin, new_admin);

    config.admin = new_admin;

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ BonusError::NotAdmin
    )]
    pub config: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,
}
