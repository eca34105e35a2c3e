use anchor_lang::prelude::*;

use crate::states::*;

/// Initialize global configuration for the platform.
///
/// This should be called once by the platform owner (admin) after deploy.
/// Records the admin key that gates every privileged instruction and creates
/// the treasury that collects purchase proceeds.
pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.bump = ctx.bumps.config;

    let treasury = &mut ctx.accounts.treasury;
    treasury.bump = ctx.bumps.treasury;
    treasury.total_raised = 0;
    treasury.total_withdrawn = 0;

    msg!("Config initialized: admin {}", config.admin);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GlobalConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// Treasury PDA that accumulates lamports paid for token purchases.
    #[account(
        init,
        payer = admin,
        space = 8 + Treasury::SIZE,
        seeds = [b"treasury"],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
