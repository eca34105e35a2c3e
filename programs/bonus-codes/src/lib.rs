use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod bonus_codes {
    use super::*;

    /// Initialize global configuration for the platform.
    ///
    /// This should be called once by the platform owner (admin) after deploy.
    /// Records the admin key and creates the treasury that collects purchase
    /// proceeds.
    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        instructions::initialize_config::initialize_config(ctx)
    }

    /// Rotate the admin credential to a new key.
    pub fn update_config(ctx: Context<UpdateConfig>, new_admin: Pubkey) -> Result<()> {
        instructions::update_config::update_config(ctx, new_admin)
    }

    /// Admin issues a new bonus code.
    ///
    /// The code carries the full offering: the discount it grants (1-100%),
    /// when it expires, the price per token, and how many redemptions it
    /// allows. The code string seeds the account, so issuing the same code
    /// twice fails.
    pub fn generate_bonus_code(
        ctx: Context<GenerateBonusCode>,
        code: String,
        discount_percentage: u8,
        expiration_timestamp: i64,
        token_price_lamports: u64,
        token_count: u32,
    ) -> Result<()> {
        instructions::generate_bonus_code::generate_bonus_code(
            ctx,
            code,
            discount_percentage,
            expiration_timestamp,
            token_price_lamports,
            token_count,
        )
    }

    /// Flip a bonus code's active flag. Idempotent.
    pub fn set_code_status(ctx: Context<SetCodeStatus>, active: bool) -> Result<()> {
        instructions::set_code_status::set_code_status(ctx, active)
    }

    /// Create an investor account.
    ///
    /// Fails if the investor id or the email is already registered; a failed
    /// transaction creates no records.
    pub fn create_investor(
        ctx: Context<CreateInvestor>,
        investor_id: String,
        name: String,
        email: String,
    ) -> Result<()> {
        instructions::create_investor::create_investor(ctx, investor_id, name, email)
    }

    /// Purchase tokens without a bonus code: the investor is credited exactly
    /// `token_amount` (discount 0).
    pub fn purchase_tokens(ctx: Context<PurchaseTokens>, token_amount: u64) -> Result<()> {
        instructions::purchase_tokens::purchase_tokens(ctx, token_amount)
    }

    /// Apply a bonus code to a token purchase.
    ///
    /// Re-validates the code, credits `token_amount` plus the percentage
    /// bonus, consumes one unit of the code's inventory, and writes a
    /// redemption receipt for the investor's history.
    pub fn apply_bonus_code(ctx: Context<ApplyBonusCode>, token_amount: u64) -> Result<()> {
        instructions::apply_bonus_code::apply_bonus_code(ctx, token_amount)
    }

    /// Helper: emit an investor's bonus-history totals. Admin only.
    pub fn check_bonus_history(ctx: Context<CheckBonusHistory>) -> Result<()> {
        instructions::check_bonus_history::check_bonus_history(ctx)
    }

    /// Admin withdraws purchase proceeds from the treasury, leaving the
    /// rent-exempt minimum behind.
    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        instructions::withdraw_treasury::withdraw_treasury(ctx, amount)
    }
}
