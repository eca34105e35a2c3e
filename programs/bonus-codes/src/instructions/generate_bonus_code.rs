use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::BonusCodeGenerated;
use crate::states::*;

/// Admin issues a new bonus code.
///
/// Each code is one account, PDA-seeded by the code string itself, so the
/// same code can never be issued twice. A batch of codes is a batch of
/// instructions in one transaction; the caller supplies the code strings
/// (there is no on-chain randomness to draw them from).
///
/// The code carries the full offering: the discount it grants, the price of
/// the token it applies to, and how many times it may be redeemed.
pub fn generate_bonus_code(
    ctx: Context<GenerateBonusCode>,
    code: String,
    discount_percentage: u8,
    expiration_timestamp: i64,
    token_price_lamports: u64,
    token_count: u32,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Basic validation for inputs
    require!(
        (1..=100).contains(&discount_percentage),
        BonusError::InvalidDiscountPercentage
    );
    require!(expiration_timestamp > now, BonusError::ExpirationInPast);
    require!(token_price_lamports > 0, BonusError::InvalidTokenPrice);
    require!(token_count > 0, BonusError::InvalidTokenCount);

    // Code shape: non-empty, bounded, uppercase alphanumeric (the charset
    // the admin dashboard generates from).
    require!(!code.is_empty(), BonusError::CodeEmpty);
    require!(
        code.len() <= BonusCode::MAX_CODE_LEN,
        BonusError::CodeTooLong
    );
    require!(
        code.bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
        BonusError::InvalidCodeCharacter
    );

    let bonus_code = &mut ctx.accounts.bonus_code;
    bonus_code.code = code.clone();
    bonus_code.discount_percentage = discount_percentage;
    bonus_code.expiration_timestamp = expiration_timestamp;
    bonus_code.active = true;
    bonus_code.token_price_lamports = token_price_lamports;
    bonus_code.token_count = token_count;
    bonus_code.redeemed_count = 0;
    bonus_code.created_at = now;
    bonus_code.bump = ctx.bumps.bonus_code;

    emit!(BonusCodeGenerated {
        code,
        discount_percentage,
        expiration_timestamp,
        token_price_lamports,
        token_count,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(code: String)]
pub struct GenerateBonusCode<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ BonusError::NotAdmin
    )]
    pub config: Account<'info, GlobalConfig>,

    /// Bonus code PDA. One PDA per code string.
    #[account(
        init,
        payer = admin,
        space = 8 + BonusCode::SIZE,
        seeds = [
            b"bonus_code",
            code.as_bytes(),
        ],
        bump
    )]
    pub bonus_code: Account<'info, BonusCode>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
