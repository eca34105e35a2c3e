use anchor_lang::prelude::*;

#[error_code]
pub enum BonusError {
    #[msg("Discount percentage must be between 1 and 100")]
    InvalidDiscountPercentage,
    #[msg("Expiration must be in the future")]
    ExpirationInPast,
    #[msg("Token price must be greater than zero")]
    InvalidTokenPrice,
    #[msg("Token count must be greater than zero")]
    InvalidTokenCount,
    #[msg("Bonus code cannot be empty")]
    CodeEmpty,
    #[msg("Bonus code is too long")]
    CodeTooLong,
    #[msg("Bonus code may only contain uppercase letters and digits")]
    InvalidCodeCharacter,
    #[msg("Bonus code has been deactivated")]
    CodeDeactivated,
    #[msg("Bonus code has expired")]
    CodeExpired,
    #[msg("Bonus code has no redemptions left")]
    CodeExhausted,
    #[msg("Token amount must be greater than zero")]
    InvalidTokenAmount,
    #[msg("Investor id is required")]
    InvestorIdRequired,
    #[msg("Investor id is too long")]
    InvestorIdTooLong,
    #[msg("Investor name is required")]
    NameRequired,
    #[msg("Investor name is too long")]
    NameTooLong,
    #[msg("A valid email address is required")]
    InvalidEmail,
    #[msg("Email address is too long")]
    EmailTooLong,
    #[msg("Signer is not the admin")]
    NotAdmin,
    #[msg("Signer is not the investor authority")]
    NotInvestorAuthority,
    #[msg("Invalid admin key")]
    InvalidAdmin,
    #[msg("Withdraw amount must be greater than zero")]
    InvalidWithdrawAmount,
    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,
    #[msg("Arithmetic overflow")]
    Overflow,
}
