use anchor_lang::prelude::*;

/// Event emitted when the admin issues a new bonus code.
#[event]
pub struct BonusCodeGenerated {
    pub code: String,
    pub discount_percentage: u8,
    pub expiration_timestamp: i64,
    pub token_price_lamports: u64,
    pub token_count: u32,
}

/// Event emitted when the admin flips a code's active flag.
#[event]
pub struct BonusCodeStatusChanged {
    pub code: String,
    pub active: bool,
}

/// Event emitted when a new investor account is created.
#[event]
pub struct InvestorCreated {
    pub investor: Pubkey,
    pub investor_id: String,
    pub authority: Pubkey,
}

/// Event emitted on a codeless purchase.
#[event]
pub struct TokensPurchased {
    pub investor: Pubkey,
    pub code: String,
    pub token_amount: u64,
    pub cost_lamports: u64,
}

/// Event emitted whenever a bonus code is applied to a purchase, enabling
/// off-chain history aggregation.
#[event]
pub struct BonusCodeApplied {
    pub investor: Pubkey,
    pub code: String,
    pub token_amount: u64,
    pub bonus_amount: u64,
    pub total_amount: u64,
    pub cost_lamports: u64,
}

/// Event emitted when the admin queries an investor's bonus history.
#[event]
pub struct InvestorHistory {
    pub investor: Pubkey,
    pub investor_id: String,
    pub token_purchased: u64,
    pub codes_redeemed: u32,
}

/// Event emitted when the admin withdraws purchase proceeds.
#[event]
pub struct TreasuryWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}
