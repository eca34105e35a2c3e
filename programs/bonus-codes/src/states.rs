use anchor_lang::prelude::*;

use crate::errors::BonusError;

// ---------------------------
// Accounts: State
// ---------------------------

/// Global configuration for the platform.
#[account]
pub struct GlobalConfig {
    pub admin: Pubkey, // 32 bytes - who is allowed to issue codes / call admin helpers
    pub bump: u8,      // 1 byte
}

impl GlobalConfig {
    pub const SIZE: usize = 32 + 1;
}

/// Treasury account: program-owned lamport vault that collects purchase
/// proceeds. Withdrawals never dip below the rent-exempt minimum.
#[account]
pub struct Treasury {
    pub bump: u8,             // 1 byte
    pub total_raised: u64,    // 8 bytes - lamports received from purchases
    pub total_withdrawn: u64, // 8 bytes - lamports withdrawn by the admin
}

impl Treasury {
    /// Space = 1 + 8 + 8 = 17 bytes
    pub const SIZE: usize = 1 + 8 + 8;
}

/// Bonus code account: one per code string. The code string is part of the
/// PDA seed, so uniqueness is structural.
#[account]
pub struct BonusCode {
    // String in account: 4 bytes for length + MAX_CODE_LEN bytes reserved
    pub code: String,               // 4 + MAX_CODE_LEN bytes
    pub discount_percentage: u8,    // 1 byte  - 1..=100
    pub expiration_timestamp: i64,  // 8 bytes
    pub active: bool,               // 1 byte  - admin-toggled flag
    pub token_price_lamports: u64,  // 8 bytes - price per token for this offering
    pub token_count: u32,           // 4 bytes - redemption inventory
    pub redeemed_count: u32,        // 4 bytes - successful applications so far
    pub created_at: i64,            // 8 bytes
    pub bump: u8,                   // 1 byte
}

impl BonusCode {
    pub const MAX_CODE_LEN: usize = 16;

    /// Space calculation:
    /// - code: 4 (len) + MAX_CODE_LEN
    /// - discount_percentage: 1
    /// - expiration_timestamp: 8
    /// - active: 1
    /// - token_price_lamports: 8
    /// - token_count: 4
    /// - redeemed_count: 4
    /// - created_at: 8
    /// - bump: 1
    pub const SIZE: usize = 4 + Self::MAX_CODE_LEN + 1 + 8 + 1 + 8 + 4 + 4 + 8 + 1;

    /// A code is usable iff it is active, unexpired, and has inventory left.
    pub fn is_usable(&self, now: i64) -> bool {
        self.active && now < self.expiration_timestamp && self.redeemed_count < self.token_count
    }

    /// Same predicate as [`Self::is_usable`], reporting which condition
    /// failed. Pure; callers decide what to do with the verdict.
    pub fn ensure_usable(&self, now: i64) -> core::result::Result<(), BonusError> {
        if !self.active {
            return Err(BonusError::CodeDeactivated);
        }
        if now >= self.expiration_timestamp {
            return Err(BonusError::CodeExpired);
        }
        if self.redeemed_count >= self.token_count {
            return Err(BonusError::CodeExhausted);
        }
        Ok(())
    }

    /// Bonus tokens granted on a purchase of `token_amount`:
    /// `token_amount * discount_percentage / 100`, floored (token amounts
    /// are integral units).
    pub fn bonus_for(&self, token_amount: u64) -> core::result::Result<u64, BonusError> {
        let bonus = token_amount
            .checked_mul(u64::from(self.discount_percentage))
            .ok_or(BonusError::Overflow)?
            / 100;
        Ok(bonus)
    }
}

/// Investor account: created once, credited on every purchase.
#[account]
pub struct Investor {
    // Strings in account: 4 bytes for length + reserved max bytes each
    pub investor_id: String,  // 4 + MAX_ID_LEN bytes
    pub name: String,         // 4 + MAX_NAME_LEN bytes
    pub email: String,        // 4 + MAX_EMAIL_LEN bytes
    pub authority: Pubkey,    // 32 bytes - wallet that signs this investor's purchases
    pub token_purchased: u64, // 8 bytes  - running total of credited tokens
    pub codes_redeemed: u32,  // 4 bytes  - bonus codes applied by this investor
    pub created_at: i64,      // 8 bytes
    pub bump: u8,             // 1 byte
}

impl Investor {
    pub const MAX_ID_LEN: usize = 32;
    pub const MAX_NAME_LEN: usize = 64;
    pub const MAX_EMAIL_LEN: usize = 64;

    /// Total = (4 + 32) + (4 + 64) + (4 + 64) + 32 + 8 + 4 + 8 + 1
    pub const SIZE: usize = 4
        + Self::MAX_ID_LEN
        + 4
        + Self::MAX_NAME_LEN
        + 4
        + Self::MAX_EMAIL_LEN
        + 32
        + 8
        + 4
        + 8
        + 1;
}

/// Marker account enforcing email uniqueness across investors. Seeded by the
/// sha256 of the email, so initializing it twice fails the transaction.
#[account]
pub struct EmailRecord {
    pub investor: Pubkey, // 32 bytes - investor PDA that registered this email
    pub bump: u8,         // 1 byte
}

impl EmailRecord {
    pub const SIZE: usize = 32 + 1;
}

/// Redemption receipt: one per (investor, bonus code) application. The set of
/// receipts under an investor PDA is that investor's bonus history.
#[account]
pub struct Redemption {
    pub investor: Pubkey,   // 32 bytes
    pub bonus_code: Pubkey, // 32 bytes
    // Denormalized code string so indexers need not fetch the code account
    pub code: String,       // 4 + BonusCode::MAX_CODE_LEN bytes
    pub token_amount: u64,  // 8 bytes - base purchase amount
    pub bonus_amount: u64,  // 8 bytes - extra tokens granted
    pub total_amount: u64,  // 8 bytes - token_amount + bonus_amount
    pub redeemed_at: i64,   // 8 bytes
    pub bump: u8,           // 1 byte
}

impl Redemption {
    /// Space = 32 + 32 + (4 + 16) + 8 + 8 + 8 + 8 + 1 = 117 bytes
    pub const SIZE: usize = 32 + 32 + 4 + BonusCode::MAX_CODE_LEN + 8 + 8 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const NOW: i64 = 1_700_000_000;
    const DAY: i64 = 86_400;

    fn sample_code(active: bool, expiration_timestamp: i64, redeemed_count: u32) -> BonusCode {
        BonusCode {
            code: "SUMMER25".to_string(),
            discount_percentage: 10,
            expiration_timestamp,
            active,
            token_price_lamports: 1_000,
            token_count: 15,
            redeemed_count,
            created_at: NOW - DAY,
            bump: 255,
        }
    }

    #[test_case(true, NOW + DAY, 0, true ; "active and unexpired")]
    #[test_case(false, NOW + DAY, 0, false ; "deactivated")]
    #[test_case(true, NOW - DAY, 0, false ; "expired yesterday")]
    #[test_case(true, NOW, 0, false ; "expires exactly now")]
    #[test_case(true, NOW + DAY, 15, false ; "inventory exhausted")]
    #[test_case(true, NOW + DAY, 14, true ; "last redemption left")]
    fn usable_matrix(active: bool, expiration: i64, redeemed: u32, expected: bool) {
        let code = sample_code(active, expiration, redeemed);
        assert_eq!(code.is_usable(NOW), expected);
    }

    #[test]
    fn ensure_usable_reports_the_failing_condition() {
        let deactivated = sample_code(false, NOW + DAY, 0);
        assert!(matches!(
            deactivated.ensure_usable(NOW),
            Err(BonusError::CodeDeactivated)
        ));

        // Active but expired yesterday: expiry wins over everything after it.
        let expired = sample_code(true, NOW - DAY, 0);
        assert!(matches!(
            expired.ensure_usable(NOW),
            Err(BonusError::CodeExpired)
        ));

        let exhausted = sample_code(true, NOW + DAY, 15);
        assert!(matches!(
            exhausted.ensure_usable(NOW),
            Err(BonusError::CodeExhausted)
        ));

        let usable = sample_code(true, NOW + DAY, 0);
        assert!(usable.ensure_usable(NOW).is_ok());
    }

    #[test]
    fn bonus_math_matches_percentage() {
        // 10% of 100 tokens -> 10 bonus tokens, 110 total.
        let code = sample_code(true, NOW + DAY, 0);
        let bonus = code.bonus_for(100).unwrap();
        assert_eq!(bonus, 10);
        assert_eq!(100 + bonus, 110);
    }

    #[test_case(25, 100, 25 ; "quarter of one hundred")]
    #[test_case(10, 105, 10 ; "fractional part floors")]
    #[test_case(100, 7, 7 ; "full discount doubles")]
    #[test_case(1, 99, 0 ; "rounds down to zero")]
    fn bonus_floors_integer_division(discount: u8, amount: u64, expected: u64) {
        let mut code = sample_code(true, NOW + DAY, 0);
        code.discount_percentage = discount;
        assert_eq!(code.bonus_for(amount).unwrap(), expected);
    }

    #[test]
    fn bonus_math_never_wraps() {
        let code = sample_code(true, NOW + DAY, 0);
        assert!(matches!(
            code.bonus_for(u64::MAX),
            Err(BonusError::Overflow)
        ));
    }

    #[test]
    fn account_sizes_cover_max_length_strings() {
        assert_eq!(BonusCode::SIZE, 55);
        assert_eq!(Investor::SIZE, 225);
        assert_eq!(Redemption::SIZE, 117);
        assert_eq!(Treasury::SIZE, 17);
    }
}
