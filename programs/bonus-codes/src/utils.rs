use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::errors::BonusError;

/// Helper function to transfer lamports from one account to another
/// without invoking the System Program.
///
/// This is required when the `from` account carries data (e.g. the treasury
/// PDA owned by this program), which cannot be used as `from` in
/// `system_program::transfer`.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let from_lamports = **from.lamports.borrow();
    require!(
        from_lamports >= amount,
        BonusError::InsufficientTreasuryBalance
    );

    let to_lamports = **to.lamports.borrow();

    let new_from = from_lamports
        .checked_sub(amount)
        .ok_or(BonusError::Overflow)?;
    let new_to = to_lamports
        .checked_add(amount)
        .ok_or(BonusError::Overflow)?;

    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;

    Ok(())
}

/// 32-byte seed for the email uniqueness marker PDA. Emails can exceed the
/// 32-byte seed limit, so the seed is the sha256 of the address.
pub fn email_hash(email: &str) -> [u8; 32] {
    hash(email.as_bytes()).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_hash_is_deterministic_and_discriminating() {
        assert_eq!(
            email_hash("email@example.com"),
            email_hash("email@example.com")
        );
        assert_ne!(
            email_hash("email@example.com"),
            email_hash("other@example.com")
        );
    }
}
