use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::InvestorCreated;
use crate::states::*;
use crate::utils::email_hash;

/// Create an investor account.
///
/// Two PDAs are initialized in one instruction: the investor record (seeded
/// by the caller-chosen investor id) and an email marker (seeded by the
/// sha256 of the email). Either PDA already existing fails the whole
/// transaction, so a duplicate id or email creates no records at all.
pub fn create_investor(
    ctx: Context<CreateInvestor>,
    investor_id: String,
    name: String,
    email: String,
) -> Result<()> {
    require!(!investor_id.is_empty(), BonusError::InvestorIdRequired);
    require!(
        investor_id.len() <= Investor::MAX_ID_LEN,
        BonusError::InvestorIdTooLong
    );
    require!(!name.is_empty(), BonusError::NameRequired);
    require!(
        name.as_bytes().len() <= Investor::MAX_NAME_LEN,
        BonusError::NameTooLong
    );
    require!(email.contains('@'), BonusError::InvalidEmail);
    require!(
        email.as_bytes().len() <= Investor::MAX_EMAIL_LEN,
        BonusError::EmailTooLong
    );

    let investor = &mut ctx.accounts.investor;
    investor.investor_id = investor_id.clone();
    investor.name = name;
    investor.email = email;
    investor.authority = ctx.accounts.authority.key();
    investor.token_purchased = 0;
    investor.codes_redeemed = 0;
    investor.created_at = Clock::get()?.unix_timestamp;
    investor.bump = ctx.bumps.investor;

    let email_record = &mut ctx.accounts.email_record;
    email_record.investor = investor.key();
    email_record.bump = ctx.bumps.email_record;

    emit!(InvestorCreated {
        investor: investor.key(),
        investor_id,
        authority: investor.authority,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(investor_id: String, name: String, email: String)]
pub struct CreateInvestor<'info> {
    /// Investor PDA. One PDA per investor id.
    #[account(
        init,
        payer = authority,
        space = 8 + Investor::SIZE,
        seeds = [
            b"investor",
            investor_id.as_bytes(),
        ],
        bump
    )]
    pub investor: Account<'info, Investor>,

    /// Email uniqueness marker. Initializing it for an already-registered
    /// email fails, rolling back the investor account above with it.
    #[account(
        init,
        payer = authority,
        space = 8 + EmailRecord::SIZE,
        seeds = [
            b"email",
            &email_hash(&email)[..],
        ],
        bump
    )]
    pub email_record: Account<'info, EmailRecord>,

    /// Wallet that will own this investor account and sign its purchases.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
