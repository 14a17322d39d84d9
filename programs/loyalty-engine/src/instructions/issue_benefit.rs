use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Issuance boundary: the surrounding system (purchase, gift, RRPP
/// generation) hands this engine a `(benefit_id, quantity)` pair and the
/// engine owns the consumption counter from then on. The entitlement is
/// fixed here and never changes afterwards.
pub fn issue_benefit_handler(
    ctx: Context<IssueBenefit>,
    benefit_id: u64,
    quantity: u32,
    fully_paid: bool,
) -> Result<()> {
    require!(quantity >= 1, LoyaltyError::InvalidQuantity);

    let benefit = &mut ctx.accounts.benefit;
    let clock = Clock::get()?;

    benefit.event = ctx.accounts.event.key();
    benefit.owner = ctx.accounts.owner.key();
    benefit.benefit_id = benefit_id;
    benefit.quantity = quantity;
    benefit.redeemed_count = 0;
    benefit.fully_paid = fully_paid;
    benefit.invalidated = false;
    benefit.issued_at = clock.unix_timestamp;
    benefit.bump = ctx.bumps.benefit;

    Ok(())
}

#[derive(Accounts)]
#[instruction(benefit_id: u64)]
pub struct IssueBenefit<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Benefit PDA. One per (event, owner, benefit_id).
    #[account(
        init,
        payer = admin,
        space = 8 + BenefitUnit::SIZE,
        seeds = [
            b"benefit",
            event.key().as_ref(),
            owner.key().as_ref(),
            &benefit_id.to_le_bytes(),
        ],
        bump
    )]
    pub benefit: Account<'info, BenefitUnit>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: issuing event reference. We only read its public key.
    pub event: UncheckedAccount<'info>,

    /// CHECK: wallet that holds the benefit. We only read its public key.
    pub owner: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
