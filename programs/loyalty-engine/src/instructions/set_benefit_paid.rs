use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Payment-state transition from the surrounding payment flow. Only the
/// flag moves; the consumption counters are untouched.
pub fn set_benefit_paid_handler(ctx: Context<SetBenefitPaid>, fully_paid: bool) -> Result<()> {
    let benefit = &mut ctx.accounts.benefit;

    require!(!benefit.invalidated, LoyaltyError::BenefitInvalidated);

    benefit.fully_paid = fully_paid;

    Ok(())
}

#[derive(Accounts)]
pub struct SetBenefitPaid<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub benefit: Account<'info, BenefitUnit>,

    pub admin: Signer<'info>,
}
