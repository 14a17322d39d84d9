use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Invalidate a benefit. Terminal: the unit is never deleted, only marked,
/// and no further redemption is possible.
pub fn invalidate_benefit_handler(ctx: Context<InvalidateBenefit>) -> Result<()> {
    let benefit = &mut ctx.accounts.benefit;
    benefit.invalidated = true;

    Ok(())
}

#[derive(Accounts)]
pub struct InvalidateBenefit<'info> {
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
