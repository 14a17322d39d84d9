use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Consume `count` units of a benefit's entitlement.
///
/// Called from the scanning/verification flow. An attempt past the issued
/// quantity fails with `OverRedemption` and must be surfaced to staff as a
/// hard rejection (duplicate scan or fraud), never retried automatically.
/// The benefit account write-lock serializes concurrent scans of the same
/// unit, so two scans whose combined count exceeds the quantity can never
/// both succeed; different units redeem fully in parallel.
pub fn redeem_units_handler(ctx: Context<RedeemUnits>, count: u32) -> Result<()> {
    require!(count >= 1, LoyaltyError::InvalidRedeemCount);

    let benefit = &mut ctx.accounts.benefit;

    require!(!benefit.invalidated, LoyaltyError::BenefitInvalidated);

    let new_count = benefit
        .redeemed_count
        .checked_add(count)
        .ok_or(LoyaltyError::Overflow)?;
    require!(new_count <= benefit.quantity, LoyaltyError::OverRedemption);

    benefit.redeemed_count = new_count;

    emit!(BenefitRedeemed {
        benefit: benefit.key(),
        owner: benefit.owner,
        redeemed_count: benefit.redeemed_count,
        quantity: benefit.quantity,
        status: benefit.status(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RedeemUnits<'info> {
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
