use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Mark a winning attempt as claimed. One-shot: a second claim is an
/// expected business rejection, surfaced by staff UI as already handed
/// out.
pub fn claim_scratch_prize_handler(ctx: Context<ClaimScratchPrize>) -> Result<()> {
    let attempt = &mut ctx.accounts.attempt;

    require!(attempt.did_win, LoyaltyError::DidNotWin);
    require!(!attempt.claimed, LoyaltyError::AlreadyClaimed);

    attempt.claimed = true;

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimScratchPrize<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub attempt: Account<'info, ScratchAttempt>,

    pub admin: Signer<'info>,
}
