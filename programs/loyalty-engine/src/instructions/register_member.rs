use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Create the balance row for a user at zero points.
///
/// The backend registers members on signup; every ledger instruction
/// afterwards requires this account to exist, so a ledger call against an
/// unknown user fails at account resolution.
pub fn register_member_handler(ctx: Context<RegisterMember>) -> Result<()> {
    let member = &mut ctx.accounts.member;
    member.user = ctx.accounts.user.key();
    member.points = 0;
    member.tx_count = 0;
    member.bump = ctx.bumps.member;

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterMember<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Member balance PDA. One per user.
    #[account(
        init,
        payer = admin,
        space = 8 + Member::SIZE,
        seeds = [b"member", user.key().as_ref()],
        bump
    )]
    pub member: Account<'info, Member>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: wallet the balance belongs to. We only read its public key.
    pub user: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
