use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Create an empty scratch-card prize pool.
pub fn init_prize_pool_handler(ctx: Context<InitPrizePool>, pool_id: u64) -> Result<()> {
    let pool = &mut ctx.accounts.prize_pool;
    pool.authority = ctx.accounts.admin.key();
    pool.pool_id = pool_id;
    pool.prizes = Vec::new();
    pool.bump = ctx.bumps.prize_pool;

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitPrizePool<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + PrizePool::SIZE,
        seeds = [b"prize_pool", pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
