use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Append a prize entry to the scratch pool. Weights are relative over the
/// active pool and need not sum to any particular total; a `NoWin` entry
/// shapes the lose rate explicitly.
pub fn add_prize_handler(
    ctx: Context<AddPrize>,
    kind: PrizeKind,
    probability: u64,
    stock: u32,
) -> Result<()> {
    let pool = &mut ctx.accounts.prize_pool;

    require!(
        pool.prizes.len() < PrizePool::MAX_PRIZES,
        LoyaltyError::PrizePoolFull
    );

    pool.prizes.push(Prize {
        kind,
        probability,
        stock,
        is_active: true,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddPrize<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub prize_pool: Account<'info, PrizePool>,

    pub admin: Signer<'info>,
}
