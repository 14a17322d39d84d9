use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Add stock to an existing prize entry. Stock only ever moves down by one
/// per winning play, so restocking is the sole way it increases.
pub fn restock_prize_handler(ctx: Context<RestockPrize>, index: u8, additional: u32) -> Result<()> {
    let pool = &mut ctx.accounts.prize_pool;

    let prize = pool
        .prizes
        .get_mut(index as usize)
        .ok_or(LoyaltyError::PrizeIndexOutOfBounds)?;
    prize.stock = prize
        .stock
        .checked_add(additional)
        .ok_or(LoyaltyError::Overflow)?;

    Ok(())
}

#[derive(Accounts)]
pub struct RestockPrize<'info> {
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
