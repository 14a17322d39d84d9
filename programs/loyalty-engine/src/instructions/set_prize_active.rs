use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Toggle a prize entry in or out of the draw without touching its stock.
pub fn set_prize_active_handler(
    ctx: Context<SetPrizeActive>,
    index: u8,
    is_active: bool,
) -> Result<()> {
    let pool = &mut ctx.accounts.prize_pool;

    let prize = pool
        .prizes
        .get_mut(index as usize)
        .ok_or(LoyaltyError::PrizeIndexOutOfBounds)?;
    prize.is_active = is_active;

    Ok(())
}

#[derive(Accounts)]
pub struct SetPrizeActive<'info> {
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
