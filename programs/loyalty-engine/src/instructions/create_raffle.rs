use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Schedule a raffle with one external prize reference per ranked slot
/// (rank = list index, ascending desirability order).
pub fn create_raffle_handler(
    ctx: Context<CreateRaffle>,
    raffle_id: u64,
    prizes: Vec<Pubkey>,
) -> Result<()> {
    require!(
        !prizes.is_empty() && prizes.len() <= Raffle::MAX_WINNERS,
        LoyaltyError::InvalidWinnerCount
    );

    let raffle = &mut ctx.accounts.raffle;
    raffle.event = ctx.accounts.event.key();
    raffle.raffle_id = raffle_id;
    raffle.num_winners = prizes.len() as u8;
    raffle.status = RaffleStatus::Pending;
    raffle.drawn_at = 0;
    raffle.prizes = prizes;
    raffle.entries = Vec::new();
    raffle.winners = Vec::new();
    raffle.bump = ctx.bumps.raffle;

    Ok(())
}

#[derive(Accounts)]
#[instruction(raffle_id: u64)]
pub struct CreateRaffle<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Raffle PDA. One per (event, raffle_id).
    #[account(
        init,
        payer = admin,
        space = 8 + Raffle::SIZE,
        seeds = [
            b"raffle",
            event.key().as_ref(),
            &raffle_id.to_le_bytes(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: event this raffle belongs to. We only read its public key.
    pub event: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
