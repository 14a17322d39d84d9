use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::errors::*;
use crate::states::*;
use crate::utils::draw_ranked_winners;

/// Resolve a scheduled raffle into ranked winners, drawn without
/// replacement so no user wins two ranks. Invoked by the periodic job
/// runner at the configured draw time.
///
/// If the pool runs out before all ranks are filled the remaining ranks
/// stay unawarded and the raffle still completes. The transition is
/// one-way: a second resolution attempt is rejected, never re-drawn.
pub fn resolve_raffle_handler(ctx: Context<ResolveRaffle>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let clock = Clock::get()?;

    require!(
        raffle.status == RaffleStatus::Pending,
        LoyaltyError::AlreadyResolved
    );

    let randomness = keccak::hashv(&[
        &clock.slot.to_le_bytes(),
        &clock.unix_timestamp.to_le_bytes(),
        raffle.key().as_ref(),
    ])
    .to_bytes();

    let drawn = draw_ranked_winners(&raffle.entries, raffle.num_winners, &randomness);

    let prizes = raffle.prizes.clone();
    raffle.winners = drawn
        .iter()
        .map(|&(rank, user)| RaffleWinner {
            user,
            rank,
            prize: prizes[rank as usize],
        })
        .collect();

    raffle.status = RaffleStatus::Completed;
    raffle.drawn_at = clock.unix_timestamp;

    msg!(
        "Raffle resolved: {} of {} ranks awarded",
        raffle.winners.len(),
        raffle.num_winners
    );

    emit!(RaffleResolved {
        raffle: raffle.key(),
        winners_awarded: raffle.winners.len() as u8,
        drawn_at: raffle.drawn_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ResolveRaffle<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub raffle: Account<'info, Raffle>,

    pub admin: Signer<'info>,
}
