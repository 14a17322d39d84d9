use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::errors::*;
use crate::states::*;
use crate::utils::{expand_randomness, pick_weighted, total_active_weight, window_elapsed};

/// One scratch-card play: the rate gate and the weighted draw run in a
/// single instruction so they share the write-lock on the user's card.
/// Two racing requests for the same user serialize on that account, and
/// the second one fails the gate.
///
/// An empty or fully-exhausted pool is a valid steady state: the play is
/// still recorded, the outcome is simply a deterministic no-win. A pool
/// whose remaining active entries all carry weight zero behaves the same
/// way. Stock moves down by exactly one inside the same transaction that
/// records a winning attempt; the pool account lock means the decrement
/// can never race below zero.
pub fn play_scratch_handler(ctx: Context<PlayScratch>) -> Result<()> {
    let config = &ctx.accounts.config;
    let card = &mut ctx.accounts.scratch_card;
    let pool = &mut ctx.accounts.prize_pool;
    let attempt = &mut ctx.accounts.attempt;
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    if card.plays > 0 {
        require!(
            window_elapsed(
                card.last_played_at,
                clock.unix_timestamp,
                config.scratch_period_secs
            ),
            LoyaltyError::RateLimited
        );
    }

    let seed = keccak::hashv(&[
        &clock.slot.to_le_bytes(),
        &clock.unix_timestamp.to_le_bytes(),
        user.as_ref(),
        &card.plays.to_le_bytes(),
    ])
    .to_bytes();

    let total = total_active_weight(&pool.prizes).ok_or(LoyaltyError::Overflow)?;
    let (did_win, prize_index) = if total == 0 {
        (false, 0)
    } else {
        let roll = expand_randomness(&seed, 0) % total;
        match pick_weighted(&pool.prizes, roll) {
            Some(index) if pool.prizes[index].kind != PrizeKind::NoWin => {
                let prize = &mut pool.prizes[index];
                prize.stock = prize.stock.checked_sub(1).ok_or(LoyaltyError::Overflow)?;
                (true, index as u8)
            }
            _ => (false, 0),
        }
    };

    let play_seq = card.plays;

    card.user = user;
    card.last_played_at = clock.unix_timestamp;
    card.plays = card.plays.checked_add(1).ok_or(LoyaltyError::Overflow)?;
    card.bump = ctx.bumps.scratch_card;

    attempt.user = user;
    attempt.played_at = clock.unix_timestamp;
    attempt.did_win = did_win;
    attempt.prize_index = prize_index;
    attempt.claimed = false;
    attempt.bump = ctx.bumps.attempt;

    emit!(ScratchPlayed {
        user,
        play_seq,
        did_win,
        prize_index,
        played_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PlayScratch<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Per-user gate, created on the first play.
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + ScratchCard::SIZE,
        seeds = [b"scratch", user.key().as_ref()],
        bump
    )]
    pub scratch_card: Account<'info, ScratchCard>,

    /// Attempt record PDA. One per (user, play sequence).
    #[account(
        init,
        payer = admin,
        space = 8 + ScratchAttempt::SIZE,
        seeds = [
            b"scratch_attempt",
            user.key().as_ref(),
            &scratch_card.plays.to_le_bytes(),
        ],
        bump
    )]
    pub attempt: Account<'info, ScratchAttempt>,

    #[account(mut)]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: wallet playing the scratch card. We only read its public key.
    pub user: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
