use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Register a ticket holder's entries into the raffle pool. Each ticket
/// contributes the virtual-draw weight of its acquisition type (VIP table
/// 3, paid ticket 2, free ticket 1).
pub fn add_raffle_entries_handler(
    ctx: Context<AddRaffleEntries>,
    entry_kind: RaffleEntryKind,
    count: u16,
) -> Result<()> {
    require!(count >= 1, LoyaltyError::InvalidEntryCount);

    let raffle = &mut ctx.accounts.raffle;

    require!(
        raffle.status == RaffleStatus::Pending,
        LoyaltyError::RaffleNotPending
    );
    require!(
        raffle.entries.len() + count as usize <= Raffle::MAX_ENTRIES,
        LoyaltyError::TooManyEntries
    );

    let user = ctx.accounts.user.key();
    let weight = entry_kind.weight();
    for _ in 0..count {
        raffle.entries.push(RaffleEntry { user, weight });
    }

    msg!("Total entries: {}", raffle.entries.len());

    Ok(())
}

#[derive(Accounts)]
pub struct AddRaffleEntries<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub raffle: Account<'info, Raffle>,

    pub admin: Signer<'info>,

    /// CHECK: ticket holder entering the raffle. We only read its public key.
    pub user: UncheckedAccount<'info>,
}
