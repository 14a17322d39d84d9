use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;
use crate::utils::apply_delta;

/// Append one ledger entry and mutate the balance, as a single atomic unit.
///
/// - `points_delta` may be positive (award) or negative (penalty / spend).
/// - The `Member` account is write-locked for the whole transaction, so
///   concurrent calls for the same user serialize and no increment can be
///   lost; different users proceed in parallel.
/// - A negative delta that would take the balance below zero is rejected:
///   the balance stays non-negative by construction.
/// - Admin adjustments come through here directly, bypassing the dedup
///   guard by design.
pub fn apply_transaction_handler(
    ctx: Context<ApplyTransaction>,
    points_delta: i64,
    reason: PointReason,
    description: String,
    related_entity: Pubkey,
) -> Result<()> {
    require!(points_delta != 0, LoyaltyError::InvalidPointsDelta);
    require!(
        description.as_bytes().len() <= PointTransaction::MAX_DESCRIPTION_LEN,
        LoyaltyError::DescriptionTooLong
    );

    let member = &mut ctx.accounts.member;
    let transaction = &mut ctx.accounts.transaction;
    let clock = Clock::get()?;

    let new_balance = apply_delta(member.points, points_delta).ok_or(if points_delta >= 0 {
        LoyaltyError::Overflow
    } else {
        LoyaltyError::InsufficientPoints
    })?;

    let seq = member.tx_count;

    transaction.user = member.user;
    transaction.points = points_delta;
    transaction.reason = reason;
    transaction.description = description;
    transaction.related_entity = related_entity;
    transaction.created_at = clock.unix_timestamp;
    transaction.seq = seq;

    member.points = new_balance;
    member.tx_count = member.tx_count.checked_add(1).ok_or(LoyaltyError::Overflow)?;

    emit!(TransactionApplied {
        user: member.user,
        seq,
        points: points_delta,
        reason,
        new_balance,
        related_entity,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ApplyTransaction<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [b"member", user.key().as_ref()],
        bump = member.bump
    )]
    pub member: Account<'info, Member>,

    /// Ledger entry PDA. One per (user, sequence number); immutable once
    /// created.
    #[account(
        init,
        payer = admin,
        space = 8 + PointTransaction::SIZE,
        seeds = [
            b"transaction",
            user.key().as_ref(),
            &member.tx_count.to_le_bytes(),
        ],
        bump
    )]
    pub transaction: Account<'info, PointTransaction>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: wallet whose balance is mutated. We only read its public key.
    pub user: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
