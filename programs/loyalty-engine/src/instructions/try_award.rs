use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::errors::*;
use crate::states::*;
use crate::utils::window_elapsed;

/// Award points for an action unless the same (user, reason, related
/// entity) tuple was already rewarded within the configured window.
///
/// The dedup marker, the member balance and the ledger entry are all
/// write-locked by this one transaction, so two concurrent calls for the
/// same tuple cannot both pass the window check and both commit.
///
/// `points == 0` means the reward category is disabled in settings: the
/// call succeeds silently without committing a ledger entry, so callers
/// never special-case disabled rewards.
pub fn try_award_handler(
    ctx: Context<TryAward>,
    points: u64,
    reason: PointReason,
    related_entity: Pubkey,
    description: String,
) -> Result<()> {
    require!(
        description.as_bytes().len() <= PointTransaction::MAX_DESCRIPTION_LEN,
        LoyaltyError::DescriptionTooLong
    );

    if points == 0 {
        // Anchor created the ledger PDA before this handler ran; give it
        // back to the payer so no zeroed entry is left behind and the
        // sequence number stays unspent.
        return ctx
            .accounts
            .transaction
            .close(ctx.accounts.admin.to_account_info());
    }

    let config = &ctx.accounts.config;
    let marker = &mut ctx.accounts.marker;
    let member = &mut ctx.accounts.member;
    let transaction = &mut ctx.accounts.transaction;
    let clock = Clock::get()?;

    // Expected business rejection, not a fault: the frontend maps this to
    // "you already earned points for this today".
    require!(
        window_elapsed(
            marker.last_awarded_at,
            clock.unix_timestamp,
            config.dedup_window_secs
        ),
        LoyaltyError::AlreadyAwarded
    );

    let points_delta = i64::try_from(points).map_err(|_| LoyaltyError::Overflow)?;
    let new_balance = member
        .points
        .checked_add(points)
        .ok_or(LoyaltyError::Overflow)?;
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

    marker.last_awarded_at = clock.unix_timestamp;
    marker.bump = ctx.bumps.marker;

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
#[instruction(points: u64, reason: PointReason, related_entity: Pubkey)]
pub struct TryAward<'info> {
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

    /// Dedup marker PDA keyed by the full (user, reason, related entity)
    /// tuple. Created lazily on the first award for the tuple.
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AwardMarker::SIZE,
        seeds = [
            b"award",
            user.key().as_ref(),
            &[reason.seed_byte()],
            related_entity.as_ref(),
        ],
        bump
    )]
    pub marker: Account<'info, AwardMarker>,

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

    /// CHECK: wallet being rewarded. We only read its public key.
    pub user: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
