use anchor_lang::prelude::*;

// ---------------------------
// Accounts: State
// ---------------------------

/// Why a user's balance changed. Closed set: the ledger rejects anything
/// outside these variants at deserialization time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointReason {
    Attendance,
    NoShowPenalty,
    RewardRedemption,
    StorePurchase,
    BirthdayBonus,
    SocialShare,
    AdminAdjustment,
}

impl PointReason {
    /// Stable byte used in the dedup-marker PDA seeds.
    pub fn seed_byte(self) -> u8 {
        self as u8
    }
}

/// Display status of a benefit unit, derived on read from the persisted
/// counters so it can never drift from them.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BenefitStatus {
    Valid,
    PartiallyUsed,
    Redeemed,
    PartiallyPaid,
    Invalidated,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrizeKind {
    Product,
    PartnerCoupon,
    NoWin,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleStatus {
    Pending,
    Completed,
}

/// How a raffle ticket was acquired. The acquisition type sets how many
/// virtual draws the ticket contributes to the pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleEntryKind {
    VipTable,
    PaidTicket,
    FreeTicket,
}

impl RaffleEntryKind {
    pub fn weight(self) -> u16 {
        match self {
            RaffleEntryKind::VipTable => 3,
            RaffleEntryKind::PaidTicket => 2,
            RaffleEntryKind::FreeTicket => 1,
        }
    }
}

/// Global configuration: admin authority and the anti-abuse windows.
/// Window lengths are runtime values, updatable via `update_config`.
#[account]
pub struct ProgramConfig {
    pub admin: Pubkey,            // 32 bytes - platform backend authority
    pub dedup_window_secs: i64,   // 8 bytes  - anti-double-award window
    pub scratch_period_secs: i64, // 8 bytes  - min seconds between scratch plays
    pub bump: u8,                 // 1 byte
}

impl ProgramConfig {
    pub const SIZE: usize = 32 + 8 + 8 + 1;
}

/// Per-user balance row. `points` is mutated only by the ledger
/// instructions, always in the same transaction that appends the
/// corresponding `PointTransaction`, so it equals the sum of all
/// committed deltas at every commit boundary.
#[account]
pub struct Member {
    pub user: Pubkey,  // 32 bytes - wallet this balance belongs to
    pub points: u64,   // 8 bytes  - current balance, non-negative
    pub tx_count: u64, // 8 bytes  - next ledger sequence number
    pub bump: u8,      // 1 byte
}

impl Member {
    pub const SIZE: usize = 32 + 8 + 8 + 1;
}

/// One immutable ledger entry. Created together with the balance mutation,
/// never updated or closed afterwards. `seq` totally orders a user's
/// history; newest-first reads are a descending scan off-chain.
#[account]
pub struct PointTransaction {
    pub user: Pubkey,           // 32 bytes
    pub points: i64,            // 8 bytes  - signed delta applied to the balance
    pub reason: PointReason,    // 1 byte
    // String in account: 4 bytes for length + MAX_DESCRIPTION_LEN reserved
    pub description: String,    // 4 + MAX_DESCRIPTION_LEN bytes
    pub related_entity: Pubkey, // 32 bytes - Pubkey::default() when absent
    pub created_at: i64,        // 8 bytes
    pub seq: u64,               // 8 bytes  - per-user sequence number
}

impl PointTransaction {
    pub const MAX_DESCRIPTION_LEN: usize = 128;

    pub const SIZE: usize = 32 + 8 + 1 + 4 + Self::MAX_DESCRIPTION_LEN + 32 + 8 + 8;
}

/// Dedup marker for one (user, reason, related entity) tuple. The PDA seeds
/// are the tuple itself, which makes "most recent award for this tuple" a
/// single account lookup instead of a history scan.
#[account]
pub struct AwardMarker {
    pub last_awarded_at: i64, // 8 bytes - unix timestamp of the last award
    pub bump: u8,             // 1 byte
}

impl AwardMarker {
    pub const SIZE: usize = 8 + 1;
}

/// An issued, finitely-redeemable entitlement (ticket, voucher, gift).
/// Only the two counters and the flags are persisted; the display status
/// is computed from them on read.
#[account]
pub struct BenefitUnit {
    pub event: Pubkey,       // 32 bytes - issuing event
    pub owner: Pubkey,       // 32 bytes - holder of the benefit
    pub benefit_id: u64,     // 8 bytes  - id within (event, owner)
    pub quantity: u32,       // 4 bytes  - entitlement, fixed at issuance
    pub redeemed_count: u32, // 4 bytes  - monotone, <= quantity
    pub fully_paid: bool,    // 1 byte
    pub invalidated: bool,   // 1 byte   - terminal, blocks redemption
    pub issued_at: i64,      // 8 bytes
    pub bump: u8,            // 1 byte
}

impl BenefitUnit {
    pub const SIZE: usize = 32 + 32 + 8 + 4 + 4 + 1 + 1 + 8 + 1;

    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.redeemed_count)
    }

    /// Pure function of the persisted fields. Precedence: invalidation,
    /// then payment state, then consumption progress.
    pub fn status(&self) -> BenefitStatus {
        if self.invalidated {
            BenefitStatus::Invalidated
        } else if !self.fully_paid {
            BenefitStatus::PartiallyPaid
        } else if self.redeemed_count == 0 {
            BenefitStatus::Valid
        } else if self.redeemed_count < self.quantity {
            BenefitStatus::PartiallyUsed
        } else {
            BenefitStatus::Redeemed
        }
    }
}

/// One scratch-card prize entry. `probability` is a relative weight over
/// the active pool, not a percentage; weights need not sum to anything.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct Prize {
    pub kind: PrizeKind,  // 1 byte
    pub probability: u64, // 8 bytes - relative weight in the draw
    pub stock: u32,       // 4 bytes - remaining units, never below zero
    pub is_active: bool,  // 1 byte
}

impl Prize {
    pub const SIZE: usize = 1 + 8 + 4 + 1;

    /// A no-win entry stays drawable regardless of stock since winning it
    /// consumes nothing.
    pub fn is_drawable(&self) -> bool {
        self.is_active && (self.kind == PrizeKind::NoWin || self.stock > 0)
    }
}

/// The scratch-card prize table. A single account so every draw holds the
/// write-lock over the whole pool: stock decrements are serialized and can
/// never lose a race.
#[account]
pub struct PrizePool {
    pub authority: Pubkey,  // 32 bytes
    pub pool_id: u64,       // 8 bytes
    // Vec in account: 4 bytes for length + MAX_PRIZES entries reserved
    pub prizes: Vec<Prize>, // 4 + MAX_PRIZES * Prize::SIZE bytes
    pub bump: u8,           // 1 byte
}

impl PrizePool {
    pub const MAX_PRIZES: usize = 16;

    pub const SIZE: usize = 32 + 8 + 4 + Self::MAX_PRIZES * Prize::SIZE + 1;
}

/// Per-user scratch gate: one play per configured period regardless of
/// outcome. Created lazily on the first play.
#[account]
pub struct ScratchCard {
    pub user: Pubkey,        // 32 bytes
    pub last_played_at: i64, // 8 bytes - unix timestamp of the latest play
    pub plays: u64,          // 8 bytes - total plays, seeds the attempt PDA
    pub bump: u8,            // 1 byte
}

impl ScratchCard {
    pub const SIZE: usize = 32 + 8 + 8 + 1;
}

/// One scratch play outcome. Immutable apart from the one-shot `claimed`
/// flag on winning attempts.
#[account]
pub struct ScratchAttempt {
    pub user: Pubkey,    // 32 bytes
    pub played_at: i64,  // 8 bytes
    pub did_win: bool,   // 1 byte
    pub prize_index: u8, // 1 byte - index into the pool, valid when did_win
    pub claimed: bool,   // 1 byte
    pub bump: u8,        // 1 byte
}

impl ScratchAttempt {
    pub const SIZE: usize = 32 + 8 + 1 + 1 + 1 + 1;
}

/// One weighted ticket in a raffle pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct RaffleEntry {
    pub user: Pubkey, // 32 bytes
    pub weight: u16,  // 2 bytes - virtual draws this ticket contributes
}

impl RaffleEntry {
    pub const SIZE: usize = 32 + 2;
}

/// A resolved prize rank: one user, one rank, one external prize reference.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct RaffleWinner {
    pub user: Pubkey,  // 32 bytes
    pub rank: u8,      // 1 byte
    pub prize: Pubkey, // 32 bytes
}

impl RaffleWinner {
    pub const SIZE: usize = 32 + 1 + 32;
}

/// A scheduled drawing. `status` is a one-way `Pending -> Completed`
/// machine; re-resolving a completed raffle is rejected.
#[account]
pub struct Raffle {
    pub event: Pubkey,              // 32 bytes - event this raffle belongs to
    pub raffle_id: u64,             // 8 bytes
    pub num_winners: u8,            // 1 byte  - ranked prize slots
    pub status: RaffleStatus,       // 1 byte
    pub drawn_at: i64,              // 8 bytes - 0 until resolved
    // Vec in account: 4 bytes for length + MAX entries reserved
    pub prizes: Vec<Pubkey>,        // 4 + MAX_WINNERS * 32 bytes, rank = index
    pub entries: Vec<RaffleEntry>,  // 4 + MAX_ENTRIES * RaffleEntry::SIZE bytes
    pub winners: Vec<RaffleWinner>, // 4 + MAX_WINNERS * RaffleWinner::SIZE bytes
    pub bump: u8,                   // 1 byte
}

impl Raffle {
    pub const MAX_WINNERS: usize = 10;
    pub const MAX_ENTRIES: usize = 200;

    pub const SIZE: usize = 32
        + 8
        + 1
        + 1
        + 8
        + 4
        + Self::MAX_WINNERS * 32
        + 4
        + Self::MAX_ENTRIES * RaffleEntry::SIZE
        + 4
        + Self::MAX_WINNERS * RaffleWinner::SIZE
        + 1;
}

// ---------------------------
// Events
// ---------------------------

/// Emitted for every committed ledger entry so the indexer can serve
/// balance history without replaying accounts.
#[event]
pub struct TransactionApplied {
    pub user: Pubkey,
    pub seq: u64,
    pub points: i64,
    pub reason: PointReason,
    pub new_balance: u64,
    pub related_entity: Pubkey,
}

#[event]
pub struct BenefitRedeemed {
    pub benefit: Pubkey,
    pub owner: Pubkey,
    pub redeemed_count: u32,
    pub quantity: u32,
    pub status: BenefitStatus,
}

#[event]
pub struct ScratchPlayed {
    pub user: Pubkey,
    pub play_seq: u64,
    pub did_win: bool,
    pub prize_index: u8,
    pub played_at: i64,
}

#[event]
pub struct RaffleResolved {
    pub raffle: Pubkey,
    pub winners_awarded: u8,
    pub drawn_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benefit(quantity: u32, redeemed_count: u32) -> BenefitUnit {
        BenefitUnit {
            event: Pubkey::default(),
            owner: Pubkey::default(),
            benefit_id: 1,
            quantity,
            redeemed_count,
            fully_paid: true,
            invalidated: false,
            issued_at: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_status_follows_consumption() {
        assert_eq!(benefit(3, 0).status(), BenefitStatus::Valid);
        assert_eq!(benefit(3, 1).status(), BenefitStatus::PartiallyUsed);
        assert_eq!(benefit(3, 2).status(), BenefitStatus::PartiallyUsed);
        assert_eq!(benefit(3, 3).status(), BenefitStatus::Redeemed);
    }

    #[test]
    fn test_single_unit_benefit() {
        // quantity = 1 is the voucher / birthday-gift special case
        assert_eq!(benefit(1, 0).status(), BenefitStatus::Valid);
        assert_eq!(benefit(1, 1).status(), BenefitStatus::Redeemed);
    }

    #[test]
    fn test_status_precedence() {
        let mut b = benefit(2, 1);
        b.fully_paid = false;
        assert_eq!(b.status(), BenefitStatus::PartiallyPaid);

        b.invalidated = true;
        assert_eq!(b.status(), BenefitStatus::Invalidated);
    }

    #[test]
    fn test_remaining_never_underflows() {
        assert_eq!(benefit(3, 1).remaining(), 2);
        assert_eq!(benefit(3, 3).remaining(), 0);
    }

    #[test]
    fn test_no_win_prize_drawable_without_stock() {
        let p = Prize {
            kind: PrizeKind::NoWin,
            probability: 50,
            stock: 0,
            is_active: true,
        };
        assert!(p.is_drawable());

        let exhausted = Prize {
            kind: PrizeKind::Product,
            probability: 50,
            stock: 0,
            is_active: true,
        };
        assert!(!exhausted.is_drawable());
    }

    #[test]
    fn test_entry_kind_weights() {
        assert_eq!(RaffleEntryKind::VipTable.weight(), 3);
        assert_eq!(RaffleEntryKind::PaidTicket.weight(), 2);
        assert_eq!(RaffleEntryKind::FreeTicket.weight(), 1);
    }
}
