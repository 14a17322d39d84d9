use anchor_lang::prelude::*;

declare_id!("78rTgA19jMLwPyT77o9KdRHgcEtdmehSTKW5LXPPJPJ5");

pub mod errors;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;
use states::{PointReason, PrizeKind, RaffleEntryKind};

#[program]
pub mod loyalty_engine {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        dedup_window_secs: i64,
        scratch_period_secs: i64,
    ) -> Result<()> {
        initialize_config_handler(ctx, dedup_window_secs, scratch_period_secs)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        dedup_window_secs: i64,
        scratch_period_secs: i64,
    ) -> Result<()> {
        update_config_handler(ctx, dedup_window_secs, scratch_period_secs)
    }

    pub fn register_member(ctx: Context<RegisterMember>) -> Result<()> {
        register_member_handler(ctx)
    }

    pub fn apply_transaction(
        ctx: Context<ApplyTransaction>,
        points_delta: i64,
        reason: PointReason,
        description: String,
        related_entity: Pubkey,
    ) -> Result<()> {
        apply_transaction_handler(ctx, points_delta, reason, description, related_entity)
    }

    pub fn try_award(
        ctx: Context<TryAward>,
        points: u64,
        reason: PointReason,
        related_entity: Pubkey,
        description: String,
    ) -> Result<()> {
        try_award_handler(ctx, points, reason, related_entity, description)
    }

    pub fn issue_benefit(
        ctx: Context<IssueBenefit>,
        benefit_id: u64,
        quantity: u32,
        fully_paid: bool,
    ) -> Result<()> {
        issue_benefit_handler(ctx, benefit_id, quantity, fully_paid)
    }

    pub fn redeem_units(ctx: Context<RedeemUnits>, count: u32) -> Result<()> {
        redeem_units_handler(ctx, count)
    }

    pub fn set_benefit_paid(ctx: Context<SetBenefitPaid>, fully_paid: bool) -> Result<()> {
        set_benefit_paid_handler(ctx, fully_paid)
    }

    pub fn invalidate_benefit(ctx: Context<InvalidateBenefit>) -> Result<()> {
        invalidate_benefit_handler(ctx)
    }

    pub fn init_prize_pool(ctx: Context<InitPrizePool>, pool_id: u64) -> Result<()> {
        init_prize_pool_handler(ctx, pool_id)
    }

    pub fn add_prize(
        ctx: Context<AddPrize>,
        kind: PrizeKind,
        probability: u64,
        stock: u32,
    ) -> Result<()> {
        add_prize_handler(ctx, kind, probability, stock)
    }

    pub fn set_prize_active(
        ctx: Context<SetPrizeActive>,
        index: u8,
        is_active: bool,
    ) -> Result<()> {
        set_prize_active_handler(ctx, index, is_active)
    }

    pub fn restock_prize(ctx: Context<RestockPrize>, index: u8, additional: u32) -> Result<()> {
        restock_prize_handler(ctx, index, additional)
    }

    pub fn play_scratch(ctx: Context<PlayScratch>) -> Result<()> {
        play_scratch_handler(ctx)
    }

    pub fn claim_scratch_prize(ctx: Context<ClaimScratchPrize>) -> Result<()> {
        claim_scratch_prize_handler(ctx)
    }

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        raffle_id: u64,
        prizes: Vec<Pubkey>,
    ) -> Result<()> {
        create_raffle_handler(ctx, raffle_id, prizes)
    }

    pub fn add_raffle_entries(
        ctx: Context<AddRaffleEntries>,
        entry_kind: RaffleEntryKind,
        count: u16,
    ) -> Result<()> {
        add_raffle_entries_handler(ctx, entry_kind, count)
    }

    pub fn resolve_raffle(ctx: Context<ResolveRaffle>) -> Result<()> {
        resolve_raffle_handler(ctx)
    }
}
