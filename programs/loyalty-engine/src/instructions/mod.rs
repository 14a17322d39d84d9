pub use initialize_config::*;
pub mod initialize_config;

pub use update_config::*;
pub mod update_config;

pub use register_member::*;
pub mod register_member;

pub use apply_transaction::*;
pub mod apply_transaction;

pub use try_award::*;
pub mod try_award;

pub use issue_benefit::*;
pub mod issue_benefit;

pub use redeem_units::*;
pub mod redeem_units;

pub use set_benefit_paid::*;
pub mod set_benefit_paid;

pub use invalidate_benefit::*;
pub mod invalidate_benefit;

pub use init_prize_pool::*;
pub mod init_prize_pool;

pub use add_prize::*;
pub mod add_prize;

pub use set_prize_active::*;
pub mod set_prize_active;

pub use restock_prize::*;
pub mod restock_prize;

pub use play_scratch::*;
pub mod play_scratch;

pub use claim_scratch_prize::*;
pub mod claim_scratch_prize;

pub use create_raffle::*;
pub mod create_raffle;

pub use add_raffle_entries::*;
pub mod add_raffle_entries;

pub use resolve_raffle::*;
pub mod resolve_raffle;
