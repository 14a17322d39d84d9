use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Update the anti-abuse windows. Admin only.
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    dedup_window_secs: i64,
    scratch_period_secs: i64,
) -> Result<()> {
    require!(dedup_window_secs > 0, LoyaltyError::InvalidWindow);
    require!(scratch_period_secs > 0, LoyaltyError::InvalidWindow);

    let config = &mut ctx.accounts.config;
    config.dedup_window_secs = dedup_window_secs;
    config.scratch_period_secs = scratch_period_secs;

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = admin @ LoyaltyError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,

    pub admin: Signer<'info>,
}
