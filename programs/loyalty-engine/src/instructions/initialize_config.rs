use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::*;

/// Initialize global configuration for the engine.
///
/// Called once by the platform authority after deploy. Both windows are
/// policy values supplied by the settings store (reference policy: 24h
/// dedup window, 7d scratch period), never compile-time constants.
pub fn initialize_config_handler(
    ctx: Context<InitializeConfig>,
    dedup_window_secs: i64,
    scratch_period_secs: i64,
) -> Result<()> {
    require!(dedup_window_secs > 0, LoyaltyError::InvalidWindow);
    require!(scratch_period_secs > 0, LoyaltyError::InvalidWindow);

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.dedup_window_secs = dedup_window_secs;
    config.scratch_period_secs = scratch_period_secs;
    config.bump = ctx.bumps.config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ProgramConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
