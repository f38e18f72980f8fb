use crate::states::*;
use anchor_lang::prelude::*;

/// Read-only view of a beneficiary's pending reward at the current slot.
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct PendingReward<'info> {
    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), beneficiary.as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, UserPosition>>,
}

pub fn pending_reward(ctx: Context<PendingReward>, _beneficiary: Pubkey) -> Result<u64> {
    let slot = Clock::get()?.slot;
    let farm_config = &ctx.accounts.farm_config;
    let acc = ctx.accounts.pool.projected_acc(
        slot,
        farm_config.emission_per_slot,
        farm_config.total_weight,
    )?;
    ctx.accounts.position.pending(acc)
}
