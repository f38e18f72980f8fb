use crate::states::*;
use anchor_lang::prelude::*;

/// Permissionless settlement of one pool up to the current slot.
#[derive(Accounts)]
pub struct SettlePool<'info> {
    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn settle_pool(ctx: Context<SettlePool>) -> Result<()> {
    let slot = Clock::get()?.slot;
    let farm_config = &ctx.accounts.farm_config;
    let pool = &mut ctx.accounts.pool;
    pool.settle(slot, farm_config.emission_per_slot, farm_config.total_weight)?;

    emit!(PoolSettled {
        stake_mint: pool.stake_mint,
        slot: pool.last_settled_slot,
        acc_reward_per_share: pool.acc_reward_per_share,
    });
    Ok(())
}
