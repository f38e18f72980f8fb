use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::settle_remaining_pools;
use anchor_lang::prelude::*;

/// Accounts context for `set_pool`.
///
/// Reweights an existing pool. An unregistered stake mint has no pool
/// account and fails account resolution.
#[derive(Accounts)]
pub struct SetPool<'info> {
    #[account(
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
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

pub fn set_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetPool<'info>>,
    weight: u64,
) -> Result<()> {
    validate_stake_mint(&ctx.accounts.pool.stake_mint)?;

    let slot = Clock::get()?.slot;
    let pool_key = ctx.accounts.pool.key();
    settle_remaining_pools(
        ctx.remaining_accounts,
        &ctx.accounts.farm_config,
        slot,
        Some(pool_key),
    )?;

    let farm_config = &mut ctx.accounts.farm_config;
    let pool = &mut ctx.accounts.pool;
    pool.settle(slot, farm_config.emission_per_slot, farm_config.total_weight)?;

    let old_weight = pool.weight;
    farm_config.total_weight = pool.reweight(weight, farm_config.total_weight)?;

    emit!(PoolWeightSet {
        stake_mint: pool.stake_mint,
        old_weight,
        new_weight: weight,
        total_weight: farm_config.total_weight,
    });
    Ok(())
}
