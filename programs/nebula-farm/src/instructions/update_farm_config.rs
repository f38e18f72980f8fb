use crate::error::ErrorCode;
use crate::states::{FarmConfig, FarmConfigUpdated, FARM_CONFIG_SEED};
use crate::utils::settle_remaining_pools;
use anchor_lang::prelude::*;

/// Accounts context for `update_farm_config`.
///
/// Only the stored admin or the program-level admin may update the farm.
/// When changing the emission rate, pass every pool (writable) in
/// `remaining_accounts` so accrual up to this slot is booked at the old rate.
#[derive(Accounts)]
pub struct UpdateFarmConfig<'info> {
    #[account(
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Account<'info, FarmConfig>,
}

/// Updates selected fields of the farm configuration.
///
/// # Param Mapping
/// - `0`: **Admin change** → new admin Pubkey passed via `remaining_accounts[0]`.
/// - `1`: **emission_per_slot** → pools in `remaining_accounts` are settled first.
/// - `2`: **start_slot**.
///
/// Any other `param` value returns `ErrorCode::InvalidParam`.
pub fn update_farm_config<'info>(
    ctx: Context<'_, '_, 'info, 'info, UpdateFarmConfig<'info>>,
    param: u8,
    value: u64,
) -> Result<()> {
    let farm_config = &mut ctx.accounts.farm_config;
    match param {
        0 => {
            let new_admin = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::InvalidParam);
            farm_config.admin = new_admin;
        }
        1 => {
            let slot = Clock::get()?.slot;
            settle_remaining_pools(ctx.remaining_accounts, farm_config, slot, None)?;
            farm_config.emission_per_slot = value;
        }
        2 => {
            farm_config.start_slot = value;
        }
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(FarmConfigUpdated {
        admin: farm_config.admin,
        emission_per_slot: farm_config.emission_per_slot,
        start_slot: farm_config.start_slot,
    });
    Ok(())
}
