use anchor_lang::prelude::*;

declare_id!("HFE1AjjsGNAxZTAqp4WRMMMLygNZHSpGXxfvQLs7nrpi");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("7SF7TLf3i47bykrNZjkbFpwAdB32EKYodqRebzaLEHyE");
}

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Nebula Booster",
    project_url: "https://nebula.finance",
    contacts: "email:security@nebula.finance",
    policy: "https://nebula.finance/security",
    source_code: "https://github.com/nebula-finance/nebula-farm"
}

/// Farm delegate, energy consumer and owner of every booster escrow.
pub const BOOSTER_AUTH_SEED: &str = "booster_authority";

/// Accounts per pool in `harvest_many`'s `remaining_accounts`:
/// `[stake_token_allowance, pool, pool_delegate, position, staking_slot,
/// energy_record, nft_category, category_energy]`.
pub const HARVEST_GROUP_LEN: usize = 8;

pub mod boost;
pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod nebula_booster {

    use super::*;

    pub fn initialise_booster(ctx: Context<InitialiseBooster>, admin: Pubkey) -> Result<()> {
        instructions::initialise_booster(ctx, admin)
    }

    pub fn deposit(ctx: Context<DepositStake>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn stake_nft(ctx: Context<StakeNft>) -> Result<()> {
        instructions::stake_nft(ctx)
    }

    pub fn unstake_nft(ctx: Context<UnstakeNft>) -> Result<()> {
        instructions::unstake_nft(ctx)
    }

    pub fn harvest(ctx: Context<HarvestReward>) -> Result<()> {
        instructions::harvest(ctx)
    }

    pub fn harvest_many<'info>(
        ctx: Context<'_, '_, 'info, 'info, HarvestMany<'info>>,
    ) -> Result<()> {
        instructions::harvest_many(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawStake>) -> Result<()> {
        instructions::emergency_withdraw(ctx)
    }
}
