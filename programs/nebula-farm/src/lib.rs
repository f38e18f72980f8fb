use anchor_lang::prelude::*;

declare_id!("4xh3oubykGL48yRJXMmzFjka7rYXBcV2seREwRQ58pkP");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("24fN5W8YXRr1V9SxqZcTNFztxebW3V2bu3ZUYecaETuT");
}

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Nebula Farm",
    project_url: "https://nebula.finance",
    contacts: "email:security@nebula.finance",
    policy: "https://nebula.finance/security",
    source_code: "https://github.com/nebula-finance/nebula-farm"
}

/// Signs every transfer out of the reward vault and the stake vaults.
pub const AUTH_SEED: &str = "vault_authority";
pub const REWARD_VAULT_SEED: &str = "reward_vault";
pub const STAKE_VAULT_SEED: &str = "stake_vault";

/// Fixed-point scale of `Pool::acc_reward_per_share`.
pub const ACC_PRECISION: u128 = 1_000_000_000_000;

/// Reserved identity that can never be registered as a stake mint.
pub const STAKE_MINT_SENTINEL: Pubkey = Pubkey::new_from_array([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
]);

pub mod error;
pub mod instructions;
pub mod math;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod nebula_farm {

    use super::*;

    pub fn initialise_farm(
        ctx: Context<InitialiseFarm>,
        admin: Pubkey,
        emission_per_slot: u64,
        start_slot: u64,
    ) -> Result<()> {
        instructions::initialise_farm(ctx, admin, emission_per_slot, start_slot)
    }

    pub fn update_farm_config<'info>(
        ctx: Context<'_, '_, 'info, 'info, UpdateFarmConfig<'info>>,
        param: u8,
        value: u64,
    ) -> Result<()> {
        instructions::update_farm_config(ctx, param, value)
    }

    pub fn add_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, AddPool<'info>>,
        weight: u64,
    ) -> Result<()> {
        instructions::add_pool(ctx, weight)
    }

    pub fn set_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetPool<'info>>,
        weight: u64,
    ) -> Result<()> {
        instructions::set_pool(ctx, weight)
    }

    pub fn settle_pool(ctx: Context<SettlePool>) -> Result<()> {
        instructions::settle_pool(ctx)
    }

    pub fn set_delegated_mode(ctx: Context<SetDelegatedMode>, enabled: bool) -> Result<()> {
        instructions::set_delegated_mode(ctx, enabled)
    }

    pub fn add_delegate(ctx: Context<AddDelegate>, delegate: Pubkey) -> Result<()> {
        instructions::add_delegate(ctx, delegate)
    }

    pub fn remove_delegate(ctx: Context<RemoveDelegate>, delegate: Pubkey) -> Result<()> {
        instructions::remove_delegate(ctx, delegate)
    }

    pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
        instructions::fund_reward_vault(ctx, amount)
    }

    pub fn deposit(ctx: Context<Deposit>, beneficiary: Pubkey, amount: u64) -> Result<()> {
        instructions::deposit(ctx, beneficiary, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, beneficiary: Pubkey, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, beneficiary, amount)
    }

    pub fn harvest(ctx: Context<Harvest>, beneficiary: Pubkey) -> Result<()> {
        instructions::harvest(ctx, beneficiary)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, beneficiary: Pubkey) -> Result<()> {
        instructions::emergency_withdraw(ctx, beneficiary)
    }

    pub fn mint_extra_reward(
        ctx: Context<MintExtraReward>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::mint_extra_reward(ctx, beneficiary, amount)
    }

    pub fn pending_reward(ctx: Context<PendingReward>, beneficiary: Pubkey) -> Result<u64> {
        instructions::pending_reward(ctx, beneficiary)
    }
}
