use anchor_lang::prelude::*;

declare_id!("DD3ozG3GePubQjZdBQbtN1peUqJaCoifbzkTivLE63pe");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("49w1PiZsFTcujBXwvF7bANYyKx6ynxHJ4ZHse1Nb25Za");
}

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Nebula Boost Config",
    project_url: "https://nebula.finance",
    contacts: "email:security@nebula.finance",
    policy: "https://nebula.finance/security",
    source_code: "https://github.com/nebula-finance/nebula-farm"
}

pub mod error;
pub mod instructions;
pub mod resolve;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod nebula_boost_config {

    use super::*;

    pub fn initialise_config(ctx: Context<InitialiseConfig>, admin: Pubkey) -> Result<()> {
        instructions::initialise_config(ctx, admin)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin(ctx, new_admin)
    }

    pub fn set_stake_token_allowance(
        ctx: Context<SetStakeTokenAllowance>,
        stake_mint: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_stake_token_allowance(ctx, stake_mint, allowed)
    }

    pub fn set_consumer_allowance(
        ctx: Context<SetConsumerAllowance>,
        consumer: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_consumer_allowance(ctx, consumer, allowed)
    }

    pub fn set_nft_category(
        ctx: Context<SetNftCategory>,
        collection: Pubkey,
        nft_mint: Pubkey,
        category_id: u32,
    ) -> Result<()> {
        instructions::set_nft_category(ctx, collection, nft_mint, category_id)
    }

    pub fn set_nft_allowance(
        ctx: Context<SetNftAllowance>,
        stake_mint: Pubkey,
        collection: Pubkey,
        nft_mint: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_nft_allowance(ctx, stake_mint, collection, nft_mint, allowed)
    }

    pub fn set_category_allowance(
        ctx: Context<SetCategoryAllowance>,
        stake_mint: Pubkey,
        collection: Pubkey,
        category_id: u32,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_category_allowance(ctx, stake_mint, collection, category_id, allowed)
    }

    pub fn set_nft_energy(
        ctx: Context<SetNftEnergy>,
        collection: Pubkey,
        nft_mint: Pubkey,
        max_energy: u64,
        boost_bps: u64,
    ) -> Result<()> {
        instructions::set_nft_energy(ctx, collection, nft_mint, max_energy, boost_bps)
    }

    pub fn set_nft_energy_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetNftEnergyBatch<'info>>,
        entries: Vec<EnergyEntry>,
    ) -> Result<()> {
        instructions::set_nft_energy_batch(ctx, entries)
    }

    pub fn set_category_energy(
        ctx: Context<SetCategoryEnergy>,
        collection: Pubkey,
        category_id: u32,
        max_energy: u64,
        boost_bps: u64,
    ) -> Result<()> {
        instructions::set_category_energy(ctx, collection, category_id, max_energy, boost_bps)
    }

    pub fn consume_energy(
        ctx: Context<ConsumeEnergy>,
        collection: Pubkey,
        nft_mint: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::consume_energy(ctx, collection, nft_mint, amount)
    }
}
