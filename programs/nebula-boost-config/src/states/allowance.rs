use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Allow-list Accounts
// ──────────────────────────────────────────────────────────────────────────────
//
// One PDA per allow-list entry. A missing account reads as "not allowed";
// disabling an entry keeps the account and clears `allowed`.
//

/// `STAKE_TOKEN_SEED + stake_mint`
pub const STAKE_TOKEN_SEED: &str = "stake_token";
/// `NFT_ALLOWANCE_SEED + stake_mint + nft_mint`
pub const NFT_ALLOWANCE_SEED: &str = "nft_allowance";
/// `NFT_CATEGORY_SEED + nft_mint`
pub const NFT_CATEGORY_SEED: &str = "nft_category";
/// `CATEGORY_ALLOWANCE_SEED + stake_mint + collection + category_id (le bytes)`
pub const CATEGORY_ALLOWANCE_SEED: &str = "category_allowance";
/// `ENERGY_CONSUMER_SEED + consumer`
pub const ENERGY_CONSUMER_SEED: &str = "energy_consumer";

/// Stake mints the booster accepts.
#[account]
#[derive(Default, Debug)]
pub struct StakeTokenAllowance {
    pub bump: u8,
    pub stake_mint: Pubkey,
    pub allowed: bool,
}

impl StakeTokenAllowance {
    pub const LEN: usize = 8 + 1 + 32 + 1;
}

/// Exact per-NFT override for one stake mint.
#[account]
#[derive(Default, Debug)]
pub struct NftAllowance {
    pub bump: u8,
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub allowed: bool,
}

impl NftAllowance {
    pub const LEN: usize = 8 + 1 + 32 * 3 + 1;
}

/// Category tag of an NFT, used by the category-level fallback.
#[account]
#[derive(Default, Debug)]
pub struct NftCategory {
    pub bump: u8,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub category_id: u32,
}

impl NftCategory {
    pub const LEN: usize = 8 + 1 + 32 * 2 + 4;
}

/// Category-level allowance of a collection for one stake mint.
#[account]
#[derive(Default, Debug)]
pub struct CategoryAllowance {
    pub bump: u8,
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub category_id: u32,
    pub allowed: bool,
}

impl CategoryAllowance {
    pub const LEN: usize = 8 + 1 + 32 * 2 + 4 + 1;
}

/// Programs (or wallets) allowed to call `consume_energy`.
#[account]
#[derive(Default, Debug)]
pub struct EnergyConsumer {
    pub bump: u8,
    pub consumer: Pubkey,
    pub allowed: bool,
}

impl EnergyConsumer {
    pub const LEN: usize = 8 + 1 + 32 + 1;
}
