use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track boost configuration
// ──────────────────────────────────────────────────────────────────────────────
//

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct AdminChanged {
    pub previous: Pubkey,
    pub admin: Pubkey,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakeTokenAllowanceSet {
    pub stake_mint: Pubkey,
    pub allowed: bool,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConsumerAllowanceSet {
    pub consumer: Pubkey,
    pub allowed: bool,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct NftCategorySet {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub category_id: u32,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct NftAllowanceSet {
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub allowed: bool,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct CategoryAllowanceSet {
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub category_id: u32,
    pub allowed: bool,
}

/// Emitted for every record written by `set_nft_energy` or the batch variant.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct NftEnergySet {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub max_energy: u64,
    pub boost_bps: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct EnergyConsumed {
    /// Caller that spent the energy (the booster authority in practice).
    pub consumer: Pubkey,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub amount: u64,
    /// Energy left after the call.
    pub current_energy: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct CategoryEnergySet {
    pub collection: Pubkey,
    pub category_id: u32,
    pub max_energy: u64,
    pub boost_bps: u64,
}
