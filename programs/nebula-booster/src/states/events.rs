use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track boosted positions
// ──────────────────────────────────────────────────────────────────────────────
//

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct BoosterInitialized {
    pub admin: Pubkey,
    pub booster_authority: Pubkey,
    pub reward_mint: Pubkey,
}

/// Emitted for every boosted payout, including zero-value harvests.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Harvest {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    /// Reward harvested from the farm.
    pub base: u64,
    /// Boost minted on top of `base`.
    pub extra: u64,
    /// `base + extra`, all of it sent to the user.
    pub total: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Deposit {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdraw {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct NftStaked {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct NftUnstaked {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
}

/// Principal returned through the farm's emergency path; no boost applied.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct EmergencyWithdraw {
    pub user: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}
