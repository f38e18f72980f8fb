use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track farm state changes
// ──────────────────────────────────────────────────────────────────────────────
//

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct FarmInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub emission_per_slot: u64,
    pub start_slot: u64,
}

/// Emitted by `update_farm_config` with the values after the update.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct FarmConfigUpdated {
    pub admin: Pubkey,
    pub emission_per_slot: u64,
    pub start_slot: u64,
}

/// Emitted when a pool is registered or reweighted.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolWeightSet {
    /// Stake mint keying the pool.
    pub stake_mint: Pubkey,
    /// Weight before the call (0 on registration).
    pub old_weight: u64,
    pub new_weight: u64,
    /// Farm total weight after the call.
    pub total_weight: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolSettled {
    pub stake_mint: Pubkey,
    pub slot: u64,
    pub acc_reward_per_share: u128,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct DelegatedModeSet {
    pub stake_mint: Pubkey,
    pub enabled: bool,
}

/// Emitted on `add_delegate` (enabled = true) and `remove_delegate`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct DelegateUpdated {
    pub stake_mint: Pubkey,
    pub delegate: Pubkey,
    pub enabled: bool,
    /// Append-only count of delegates ever enabled on the pool.
    pub delegate_count: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardVaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

/// Emitted on every payout attempt from the reward vault.
///
/// `paid < requested` means the vault was short; the accumulator still
/// booked the full `requested` amount.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardPaid {
    pub to: Pubkey,
    pub requested: u64,
    pub paid: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Deposited {
    pub caller: Pubkey,
    pub beneficiary: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdrawn {
    pub caller: Pubkey,
    pub beneficiary: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Harvested {
    pub caller: Pubkey,
    pub beneficiary: Pubkey,
    pub stake_mint: Pubkey,
    /// Pending reward booked for the beneficiary (before any vault shortfall).
    pub amount: u64,
}

/// Emitted when principal is returned without reward settlement.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct EmergencyWithdrawn {
    pub caller: Pubkey,
    pub beneficiary: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ExtraRewardMinted {
    pub delegate: Pubkey,
    pub beneficiary: Pubkey,
    pub stake_mint: Pubkey,
    pub amount: u64,
}
