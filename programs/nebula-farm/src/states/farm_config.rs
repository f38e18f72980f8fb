use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Farm Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the farm configuration account.
pub const FARM_CONFIG_SEED: &str = "farm_config";

/// Farm-wide emission parameters and payout statistics.
///
/// Created once by `initialise_farm`. `total_weight` is the sum of every
/// registered pool's `weight` and is only changed together with a pool's
/// weight in `add_pool` / `set_pool`.
#[account]
#[derive(Default, Debug)]
pub struct FarmConfig {
    /// PDA bump for this account.
    pub bump: u8,

    /// Bump of the vault authority PDA (`AUTH_SEED`).
    pub authority_bump: u8,

    /// Current admin (pool registration, reweighting, delegate management).
    pub admin: Pubkey,

    /// Mint of the reward asset.
    pub reward_mint: Pubkey,

    /// Program-owned token account holding the reward asset.
    pub reward_vault: Pubkey,

    /// Reward units emitted per slot across all pools.
    pub emission_per_slot: u64,

    /// No pool accrues before this slot.
    pub start_slot: u64,

    /// Sum of all pool weights.
    pub total_weight: u64,

    /// Number of pools ever registered.
    pub pool_count: u64,

    /// Reward actually transferred out of the vault.
    pub total_reward_paid: u64,

    /// Reward booked by the accumulator but not transferred for lack of balance.
    pub total_reward_shortfall: u64,

    /// Reward minted by delegates through `mint_extra_reward`.
    pub total_extra_minted: u64,
}

impl FarmConfig {
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1 + 1: bumps
    /// - 32 * 3: admin, reward mint, reward vault
    /// - 8 * 7: seven u64 fields
    pub const LEN: usize = 8 + 1 + 1 + 32 * 3 + 8 * 7;

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        *key == self.admin || *key == crate::admin::id()
    }

    /// Slot a newly registered pool starts accruing from.
    pub fn first_settlement_slot(&self, current_slot: u64) -> u64 {
        current_slot.max(self.start_slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_admin_is_always_admin() {
        let config = FarmConfig {
            admin: Pubkey::new_unique(),
            ..Default::default()
        };
        assert!(config.is_admin(&config.admin));
        assert!(config.is_admin(&crate::admin::id()));
        assert!(!config.is_admin(&Pubkey::new_unique()));
    }

    #[test]
    fn pools_never_accrue_before_start() {
        let config = FarmConfig {
            start_slot: 500,
            ..Default::default()
        };
        assert_eq!(config.first_settlement_slot(100), 500);
        assert_eq!(config.first_settlement_slot(900), 900);
    }
}
