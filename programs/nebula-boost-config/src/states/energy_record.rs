use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// EnergyRecord Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string: `ENERGY_SEED + collection + nft_mint`.
pub const ENERGY_SEED: &str = "energy";

/// Consumable boost resource of one NFT.
///
/// `current_energy <= max_energy` always holds. Provisioning resets
/// `current_energy` to `max_energy`; otherwise energy only goes down through
/// `consume` and never regenerates.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct EnergyRecord {
    /// PDA bump for this account.
    pub bump: u8,

    pub collection: Pubkey,

    pub nft_mint: Pubkey,

    /// Energy granted at provisioning.
    pub max_energy: u64,

    /// Energy left to spend on boosts.
    pub current_energy: u64,

    /// Boost rate in basis points of the harvested base reward.
    pub boost_bps: u64,

    /// Slot of the last provisioning.
    pub updated_at_slot: u64,
}

impl EnergyRecord {
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: collection, nft mint
    /// - 8 * 4: four u64 fields
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 4;

    /// Creates or overwrites the record with a full tank.
    pub fn provision(&mut self, max_energy: u64, boost_bps: u64, slot: u64) {
        self.max_energy = max_energy;
        self.current_energy = max_energy;
        self.boost_bps = boost_bps;
        self.updated_at_slot = slot;
    }

    /// Spends `amount` energy. Fails without touching the record when more
    /// than `current_energy` is requested.
    pub fn consume(&mut self, amount: u64) -> Result<()> {
        self.current_energy = self
            .current_energy
            .checked_sub(amount)
            .ok_or(ErrorCode::EnergyUnderflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn provisioned(max_energy: u64) -> EnergyRecord {
        let mut record = EnergyRecord::default();
        record.provision(max_energy, 1_000, 42);
        record
    }

    #[test]
    fn provisioning_fills_to_max() {
        let mut record = provisioned(100);
        record.consume(60).unwrap();
        record.provision(80, 500, 43);
        assert_eq!(record.current_energy, 80);
        assert_eq!(record.max_energy, 80);
        assert_eq!(record.boost_bps, 500);
        assert_eq!(record.updated_at_slot, 43);
    }

    #[test]
    fn consuming_beyond_balance_leaves_record_unchanged() {
        let mut record = provisioned(100);
        let before = record.clone();
        assert!(record.consume(101).is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn consuming_exact_balance_drains() {
        let mut record = provisioned(10);
        record.consume(10).unwrap();
        assert_eq!(record.current_energy, 0);
        assert!(record.consume(1).is_err());
    }

    proptest! {
        #[test]
        fn energy_never_exceeds_max(
            max in 0u64..1_000_000,
            spends in proptest::collection::vec(0u64..200_000, 0..20),
        ) {
            let mut record = provisioned(max);
            for spend in spends {
                let before = record.current_energy;
                match record.consume(spend) {
                    Ok(()) => prop_assert_eq!(record.current_energy, before - spend),
                    Err(_) => prop_assert_eq!(record.current_energy, before),
                }
                prop_assert!(record.current_energy <= record.max_energy);
            }
        }
    }
}
