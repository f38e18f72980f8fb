use crate::states::EnergyRecord;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// CategoryEnergy Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string: `CATEGORY_ENERGY_SEED + collection + category_id (le bytes)`.
pub const CATEGORY_ENERGY_SEED: &str = "category_energy";

/// Default energy for every NFT of one category.
///
/// This is a template, not a shared tank. An NFT without its own record
/// reads a full tank from here; the first spend copies the template into
/// the NFT's own `EnergyRecord`, which takes precedence from then on.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct CategoryEnergy {
    /// PDA bump for this account.
    pub bump: u8,

    pub collection: Pubkey,

    pub category_id: u32,

    pub max_energy: u64,

    pub boost_bps: u64,

    /// Slot of the last provisioning.
    pub updated_at_slot: u64,
}

impl CategoryEnergy {
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: collection
    /// - 4: category id
    /// - 8 * 3: max energy, boost bps, updated at
    pub const LEN: usize = 8 + 1 + 32 + 4 + 8 * 3;

    pub fn provision(&mut self, max_energy: u64, boost_bps: u64, slot: u64) {
        self.max_energy = max_energy;
        self.boost_bps = boost_bps;
        self.updated_at_slot = slot;
    }

    /// Full-tank record `nft_mint` starts from when it has none of its own.
    pub fn record_for(&self, nft_mint: Pubkey) -> EnergyRecord {
        EnergyRecord {
            bump: 0,
            collection: self.collection,
            nft_mint,
            max_energy: self.max_energy,
            current_energy: self.max_energy,
            boost_bps: self.boost_bps,
            updated_at_slot: self.updated_at_slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_yields_full_tank() {
        let collection = Pubkey::new_unique();
        let nft = Pubkey::new_unique();
        let mut category = CategoryEnergy {
            collection,
            category_id: 1,
            ..Default::default()
        };
        category.provision(5, 10, 7);

        let record = category.record_for(nft);
        assert_eq!(record.collection, collection);
        assert_eq!(record.nft_mint, nft);
        assert_eq!(record.max_energy, 5);
        assert_eq!(record.current_energy, 5);
        assert_eq!(record.boost_bps, 10);
    }

    #[test]
    fn reprovisioning_replaces_defaults() {
        let mut category = CategoryEnergy::default();
        category.provision(5, 10, 1);
        category.provision(9, 12, 2);
        let record = category.record_for(Pubkey::new_unique());
        assert_eq!((record.max_energy, record.current_energy, record.boost_bps), (9, 9, 12));
        assert_eq!(category.updated_at_slot, 2);
    }
}
