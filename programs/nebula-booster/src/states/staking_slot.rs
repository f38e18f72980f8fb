use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakingSlot Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string: `STAKING_SLOT_SEED + stake_mint + owner`.
pub const STAKING_SLOT_SEED: &str = "staking_slot";

/// The NFT a user has staked against one pool, if any.
///
/// `Unstaked` is represented by a default `nft_mint`. Replacing an NFT goes
/// through `clear` (after the outgoing NFT's boosted harvest) and `stage`.
#[account]
#[derive(Default, Debug)]
pub struct StakingSlot {
    pub bump: u8,
    pub stake_mint: Pubkey,
    pub owner: Pubkey,
    /// Verified collection of the staked NFT.
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub staked_at_slot: u64,
}

impl StakingSlot {
    pub const LEN: usize = 8 + 1 + 32 * 4 + 8;

    /// Records the slot's keys on first use; a no-op afterwards.
    pub fn bind(&mut self, bump: u8, stake_mint: Pubkey, owner: Pubkey) {
        if self.owner == Pubkey::default() {
            self.bump = bump;
            self.stake_mint = stake_mint;
            self.owner = owner;
        }
    }

    pub fn is_staked(&self) -> bool {
        self.nft_mint != Pubkey::default()
    }

    pub fn holds(&self, collection: &Pubkey, nft_mint: &Pubkey) -> bool {
        self.is_staked() && self.collection == *collection && self.nft_mint == *nft_mint
    }

    pub fn stage(&mut self, collection: Pubkey, nft_mint: Pubkey, slot: u64) {
        self.collection = collection;
        self.nft_mint = nft_mint;
        self.staked_at_slot = slot;
    }

    pub fn clear(&mut self) {
        self.collection = Pubkey::default();
        self.nft_mint = Pubkey::default();
        self.staked_at_slot = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_then_clear_round_trips_state_machine() {
        let mut slot = StakingSlot::default();
        assert!(!slot.is_staked());

        let collection = Pubkey::new_unique();
        let nft = Pubkey::new_unique();
        slot.stage(collection, nft, 12);
        assert!(slot.is_staked());
        assert!(slot.holds(&collection, &nft));
        assert!(!slot.holds(&collection, &Pubkey::new_unique()));

        slot.clear();
        assert!(!slot.is_staked());
        assert!(!slot.holds(&collection, &nft));
    }

    #[test]
    fn bind_keeps_first_owner() {
        let mut slot = StakingSlot::default();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        slot.bind(254, mint, owner);
        slot.bind(1, Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(slot.bump, 254);
        assert_eq!(slot.owner, owner);
        assert_eq!(slot.stake_mint, mint);
    }

    #[test]
    fn empty_slot_holds_nothing() {
        let slot = StakingSlot::default();
        assert!(!slot.holds(&Pubkey::default(), &Pubkey::default()));
    }
}
