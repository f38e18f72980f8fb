use crate::error::ErrorCode;
use crate::math::{accumulate, pool_reward};
use crate::STAKE_MINT_SENTINEL;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Pool Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive a pool: `POOL_SEED + stake_mint`.
pub const POOL_SEED: &str = "pool";

/// Reward-bearing bucket for one stake mint.
///
/// Pools are registered once and afterwards only reweighted. The accumulator
/// `acc_reward_per_share` is scaled by `ACC_PRECISION` and never decreases.
#[account]
#[derive(Default, Debug)]
pub struct Pool {
    /// PDA bump for this account.
    pub bump: u8,

    /// Stake mint this pool is keyed by. Default until registered.
    pub stake_mint: Pubkey,

    /// Program-owned token account holding staked principal.
    pub stake_vault: Pubkey,

    /// Allocation weight relative to `FarmConfig::total_weight`.
    pub weight: u64,

    /// Last slot the accumulator was advanced to.
    pub last_settled_slot: u64,

    /// Reward per staked base unit, scaled by `ACC_PRECISION`.
    pub acc_reward_per_share: u128,

    /// Principal currently staked in `stake_vault`.
    pub total_staked: u64,

    /// When set, only enabled delegates may open or grow positions.
    pub delegated_mode: bool,

    /// Number of delegates ever enabled. Never decremented.
    pub delegate_count: u64,
}

impl Pool {
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: stake mint, stake vault
    /// - 8 * 3: weight, last settled slot, total staked
    /// - 16: accumulator
    /// - 1: delegated mode
    /// - 8: delegate count
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 3 + 16 + 1 + 8;

    pub fn is_registered(&self) -> bool {
        self.stake_mint != Pubkey::default()
    }

    /// Fails when this pool slot already belongs to a stake mint.
    pub fn ensure_unregistered(&self) -> Result<()> {
        require!(!self.is_registered(), ErrorCode::DuplicateStakeToken);
        Ok(())
    }

    /// Accumulator value as of `current_slot`, without writing it.
    pub fn projected_acc(
        &self,
        current_slot: u64,
        emission_per_slot: u64,
        total_weight: u64,
    ) -> Result<u128> {
        if current_slot <= self.last_settled_slot || self.total_staked == 0 {
            return Ok(self.acc_reward_per_share);
        }
        let elapsed = current_slot - self.last_settled_slot;
        let reward = pool_reward(elapsed, emission_per_slot, self.weight, total_weight)
            .ok_or(ErrorCode::MathOverflow)?;
        let acc = accumulate(self.acc_reward_per_share, reward, self.total_staked)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(acc)
    }

    /// Advances the accumulator to `current_slot`. A no-op when the pool is
    /// already settled at or past that slot.
    pub fn settle(
        &mut self,
        current_slot: u64,
        emission_per_slot: u64,
        total_weight: u64,
    ) -> Result<()> {
        if current_slot <= self.last_settled_slot {
            return Ok(());
        }
        self.acc_reward_per_share =
            self.projected_acc(current_slot, emission_per_slot, total_weight)?;
        self.last_settled_slot = current_slot;
        Ok(())
    }

    /// Replaces the pool weight and returns the farm's new total weight.
    pub fn reweight(&mut self, new_weight: u64, total_weight: u64) -> Result<u64> {
        let total = total_weight
            .checked_sub(self.weight)
            .and_then(|t| t.checked_add(new_weight))
            .ok_or(ErrorCode::MathOverflow)?;
        self.weight = new_weight;
        Ok(total)
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

/// Rejects the null identity and the reserved sentinel as stake mints.
pub fn validate_stake_mint(stake_mint: &Pubkey) -> Result<()> {
    require!(
        *stake_mint != Pubkey::default() && *stake_mint != STAKE_MINT_SENTINEL,
        ErrorCode::InvalidStakeToken
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::UserPosition;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pool(weight: u64, last_settled_slot: u64) -> Pool {
        Pool {
            stake_mint: Pubkey::new_unique(),
            weight,
            last_settled_slot,
            ..Default::default()
        }
    }

    #[test]
    fn settle_is_noop_for_past_slots() {
        let mut p = pool(10, 100);
        p.total_staked = 1_000;
        p.acc_reward_per_share = 77;
        p.settle(90, 5, 10).unwrap();
        p.settle(100, 5, 10).unwrap();
        assert_eq!(p.acc_reward_per_share, 77);
        assert_eq!(p.last_settled_slot, 100);
    }

    #[test]
    fn settle_without_supply_only_advances_slot() {
        let mut p = pool(10, 100);
        p.settle(150, 5, 10).unwrap();
        assert_eq!(p.acc_reward_per_share, 0);
        assert_eq!(p.last_settled_slot, 150);
    }

    #[test]
    fn hundred_staked_five_per_slot_ten_slots_pays_fifty() {
        let mut p = pool(1, 0);
        let mut position = UserPosition::default();
        p.add_stake(100).unwrap();
        position.amount = 100;
        position.sync_reward_debt(p.acc_reward_per_share).unwrap();

        p.settle(10, 5, 1).unwrap();
        assert_eq!(position.pending(p.acc_reward_per_share).unwrap(), 50);
    }

    #[test]
    fn projection_matches_settlement() {
        let mut p = pool(3, 20);
        p.total_staked = 40;
        let projected = p.projected_acc(33, 9, 7).unwrap();
        p.settle(33, 9, 7).unwrap();
        assert_eq!(projected, p.acc_reward_per_share);
    }

    #[test]
    fn reweight_applies_delta_to_total() {
        let mut a = pool(30, 0);
        let total = a.reweight(10, 100).unwrap();
        assert_eq!(total, 80);
        assert_eq!(a.weight, 10);
    }

    #[test]
    fn reweight_overflow_is_rejected() {
        let mut a = pool(0, 0);
        assert!(a.reweight(1, u64::MAX).is_err());
        assert_eq!(a.weight, 0);
    }

    #[test]
    fn removing_more_than_staked_fails() {
        let mut p = pool(1, 0);
        p.add_stake(5).unwrap();
        assert!(p.remove_stake(6).is_err());
        assert_eq!(p.total_staked, 5);
    }

    #[test]
    fn null_and_sentinel_mints_are_rejected() {
        assert!(validate_stake_mint(&Pubkey::default()).is_err());
        assert!(validate_stake_mint(&STAKE_MINT_SENTINEL).is_err());
        assert!(validate_stake_mint(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn second_registration_of_a_mint_is_a_duplicate() {
        let fresh = Pool::default();
        assert!(fresh.ensure_unregistered().is_ok());

        let registered = pool(5, 0);
        let err = registered.ensure_unregistered().unwrap_err();
        assert_eq!(err, ErrorCode::DuplicateStakeToken.into());
    }

    proptest! {
        #[test]
        fn weights_always_sum_to_total(
            initial in proptest::collection::vec(0u64..1_000_000, 1..10),
            updates in proptest::collection::vec((0usize..10, 0u64..1_000_000), 0..32),
        ) {
            let mut pools: Vec<Pool> = initial.iter().map(|w| pool(*w, 0)).collect();
            let mut total: u64 = initial.iter().sum();
            for (index, weight) in updates {
                let i = index % pools.len();
                total = pools[i].reweight(weight, total).unwrap();
                prop_assert_eq!(total, pools.iter().map(|p| p.weight).sum::<u64>());
            }
        }
    }

    #[test]
    fn random_stakers_never_claim_more_than_emitted() {
        let mut rng = StdRng::seed_from_u64(0x6e65_6275);
        let emission = 1_000u64;
        let mut p = pool(1, 0);
        let mut positions = vec![UserPosition::default(); 12];
        let mut claimed: u128 = 0;
        let mut slot = 0u64;

        for _ in 0..500 {
            slot += rng.random_range(1..20);
            p.settle(slot, emission, 1).unwrap();

            let who = rng.random_range(0..positions.len());
            let position = &mut positions[who];
            claimed += position.pending(p.acc_reward_per_share).unwrap() as u128;

            if rng.random_bool(0.6) {
                let amount = rng.random_range(1..1_000_000);
                position.amount += amount;
                p.add_stake(amount).unwrap();
            } else {
                let amount = rng.random_range(0..=position.amount);
                position.amount -= amount;
                p.remove_stake(amount).unwrap();
            }
            position.sync_reward_debt(p.acc_reward_per_share).unwrap();
        }

        for position in &positions {
            claimed += position.pending(p.acc_reward_per_share).unwrap() as u128;
        }
        assert!(claimed <= slot as u128 * emission as u128);
    }
}
