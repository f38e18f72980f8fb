//! Accumulator arithmetic.
//!
//! Every pool carries `acc_reward_per_share`, the reward earned by one staked
//! base unit since the pool was created, scaled by [`ACC_PRECISION`]. A
//! position's entitlement is `amount * acc / ACC_PRECISION - reward_debt`,
//! so a settlement is O(1) whatever the number of stakers. All divisions
//! floor; every helper returns `None` on overflow and callers map that to
//! `ErrorCode::MathOverflow`.

use super::U256;
use crate::ACC_PRECISION;

/// Reward emitted to one pool over `elapsed_slots`:
/// `elapsed * emission_per_slot * weight / total_weight`.
///
/// A farm with no weight emits nothing.
pub fn pool_reward(
    elapsed_slots: u64,
    emission_per_slot: u64,
    weight: u64,
    total_weight: u64,
) -> Option<u128> {
    if total_weight == 0 {
        return Some(0);
    }
    U256::from(elapsed_slots)
        .checked_mul(U256::from(emission_per_slot))?
        .checked_mul(U256::from(weight))?
        .checked_div(U256::from(total_weight))?
        .checked_as_u128()
}

/// Folds `reward` into the accumulator. With nothing staked the reward is
/// dropped and the accumulator is returned unchanged.
pub fn accumulate(acc_reward_per_share: u128, reward: u128, total_staked: u64) -> Option<u128> {
    if total_staked == 0 {
        return Some(acc_reward_per_share);
    }
    let increment = U256::from(reward)
        .checked_mul(U256::from(ACC_PRECISION))?
        .checked_div(U256::from(total_staked))?
        .checked_as_u128()?;
    acc_reward_per_share.checked_add(increment)
}

/// `amount * acc / ACC_PRECISION`, the value a fresh `reward_debt` is set to.
pub fn accrued(amount: u64, acc_reward_per_share: u128) -> Option<u128> {
    U256::from(amount)
        .checked_mul(U256::from(acc_reward_per_share))?
        .checked_div(U256::from(ACC_PRECISION))?
        .checked_as_u128()
}

pub fn pending(amount: u64, acc_reward_per_share: u128, reward_debt: u128) -> Option<u64> {
    let owed = accrued(amount, acc_reward_per_share)?.checked_sub(reward_debt)?;
    u64::try_from(owed).ok()
}

/// Amount the reward vault actually transfers: never more than it holds.
pub fn short_pay(requested: u64, vault_balance: u64) -> u64 {
    requested.min(vault_balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    #[test]
    fn exclusive_pool_earns_full_emission() {
        // 5 per slot over 10 slots, one pool holding all the weight.
        let reward = pool_reward(10, 5, 100, 100).unwrap();
        assert_eq!(reward, 50);

        let acc = accumulate(0, reward, 100).unwrap();
        assert_eq!(acc, 500_000_000_000);
        assert_eq!(pending(100, acc, 0), Some(50));
    }

    #[test]
    fn weighted_share_floors() {
        // 7 * 3 * 1 / 4 = 5.25
        assert_eq!(pool_reward(7, 3, 1, 4), Some(5));
        assert_eq!(pool_reward(7, 3, 1, 0), Some(0));
    }

    #[test]
    fn accumulator_ignores_reward_without_supply() {
        assert_eq!(accumulate(42, 1_000, 0), Some(42));
    }

    #[test]
    fn pending_excludes_settled_debt() {
        let acc = accumulate(0, 50, 100).unwrap();
        let debt = accrued(100, acc).unwrap();
        assert_eq!(pending(100, acc, debt), Some(0));

        let later = accumulate(acc, 30, 100).unwrap();
        assert_eq!(pending(100, later, debt), Some(30));
    }

    #[test]
    fn pending_rejects_debt_above_accrued() {
        assert_eq!(pending(1, ACC_PRECISION, 2), None);
    }

    #[test]
    fn large_values_do_not_silently_wrap() {
        assert!(pool_reward(u64::MAX, u64::MAX, u64::MAX, 1).is_none());
        assert!(accumulate(u128::MAX, 1, 1).is_none());
    }

    quickcheck! {
        fn short_pay_never_exceeds_either_side(requested: u64, balance: u64) -> bool {
            let paid = short_pay(requested, balance);
            paid <= requested && paid <= balance && (paid == requested || paid == balance)
        }
    }

    proptest! {
        #[test]
        fn accumulator_never_decreases(
            acc in 0u128..u64::MAX as u128,
            reward in 0u128..u64::MAX as u128,
            supply in 0u64..u64::MAX,
        ) {
            let next = accumulate(acc, reward, supply).unwrap();
            prop_assert!(next >= acc);
        }

        #[test]
        fn split_pools_never_emit_more_than_total(
            elapsed in 0u64..1_000_000,
            emission in 0u64..1_000_000_000,
            weights in proptest::collection::vec(1u64..10_000, 1..8),
        ) {
            let total: u64 = weights.iter().sum();
            let emitted: u128 = weights
                .iter()
                .map(|w| pool_reward(elapsed, emission, *w, total).unwrap())
                .sum();
            prop_assert!(emitted <= elapsed as u128 * emission as u128);
        }

        #[test]
        fn stakers_never_claim_more_than_pool_reward(
            reward in 0u128..1_000_000_000_000,
            stakes in proptest::collection::vec(1u64..1_000_000_000, 1..16),
        ) {
            let supply: u64 = stakes.iter().sum();
            let acc = accumulate(0, reward, supply).unwrap();
            let claimed: u128 = stakes
                .iter()
                .map(|s| pending(*s, acc, 0).unwrap() as u128)
                .sum();
            prop_assert!(claimed <= reward);
        }
    }
}
