//! Boost arithmetic.
//!
//! `extra = min(current_energy, base * boost_bps / 10_000)`; the energy spent
//! equals `extra`, so a boost can never pay more than the NFT has left.

pub const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoostOutcome {
    /// Reward harvested from the farm.
    pub base: u64,
    /// Reward minted on top; also the energy consumed.
    pub extra: u64,
    pub total: u64,
}

impl BoostOutcome {
    pub fn unboosted(base: u64) -> Self {
        BoostOutcome {
            base,
            extra: 0,
            total: base,
        }
    }
}

pub fn compute_boost(base: u64, current_energy: u64, boost_bps: u64) -> Option<BoostOutcome> {
    let uncapped = (base as u128)
        .checked_mul(boost_bps as u128)?
        .checked_div(BPS_DENOMINATOR as u128)?;
    let extra = uncapped.min(current_energy as u128) as u64;
    Some(BoostOutcome {
        base,
        extra,
        total: base.checked_add(extra)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ten_percent_of_hundred_drains_ten_energy() {
        let outcome = compute_boost(100, 10, 1_000).unwrap();
        assert_eq!(
            outcome,
            BoostOutcome {
                base: 100,
                extra: 10,
                total: 110
            }
        );
        assert_eq!(10 - outcome.extra, 0);
    }

    #[test]
    fn boost_is_capped_by_energy() {
        let outcome = compute_boost(1_000, 7, 5_000).unwrap();
        assert_eq!(outcome.extra, 7);
        assert_eq!(outcome.total, 1_007);
    }

    #[test]
    fn nothing_harvested_nothing_boosted() {
        assert_eq!(compute_boost(0, 500, 10_000), Some(BoostOutcome::unboosted(0)));
    }

    #[test]
    fn boost_floors() {
        // 99 * 1% = 0.99
        assert_eq!(compute_boost(99, 100, 100).unwrap().extra, 0);
    }

    #[test]
    fn total_overflow_is_reported() {
        assert_eq!(compute_boost(u64::MAX, u64::MAX, 10_000), None);
    }

    proptest! {
        #[test]
        fn extra_never_exceeds_energy_or_rate(
            base in 0u64..u64::MAX / 4,
            energy in any::<u64>(),
            bps in 0u64..20_000,
        ) {
            let outcome = compute_boost(base, energy, bps).unwrap();
            prop_assert!(outcome.extra <= energy);
            prop_assert!(outcome.extra as u128 <= base as u128 * bps as u128 / 10_000);
            prop_assert_eq!(outcome.total, outcome.base + outcome.extra);
        }
    }
}
