//! 256-bit intermediate arithmetic for the reward accumulator.

use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

impl U256 {
    /// Narrows back to `u128`, or `None` when the value does not fit.
    pub fn checked_as_u128(self) -> Option<u128> {
        if self > U256::from(u128::MAX) {
            None
        } else {
            Some(self.as_u128())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrows_values_that_fit() {
        assert_eq!(U256::from(u128::MAX).checked_as_u128(), Some(u128::MAX));
        assert_eq!(U256::from(7u64).checked_as_u128(), Some(7));
    }

    #[test]
    fn refuses_values_above_u128() {
        let wide = U256::from(u128::MAX) + U256::from(1u64);
        assert_eq!(wide.checked_as_u128(), None);
    }
}
