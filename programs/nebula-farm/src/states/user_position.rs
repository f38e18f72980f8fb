use crate::error::ErrorCode;
use crate::math::{accrued, pending};
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// UserPosition Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string: `POSITION_SEED + pool + beneficiary`.
pub const POSITION_SEED: &str = "position";

/// A beneficiary's stake in one pool.
///
/// `funded_by` is the identity that opened the position (the beneficiary
/// itself or a delegate). Every later deposit, withdraw and harvest must
/// come from it. It is cleared only once the position is empty again.
#[account]
#[derive(Default, Debug)]
pub struct UserPosition {
    /// PDA bump for this account.
    pub bump: u8,

    pub pool: Pubkey,

    pub beneficiary: Pubkey,

    /// Staked principal.
    pub amount: u64,

    /// `amount * acc_reward_per_share / ACC_PRECISION` at the last update.
    pub reward_debt: u128,

    pub funded_by: Pubkey,
}

impl UserPosition {
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 3: pool, beneficiary, funded_by
    /// - 8: amount
    /// - 16: reward debt
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8 + 16;

    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    pub fn pending(&self, acc_reward_per_share: u128) -> Result<u64> {
        Ok(pending(self.amount, acc_reward_per_share, self.reward_debt)
            .ok_or(ErrorCode::MathOverflow)?)
    }

    pub fn sync_reward_debt(&mut self, acc_reward_per_share: u128) -> Result<()> {
        self.reward_debt = accrued(self.amount, acc_reward_per_share).ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Records `caller` as funder of an unfunded position, otherwise
    /// requires `caller` to be the recorded funder.
    pub fn claim_funder(&mut self, caller: &Pubkey) -> Result<()> {
        if self.funded_by == Pubkey::default() {
            self.funded_by = *caller;
            return Ok(());
        }
        require_keys_eq!(self.funded_by, *caller, ErrorCode::DepositOnlyFunder);
        Ok(())
    }

    /// Checks `caller` against the recorded funder, failing with `error`.
    pub fn require_funder(&self, caller: &Pubkey, error: ErrorCode) -> Result<()> {
        if self.funded_by != *caller {
            return Err(error.into());
        }
        Ok(())
    }

    /// Empties the position without settling rewards and returns the
    /// principal to hand back. Accrued reward is forfeited.
    pub fn take_all_for_emergency(&mut self) -> u64 {
        let amount = self.amount;
        self.amount = 0;
        self.reward_debt = 0;
        self.release_funder_if_empty();
        amount
    }

    /// Drops the funder link once nothing is staked anymore.
    pub fn release_funder_if_empty(&mut self) {
        if self.amount == 0 {
            self.funded_by = Pubkey::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ACC_PRECISION;

    #[test]
    fn first_caller_becomes_funder() {
        let booster = Pubkey::new_unique();
        let mut position = UserPosition::default();
        position.claim_funder(&booster).unwrap();
        assert_eq!(position.funded_by, booster);

        position.claim_funder(&booster).unwrap();
        assert!(position.claim_funder(&Pubkey::new_unique()).is_err());
        assert_eq!(position.funded_by, booster);
    }

    #[test]
    fn funder_survives_until_position_is_empty() {
        let booster = Pubkey::new_unique();
        let mut position = UserPosition {
            amount: 10,
            funded_by: booster,
            ..Default::default()
        };
        position.release_funder_if_empty();
        assert_eq!(position.funded_by, booster);

        position.amount = 0;
        position.release_funder_if_empty();
        assert_eq!(position.funded_by, Pubkey::default());
    }

    #[test]
    fn require_funder_reports_given_error() {
        let position = UserPosition {
            funded_by: Pubkey::new_unique(),
            ..Default::default()
        };
        let err = position
            .require_funder(&Pubkey::new_unique(), ErrorCode::HarvestOnlyFunder)
            .unwrap_err();
        assert_eq!(err, ErrorCode::HarvestOnlyFunder.into());
    }

    #[test]
    fn require_funder_accepts_recorded_funder() {
        let booster = Pubkey::new_unique();
        let position = UserPosition {
            funded_by: booster,
            ..Default::default()
        };
        assert!(position
            .require_funder(&booster, ErrorCode::WithdrawOnlyFunder)
            .is_ok());
    }

    #[test]
    fn emergency_take_forfeits_pending_and_resets_position() {
        let booster = Pubkey::new_unique();
        let acc = 4 * ACC_PRECISION;
        let mut position = UserPosition {
            amount: 250,
            funded_by: booster,
            ..Default::default()
        };
        position.sync_reward_debt(ACC_PRECISION).unwrap();
        assert_eq!(position.pending(acc).unwrap(), 750);

        let principal = position.take_all_for_emergency();
        assert_eq!(principal, 250);
        assert_eq!(position.amount, 0);
        assert_eq!(position.reward_debt, 0);
        assert_eq!(position.funded_by, Pubkey::default());
        // nothing left to claim at any later accumulator value
        assert_eq!(position.pending(acc * 10).unwrap(), 0);

        assert_eq!(position.take_all_for_emergency(), 0);
    }

    #[test]
    fn debt_sync_zeroes_pending() {
        let mut position = UserPosition {
            amount: 3,
            ..Default::default()
        };
        let acc = 7 * ACC_PRECISION;
        assert_eq!(position.pending(acc).unwrap(), 21);
        position.sync_reward_debt(acc).unwrap();
        assert_eq!(position.pending(acc).unwrap(), 0);
    }
}
