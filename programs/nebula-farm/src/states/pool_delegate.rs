use crate::error::ErrorCode;
use crate::states::UserPosition;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// PoolDelegate Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string: `DELEGATE_SEED + pool + delegate`.
pub const DELEGATE_SEED: &str = "pool_delegate";

/// One entry of a pool's delegate allow-list.
///
/// Removal only clears `enabled`; the entry and the pool's
/// `delegate_count` survive.
#[account]
#[derive(Default, Debug)]
pub struct PoolDelegate {
    pub bump: u8,
    pub pool: Pubkey,
    pub delegate: Pubkey,
    pub enabled: bool,
}

impl PoolDelegate {
    pub const LEN: usize = 8 + 1 + 32 * 2 + 1;

    pub fn is_enabled_for(&self, pool: &Pubkey, caller: &Pubkey) -> bool {
        self.enabled && self.pool == *pool && self.delegate == *caller
    }
}

/// Entry rule shared by deposit, withdraw and harvest.
///
/// Open pools accept only the beneficiary acting for itself; delegated pools
/// accept only an enabled delegate, whoever the beneficiary is.
pub fn authorize_entry(
    pool: &Pubkey,
    delegated_mode: bool,
    caller: &Pubkey,
    beneficiary: &Pubkey,
    delegate: Option<&PoolDelegate>,
) -> Result<()> {
    let permitted = if delegated_mode {
        delegate.is_some_and(|d| d.is_enabled_for(pool, caller))
    } else {
        caller == beneficiary
    };
    require!(permitted, ErrorCode::NotPermittedFunder);
    Ok(())
}

/// Withdraw and harvest gate: the recorded funder is checked first so its
/// own error surfaces, then the entry rule still applies to that funder.
pub fn authorize_funded_entry(
    position: &UserPosition,
    pool: &Pubkey,
    delegated_mode: bool,
    caller: &Pubkey,
    beneficiary: &Pubkey,
    delegate: Option<&PoolDelegate>,
    funder_error: ErrorCode,
) -> Result<()> {
    position.require_funder(caller, funder_error)?;
    authorize_entry(pool, delegated_mode, caller, beneficiary, delegate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pool: Pubkey, delegate: Pubkey, enabled: bool) -> PoolDelegate {
        PoolDelegate {
            bump: 255,
            pool,
            delegate,
            enabled,
        }
    }

    #[test]
    fn open_pool_requires_self_service() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert!(authorize_entry(&pool, false, &user, &user, None).is_ok());
        assert!(authorize_entry(&pool, false, &other, &user, None).is_err());
    }

    #[test]
    fn open_pool_ignores_delegate_entries() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let booster = Pubkey::new_unique();
        let d = entry(pool, booster, true);
        assert!(authorize_entry(&pool, false, &booster, &user, Some(&d)).is_err());
    }

    #[test]
    fn delegated_pool_requires_enabled_delegate() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let booster = Pubkey::new_unique();

        assert!(authorize_entry(&pool, true, &user, &user, None).is_err());

        let enabled = entry(pool, booster, true);
        assert!(authorize_entry(&pool, true, &booster, &user, Some(&enabled)).is_ok());

        let removed = entry(pool, booster, false);
        assert!(authorize_entry(&pool, true, &booster, &user, Some(&removed)).is_err());
    }

    fn funded_by(funder: Pubkey) -> UserPosition {
        UserPosition {
            amount: 1,
            funded_by: funder,
            ..Default::default()
        }
    }

    #[test]
    fn beneficiary_harvesting_delegate_funded_position_gets_funder_error() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let booster = Pubkey::new_unique();
        let position = funded_by(booster);

        let err = authorize_funded_entry(
            &position,
            &pool,
            true,
            &user,
            &user,
            None,
            ErrorCode::HarvestOnlyFunder,
        )
        .unwrap_err();
        assert_eq!(err, ErrorCode::HarvestOnlyFunder.into());
    }

    #[test]
    fn stranger_on_open_pool_gets_funder_error() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let position = funded_by(user);

        let err = authorize_funded_entry(
            &position,
            &pool,
            false,
            &Pubkey::new_unique(),
            &user,
            None,
            ErrorCode::HarvestOnlyFunder,
        )
        .unwrap_err();
        assert_eq!(err, ErrorCode::HarvestOnlyFunder.into());

        let err = authorize_funded_entry(
            &position,
            &pool,
            false,
            &Pubkey::new_unique(),
            &user,
            None,
            ErrorCode::WithdrawOnlyFunder,
        )
        .unwrap_err();
        assert_eq!(err, ErrorCode::WithdrawOnlyFunder.into());
    }

    #[test]
    fn funder_still_needs_entry_rights() {
        let pool = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let booster = Pubkey::new_unique();
        let position = funded_by(booster);
        let removed = entry(pool, booster, false);

        let err = authorize_funded_entry(
            &position,
            &pool,
            true,
            &booster,
            &user,
            Some(&removed),
            ErrorCode::HarvestOnlyFunder,
        )
        .unwrap_err();
        assert_eq!(err, ErrorCode::NotPermittedFunder.into());

        let enabled = entry(pool, booster, true);
        assert!(authorize_funded_entry(
            &position,
            &pool,
            true,
            &booster,
            &user,
            Some(&enabled),
            ErrorCode::HarvestOnlyFunder,
        )
        .is_ok());
    }

    #[test]
    fn delegate_entry_of_another_pool_is_rejected() {
        let user = Pubkey::new_unique();
        let booster = Pubkey::new_unique();
        let foreign = entry(Pubkey::new_unique(), booster, true);
        assert!(
            authorize_entry(&Pubkey::new_unique(), true, &booster, &user, Some(&foreign)).is_err()
        );
    }
}
