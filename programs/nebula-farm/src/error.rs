use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("farm: caller is not the admin")]
    InvalidOwner,

    #[msg("onlyPermittedTokenFunder: caller is not permitted")]
    NotPermittedFunder,

    #[msg("deposit: only funder")]
    DepositOnlyFunder,

    #[msg("withdraw: only funder")]
    WithdrawOnlyFunder,

    #[msg("harvest: only funder")]
    HarvestOnlyFunder,

    #[msg("emergencyWithdraw: only funder")]
    EmergencyOnlyFunder,

    #[msg("mintExtraReward: caller is not an enabled delegate")]
    NotEnabledDelegate,

    #[msg("pool: stake token must not be null or sentinel")]
    InvalidStakeToken,

    #[msg("addPool: stake token duplicated")]
    DuplicateStakeToken,

    #[msg("withdraw: not enough staked")]
    InsufficientStake,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Token account is not owned by the expected wallet")]
    InvalidTokenOwner,

    #[msg("Remaining account is not a farm pool")]
    InvalidPoolAccount,

    #[msg("Missing remaining account")]
    MissingRemainingAccount,

    #[msg("Invalid parameter provided")]
    InvalidParam,

    #[msg("delegate: pool is not in delegated mode")]
    DelegatedModeDisabled,

    #[msg("addDelegate: delegate already enabled")]
    DelegateAlreadyEnabled,

    #[msg("removeDelegate: delegate not enabled")]
    DelegateNotEnabled,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,
}

/// Failure categories shared by every farm error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    PermissionDenied,
    InvalidArgument,
    StateConflict,
    ArithmeticFault,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::InvalidOwner
            | ErrorCode::NotPermittedFunder
            | ErrorCode::DepositOnlyFunder
            | ErrorCode::WithdrawOnlyFunder
            | ErrorCode::HarvestOnlyFunder
            | ErrorCode::EmergencyOnlyFunder
            | ErrorCode::NotEnabledDelegate => ErrorKind::PermissionDenied,
            ErrorCode::InvalidStakeToken
            | ErrorCode::DuplicateStakeToken
            | ErrorCode::InsufficientStake
            | ErrorCode::ZeroAmount
            | ErrorCode::InvalidTokenOwner
            | ErrorCode::InvalidPoolAccount
            | ErrorCode::MissingRemainingAccount
            | ErrorCode::InvalidParam => ErrorKind::InvalidArgument,
            ErrorCode::DelegatedModeDisabled
            | ErrorCode::DelegateAlreadyEnabled
            | ErrorCode::DelegateNotEnabled => ErrorKind::StateConflict,
            ErrorCode::MathOverflow => ErrorKind::ArithmeticFault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funder_failures_are_permission_denied() {
        for code in [
            ErrorCode::NotPermittedFunder,
            ErrorCode::DepositOnlyFunder,
            ErrorCode::HarvestOnlyFunder,
            ErrorCode::EmergencyOnlyFunder,
        ] {
            assert_eq!(code.kind(), ErrorKind::PermissionDenied);
        }
    }

    #[test]
    fn pool_registration_failures_are_invalid_arguments() {
        assert_eq!(ErrorCode::InvalidStakeToken.kind(), ErrorKind::InvalidArgument);
        assert_eq!(ErrorCode::DuplicateStakeToken.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn delegation_mode_and_overflow_categories() {
        assert_eq!(ErrorCode::DelegatedModeDisabled.kind(), ErrorKind::StateConflict);
        assert_eq!(ErrorCode::MathOverflow.kind(), ErrorKind::ArithmeticFault);
    }

    #[test]
    fn harvest_message_is_distinct_from_entry_check() {
        assert_eq!(ErrorCode::HarvestOnlyFunder.to_string(), "harvest: only funder");
        assert_ne!(
            ErrorCode::HarvestOnlyFunder.to_string(),
            ErrorCode::NotPermittedFunder.to_string()
        );
    }
}
