use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("config: caller is not the admin")]
    InvalidOwner,

    #[msg("consumeEnergy: only eligible caller")]
    OnlyEligibleCaller,

    #[msg("config: address must not be null")]
    NullAddress,

    #[msg("config: bad staking token")]
    BadStakingToken,

    #[msg("setNftEnergyBatch: empty batch")]
    EmptyBatch,

    #[msg("setNftEnergyBatch: entries and accounts differ in length")]
    BatchLengthMismatch,

    #[msg("Energy record account does not match the nft")]
    InvalidEnergyAccount,

    #[msg("Category account does not match the nft")]
    InvalidCategoryAccount,

    #[msg("consumeEnergy: no energy record")]
    NoEnergyRecord,

    #[msg("consumeEnergy: amount exceeds current energy")]
    EnergyUnderflow,
}

/// Failure categories shared by every config error.
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
            ErrorCode::InvalidOwner | ErrorCode::OnlyEligibleCaller => ErrorKind::PermissionDenied,
            ErrorCode::NullAddress
            | ErrorCode::BadStakingToken
            | ErrorCode::EmptyBatch
            | ErrorCode::BatchLengthMismatch
            | ErrorCode::InvalidEnergyAccount
            | ErrorCode::InvalidCategoryAccount
            | ErrorCode::NoEnergyRecord => ErrorKind::InvalidArgument,
            ErrorCode::EnergyUnderflow => ErrorKind::ArithmeticFault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_and_underflow_are_distinct() {
        assert_eq!(ErrorCode::NoEnergyRecord.kind(), ErrorKind::InvalidArgument);
        assert_eq!(ErrorCode::EnergyUnderflow.kind(), ErrorKind::ArithmeticFault);
        assert_ne!(
            ErrorCode::NoEnergyRecord.to_string(),
            ErrorCode::EnergyUnderflow.to_string()
        );
    }

    #[test]
    fn role_failures_are_permission_denied() {
        assert_eq!(ErrorCode::InvalidOwner.kind(), ErrorKind::PermissionDenied);
        assert_eq!(ErrorCode::OnlyEligibleCaller.kind(), ErrorKind::PermissionDenied);
    }
}
