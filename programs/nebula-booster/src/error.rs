use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("booster: caller is not the admin")]
    InvalidOwner,

    #[msg("isStakeTokenOK: bad stake token")]
    BadStakeToken,

    #[msg("isNftOK: bad nft")]
    BadNft,

    #[msg("stakeNFT: nft collection is not verified")]
    UnverifiedCollection,

    #[msg("stakeNFT: nft already staked")]
    NftAlreadyStaked,

    #[msg("unstakeNFT: no nft staked")]
    NoNftStaked,

    #[msg("stakeNFT: accounts of the staked nft are required")]
    MissingStakedNftAccounts,

    #[msg("Nft account does not match the staking slot")]
    InvalidNftAccount,

    #[msg("Category allowance account does not match the nft category")]
    InvalidCategoryAccount,

    #[msg("harvestMany: empty batch")]
    EmptyBatch,

    #[msg("harvestMany: accounts are not grouped per pool")]
    MalformedBatch,

    #[msg("harvestMany: account does not match the pool")]
    InvalidPoolAccount,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,
}

/// Failure categories shared by every booster error.
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
            ErrorCode::InvalidOwner => ErrorKind::PermissionDenied,
            ErrorCode::BadStakeToken
            | ErrorCode::BadNft
            | ErrorCode::UnverifiedCollection
            | ErrorCode::MissingStakedNftAccounts
            | ErrorCode::InvalidNftAccount
            | ErrorCode::InvalidCategoryAccount
            | ErrorCode::EmptyBatch
            | ErrorCode::MalformedBatch
            | ErrorCode::InvalidPoolAccount
            | ErrorCode::ZeroAmount => ErrorKind::InvalidArgument,
            ErrorCode::NftAlreadyStaked | ErrorCode::NoNftStaked => ErrorKind::StateConflict,
            ErrorCode::MathOverflow => ErrorKind::ArithmeticFault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaking_and_empty_slot_are_state_conflicts() {
        assert_eq!(ErrorCode::NftAlreadyStaked.kind(), ErrorKind::StateConflict);
        assert_eq!(ErrorCode::NoNftStaked.kind(), ErrorKind::StateConflict);
    }

    #[test]
    fn empty_batch_is_invalid_argument() {
        assert_eq!(ErrorCode::EmptyBatch.kind(), ErrorKind::InvalidArgument);
        assert_eq!(ErrorCode::EmptyBatch.to_string(), "harvestMany: empty batch");
    }
}
