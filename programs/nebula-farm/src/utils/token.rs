use crate::error::ErrorCode;
use crate::states::validate_stake_mint;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint};

/// Base SPL token account size; mints without extensions need nothing more.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Checks a candidate stake mint. The key is judged before the account is
/// read, so null and sentinel keys fail with `InvalidStakeToken` whatever
/// lives at that address.
pub fn check_stake_mint(info: &AccountInfo, token_program: &Pubkey) -> Result<()> {
    validate_stake_mint(info.key)?;
    require_keys_eq!(*info.owner, *token_program, ErrorCode::InvalidStakeToken);
    let data = info.try_borrow_data()?;
    Mint::try_deserialize(&mut &data[..]).map_err(|_| ErrorCode::InvalidStakeToken)?;
    Ok(())
}

/// Initializes an already allocated account as a token account of `mint`.
pub fn initialize_token_account<'info>(
    account: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
) -> Result<()> {
    token_interface::initialize_account3(CpiContext::new(
        token_program,
        token_interface::InitializeAccount3 {
            account,
            mint,
            authority,
        },
    ))
}

/// Moves `amount` from a wallet-owned token account into a program vault.
pub fn transfer_from_user_to_vault<'info>(
    authority: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            token_interface::TransferChecked {
                from,
                to: to_vault,
                authority,
                mint,
            },
        ),
        amount,
        mint_decimals,
    )
}

/// Moves `amount` out of a program vault, signed by the vault authority PDA.
pub fn transfer_from_vault_to_user<'info>(
    authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_interface::TransferChecked {
                from: from_vault,
                to,
                authority,
                mint,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}

/// Mints reward tokens; the vault authority PDA must be the mint authority.
pub fn mint_to_user<'info>(
    authority: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program,
            token_interface::MintTo {
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STAKE_MINT_SENTINEL;

    /// Packed SPL mint: no authorities, zero supply, initialized.
    fn mint_bytes(decimals: u8) -> Vec<u8> {
        let mut data = vec![0u8; 82];
        data[44] = decimals;
        data[45] = 1;
        data
    }

    fn check(key: Pubkey, owner: Pubkey, mut data: Vec<u8>) -> Result<()> {
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        check_stake_mint(&info, &anchor_spl::token::ID)
    }

    #[test]
    fn null_key_fails_before_owner_check() {
        let err = check(Pubkey::default(), anchor_lang::system_program::ID, vec![]).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidStakeToken.into());
    }

    #[test]
    fn sentinel_key_fails_even_with_mint_data() {
        let err = check(STAKE_MINT_SENTINEL, anchor_spl::token::ID, mint_bytes(6)).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidStakeToken.into());
    }

    #[test]
    fn foreign_owned_account_is_not_a_stake_mint() {
        let err = check(Pubkey::new_unique(), Pubkey::new_unique(), mint_bytes(6)).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidStakeToken.into());
    }

    #[test]
    fn uninitialized_mint_is_rejected() {
        let mut data = mint_bytes(6);
        data[45] = 0;
        assert!(check(Pubkey::new_unique(), anchor_spl::token::ID, data).is_err());
    }

    #[test]
    fn initialized_token_program_mint_is_accepted() {
        assert!(check(Pubkey::new_unique(), anchor_spl::token::ID, mint_bytes(9)).is_ok());
    }
}
