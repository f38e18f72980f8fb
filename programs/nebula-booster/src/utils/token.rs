use anchor_lang::prelude::*;
use anchor_spl::token_interface;

/// Moves `amount` from a user-owned token account into a booster escrow.
pub fn transfer_from_user_to_escrow<'info>(
    user: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_escrow: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            token_interface::TransferChecked {
                from,
                to: to_escrow,
                authority: user,
                mint,
            },
        ),
        amount,
        mint_decimals,
    )
}

/// Moves `amount` out of a booster escrow, signed by the booster authority.
/// Zero amounts are skipped.
pub fn transfer_from_escrow_to_user<'info>(
    authority: AccountInfo<'info>,
    from_escrow: AccountInfo<'info>,
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
                from: from_escrow,
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
