use anchor_lang::prelude::*;
use anchor_lang::system_program::{allocate, assign, transfer, Allocate, Assign, Transfer};

/// Creates a program-derived account owned by `owner`.
///
/// Tops the target up to rent exemption, then allocates and assigns it
/// under the PDA signature. Lamports sent to the address beforehand do not
/// block creation.
pub fn create_pda_account<'info>(
    payer: AccountInfo<'info>,
    target: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let top_up = required.saturating_sub(target.lamports());
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer,
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: target,
            },
            signer_seeds,
        ),
        owner,
    )
}
