use anchor_lang::prelude::*;
use anchor_lang::system_program::{allocate, assign, transfer, Allocate, Assign, Transfer};

/// Lamports still needed to make an account holding `current` rent exempt.
pub fn rent_shortfall(required: u64, current: u64) -> u64 {
    required.saturating_sub(current)
}

/// Creates a PDA owned by this program, the way `init` does: top up to rent
/// exemption, then allocate and assign under the PDA signature. Lamports
/// already sitting at the address are kept.
pub fn create_owned_pda<'info>(
    payer: AccountInfo<'info>,
    target: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let missing = rent_shortfall(Rent::get()?.minimum_balance(space), target.lamports());
    if missing > 0 {
        let accounts = Transfer {
            from: payer,
            to: target.clone(),
        };
        transfer(CpiContext::new(system_program.clone(), accounts), missing)?;
    }

    let signer = &[signer_seeds];
    let accounts = Allocate {
        account_to_allocate: target.clone(),
    };
    allocate(
        CpiContext::new_with_signer(system_program.clone(), accounts, signer),
        space as u64,
    )?;

    let accounts = Assign {
        account_to_assign: target,
    };
    assign(
        CpiContext::new_with_signer(system_program, accounts, signer),
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfunded_address_needs_full_rent() {
        assert_eq!(rent_shortfall(1_000, 0), 1_000);
    }

    #[test]
    fn prefunded_address_only_needs_the_difference() {
        assert_eq!(rent_shortfall(1_000, 1), 999);
        assert_eq!(rent_shortfall(1_000, 1_000), 0);
        assert_eq!(rent_shortfall(1_000, 5_000), 0);
    }
}
