use crate::error::ErrorCode;
use crate::states::{FarmConfig, Pool};
use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

/// Settles every pool passed in `remaining_accounts` against the current
/// emission and total weight, writing each one back.
///
/// Admin calls that change emission or weights pass the other pools here so
/// their accrual up to now is booked at the old rate. `skip` is the pool the
/// instruction already holds, which settles itself.
pub fn settle_remaining_pools<'info>(
    remaining_accounts: &'info [AccountInfo<'info>],
    farm_config: &FarmConfig,
    current_slot: u64,
    skip: Option<Pubkey>,
) -> Result<()> {
    for info in remaining_accounts {
        if Some(info.key()) == skip {
            continue;
        }
        require!(info.is_writable, ErrorCode::InvalidPoolAccount);
        let mut pool: Account<'info, Pool> = Account::try_from(info)?;
        pool.settle(
            current_slot,
            farm_config.emission_per_slot,
            farm_config.total_weight,
        )?;
        pool.exit(&crate::ID)?;
    }
    Ok(())
}
