use crate::error::ErrorCode;
use crate::math::short_pay;
use crate::states::{FarmConfig, RewardPaid};
use crate::utils::transfer_from_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

/// Pays `requested` reward out of the vault.
///
/// Transfers `min(requested, vault balance)` and returns the amount moved.
/// A short vault does not fail the call: the caller's accumulator has
/// already booked the full amount and the gap is added to
/// `total_reward_shortfall`.
pub fn pay_reward<'info>(
    farm_config: &mut FarmConfig,
    authority: AccountInfo<'info>,
    reward_vault: &InterfaceAccount<'info, TokenAccount>,
    to: AccountInfo<'info>,
    reward_mint: &InterfaceAccount<'info, Mint>,
    token_program: AccountInfo<'info>,
    requested: u64,
) -> Result<u64> {
    if requested == 0 {
        return Ok(0);
    }
    let paid = short_pay(requested, reward_vault.amount);
    let shortfall = requested - paid;

    farm_config.total_reward_paid = farm_config
        .total_reward_paid
        .checked_add(paid)
        .ok_or(ErrorCode::MathOverflow)?;
    farm_config.total_reward_shortfall = farm_config
        .total_reward_shortfall
        .checked_add(shortfall)
        .ok_or(ErrorCode::MathOverflow)?;

    let recipient = to.key();
    transfer_from_vault_to_user(
        authority,
        reward_vault.to_account_info(),
        to,
        reward_mint.to_account_info(),
        token_program,
        paid,
        reward_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[farm_config.authority_bump]]],
    )?;

    if shortfall > 0 {
        msg!("reward vault short by {}", shortfall);
    }
    emit!(RewardPaid {
        to: recipient,
        requested,
        paid,
    });
    Ok(paid)
}
