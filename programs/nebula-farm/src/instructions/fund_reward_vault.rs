use crate::error::ErrorCode;
use crate::states::{FarmConfig, RewardVaultFunded, FARM_CONFIG_SEED};
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Tops up the reward vault. Anyone may fund it.
#[derive(Accounts)]
pub struct FundRewardVault<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(address = farm_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, address = farm_config.reward_vault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder,
    )]
    pub funder_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);
    transfer_from_user_to_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.reward_mint.decimals,
    )?;
    emit!(RewardVaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });
    Ok(())
}
