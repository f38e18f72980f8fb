use crate::error::ErrorCode;
use crate::instructions::shared::*;
use crate::states::*;
use crate::BOOSTER_AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use nebula_boost_config::resolve::is_stake_token_allowed;
use nebula_boost_config::states::STAKE_TOKEN_SEED;
use nebula_farm::states::{POOL_SEED, POSITION_SEED};

/// Pull the whole principal out through the farm's emergency path.
///
/// No reward is settled and the staked NFT, if any, stays where it is.
/// The farm pays straight into `user_stake_token`.
#[derive(Accounts)]
pub struct EmergencyWithdrawStake<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [BOOSTER_CONFIG_SEED.as_bytes()],
        bump = booster_config.bump,
    )]
    pub booster_config: Box<Account<'info, BoosterConfig>>,

    /// CHECK: PDA derivation enforced via seeds.
    #[account(
        seeds = [BOOSTER_AUTH_SEED.as_bytes()],
        bump = booster_config.authority_bump,
    )]
    pub booster_authority: UncheckedAccount<'info>,

    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: config PDA, contents read through `resolve`.
    #[account(
        seeds = [STAKE_TOKEN_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
        seeds::program = nebula_boost_config::ID,
    )]
    pub stake_token_allowance: UncheckedAccount<'info>,

    /// CHECK: farm pool PDA.
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: farm position PDA of `user`.
    #[account(
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), user.key().as_ref()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub position: UncheckedAccount<'info>,

    /// CHECK: the farm checks it against the pool.
    #[account(mut)]
    pub stake_vault: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = user,
    )]
    pub user_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub farm: FarmAccounts<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawStake>) -> Result<()> {
    require!(
        is_stake_token_allowed(&ctx.accounts.stake_token_allowance)?,
        ErrorCode::BadStakeToken
    );
    let user = ctx.accounts.user.key();
    let stake_mint = ctx.accounts.stake_mint.key();
    let before = ctx.accounts.user_stake_token.amount;
    ctx.accounts.farm.emergency_withdraw(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.position.to_account_info(),
        ctx.accounts.booster_authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.user_stake_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.booster_config.authority_bump,
        user,
    )?;
    ctx.accounts.user_stake_token.reload()?;
    let amount = ctx
        .accounts
        .user_stake_token
        .amount
        .checked_sub(before)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(EmergencyWithdraw {
        user,
        stake_mint,
        amount,
    });
    Ok(())
}
