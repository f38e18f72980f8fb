use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{pay_reward, transfer_from_vault_to_user};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Withdraw stake from a position.
///
/// Same entry rule as `deposit`, and `caller` must be the position's funder.
/// Principal and pending reward both go to accounts owned by `caller`. A
/// withdraw that empties the position releases the funder link.
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Withdraw<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    /// CHECK: PDA derivation enforced via seeds; signs vault transfers.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump = farm_config.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), caller.key().as_ref()],
        bump = pool_delegate.bump,
    )]
    pub pool_delegate: Option<Account<'info, PoolDelegate>>,

    #[account(
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), beneficiary.as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, UserPosition>>,

    #[account(mut, address = pool.stake_vault)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = pool.stake_mint)]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = caller,
    )]
    pub caller_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = farm_config.reward_vault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = farm_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = caller,
    )]
    pub reward_destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn withdraw(ctx: Context<Withdraw>, beneficiary: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let pool_key = ctx.accounts.pool.key();
    authorize_funded_entry(
        &ctx.accounts.position,
        &pool_key,
        ctx.accounts.pool.delegated_mode,
        &caller,
        &beneficiary,
        ctx.accounts.pool_delegate.as_deref(),
        ErrorCode::WithdrawOnlyFunder,
    )?;

    let position = &mut ctx.accounts.position;
    require_gte!(position.amount, amount, ErrorCode::InsufficientStake);

    let slot = Clock::get()?.slot;
    let farm_config = &mut ctx.accounts.farm_config;
    let pool = &mut ctx.accounts.pool;
    pool.settle(slot, farm_config.emission_per_slot, farm_config.total_weight)?;
    let pending = position.pending(pool.acc_reward_per_share)?;

    position.amount -= amount;
    pool.remove_stake(amount)?;
    position.sync_reward_debt(pool.acc_reward_per_share)?;
    position.release_funder_if_empty();

    pay_reward(
        farm_config,
        ctx.accounts.authority.to_account_info(),
        &ctx.accounts.reward_vault,
        ctx.accounts.reward_destination.to_account_info(),
        &ctx.accounts.reward_mint,
        ctx.accounts.token_program.to_account_info(),
        pending,
    )?;

    transfer_from_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.caller_stake_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[farm_config.authority_bump]]],
    )?;

    emit!(Withdrawn {
        caller,
        beneficiary,
        stake_mint: pool.stake_mint,
        amount,
    });
    Ok(())
}
