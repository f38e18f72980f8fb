use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{pay_reward, transfer_from_user_to_vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Deposit stake into a pool on behalf of `beneficiary`.
///
/// Permission:
/// - Open pool: `caller` must be the beneficiary.
/// - Delegated pool: `caller` must be an enabled delegate (`pool_delegate`
///   is then required).
/// - The first deposit records `caller` as the position's funder; later
///   deposits must come from that funder.
///
/// Flow:
/// 1) Settle the pool and compute the pending reward.
/// 2) Update position amount, pool total and reward debt.
/// 3) Pay the pending reward from the vault to `reward_destination`.
/// 4) Pull `amount` from `caller_stake_token` into the stake vault.
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Deposit<'info> {
    /// Pays rent for a new position.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Beneficiary or delegate acting on its behalf.
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    /// CHECK: PDA derivation enforced via seeds; signs reward vault payouts.
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

    /// Delegate entry of `caller`; required only for delegated pools.
    #[account(
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), caller.key().as_ref()],
        bump = pool_delegate.bump,
    )]
    pub pool_delegate: Option<Account<'info, PoolDelegate>>,

    #[account(
        init_if_needed,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), beneficiary.as_ref()],
        bump,
        payer = payer,
        space = UserPosition::LEN
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

    /// Receives the pending reward; owned by `caller`.
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = caller,
    )]
    pub reward_destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, beneficiary: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let pool_key = ctx.accounts.pool.key();
    authorize_entry(
        &pool_key,
        ctx.accounts.pool.delegated_mode,
        &caller,
        &beneficiary,
        ctx.accounts.pool_delegate.as_deref(),
    )?;

    let position = &mut ctx.accounts.position;
    if !position.is_initialized() {
        position.bump = ctx.bumps.position;
        position.pool = pool_key;
        position.beneficiary = beneficiary;
    }
    position.claim_funder(&caller)?;

    // --- 1) Settle and compute pending ---
    let slot = Clock::get()?.slot;
    let farm_config = &mut ctx.accounts.farm_config;
    let pool = &mut ctx.accounts.pool;
    pool.settle(slot, farm_config.emission_per_slot, farm_config.total_weight)?;
    let pending = position.pending(pool.acc_reward_per_share)?;

    // --- 2) Book the deposit ---
    position.amount = position
        .amount
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.add_stake(amount)?;
    position.sync_reward_debt(pool.acc_reward_per_share)?;

    // --- 3) Pay pending reward ---
    pay_reward(
        farm_config,
        ctx.accounts.authority.to_account_info(),
        &ctx.accounts.reward_vault,
        ctx.accounts.reward_destination.to_account_info(),
        &ctx.accounts.reward_mint,
        ctx.accounts.token_program.to_account_info(),
        pending,
    )?;

    // --- 4) Pull stake ---
    transfer_from_user_to_vault(
        ctx.accounts.caller.to_account_info(),
        ctx.accounts.caller_stake_token.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
    )?;

    emit!(Deposited {
        caller,
        beneficiary,
        stake_mint: pool.stake_mint,
        amount,
    });
    Ok(())
}
