use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{
    check_stake_mint, create_pda_account, initialize_token_account, settle_remaining_pools,
    TOKEN_ACCOUNT_LEN,
};
use crate::STAKE_VAULT_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenInterface;

/// Accounts context for `add_pool`.
///
/// Registers a pool for `stake_mint` with its stake vault. The pool account
/// is created with `init_if_needed` so a second registration of the same
/// mint reaches the handler and fails with `DuplicateStakeToken` instead of
/// a system-program error.
///
/// `stake_mint` and `stake_vault` stay unchecked here: the handler judges the
/// mint key before reading the mint, then creates the vault.
///
/// Other pools passed writable in `remaining_accounts` are settled before
/// the total weight changes.
#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(
        mut,
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    /// CHECK: PDA derivation enforced via seeds. Used as the stake vault authority.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump = farm_config.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: key, owner and mint layout checked by `check_stake_mint`.
    pub stake_mint: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [POOL_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
        payer = owner,
        space = Pool::LEN
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA derivation enforced via seeds; created in the handler.
    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
    )]
    pub stake_vault: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Registers a new pool.
///
/// Steps:
/// 1. Reject null/sentinel stake mints, non-mints and mints already registered.
/// 2. Create the stake vault owned by the vault authority.
/// 3. Settle the pools in `remaining_accounts` at the old total weight.
/// 4. Start the pool at `max(current slot, start slot)` and add its weight.
pub fn add_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, AddPool<'info>>,
    weight: u64,
) -> Result<()> {
    let stake_mint = ctx.accounts.stake_mint.key();
    check_stake_mint(&ctx.accounts.stake_mint, ctx.accounts.token_program.key)?;
    ctx.accounts.pool.ensure_unregistered()?;

    let token_program = ctx.accounts.token_program.to_account_info();
    create_pda_account(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        TOKEN_ACCOUNT_LEN,
        token_program.key,
        &[&[
            STAKE_VAULT_SEED.as_bytes(),
            stake_mint.as_ref(),
            &[ctx.bumps.stake_vault],
        ]],
    )?;
    initialize_token_account(
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        token_program,
    )?;

    let slot = Clock::get()?.slot;
    let pool_key = ctx.accounts.pool.key();
    settle_remaining_pools(
        ctx.remaining_accounts,
        &ctx.accounts.farm_config,
        slot,
        Some(pool_key),
    )?;

    let farm_config = &mut ctx.accounts.farm_config;
    let pool = &mut ctx.accounts.pool;
    pool.bump = ctx.bumps.pool;
    pool.stake_mint = stake_mint;
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.last_settled_slot = farm_config.first_settlement_slot(slot);
    pool.weight = 0;
    farm_config.total_weight = pool.reweight(weight, farm_config.total_weight)?;
    farm_config.pool_count = farm_config
        .pool_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(PoolWeightSet {
        stake_mint,
        old_weight: 0,
        new_weight: weight,
        total_weight: farm_config.total_weight,
    });
    Ok(())
}
