use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Switches a pool between open mode (beneficiaries act for themselves) and
/// delegated mode (only enabled delegates may act).
#[derive(Accounts)]
pub struct SetDelegatedMode<'info> {
    #[account(
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn set_delegated_mode(ctx: Context<SetDelegatedMode>, enabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.delegated_mode = enabled;
    emit!(DelegatedModeSet {
        stake_mint: pool.stake_mint,
        enabled,
    });
    Ok(())
}

/// Accounts context for `add_delegate`.
///
/// The delegate entry is created on first use and re-enabled on later
/// calls; an entry that is already enabled is rejected.
#[derive(Accounts)]
#[instruction(delegate: Pubkey)]
pub struct AddDelegate<'info> {
    #[account(
        mut,
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.delegated_mode @ ErrorCode::DelegatedModeDisabled,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), delegate.as_ref()],
        bump,
        payer = owner,
        space = PoolDelegate::LEN
    )]
    pub pool_delegate: Account<'info, PoolDelegate>,

    pub system_program: Program<'info, System>,
}

pub fn add_delegate(ctx: Context<AddDelegate>, delegate: Pubkey) -> Result<()> {
    require_keys_neq!(delegate, Pubkey::default(), ErrorCode::InvalidParam);
    let pool = &mut ctx.accounts.pool;
    let pool_delegate = &mut ctx.accounts.pool_delegate;
    require!(!pool_delegate.enabled, ErrorCode::DelegateAlreadyEnabled);

    pool_delegate.bump = ctx.bumps.pool_delegate;
    pool_delegate.pool = pool.key();
    pool_delegate.delegate = delegate;
    pool_delegate.enabled = true;
    pool.delegate_count = pool
        .delegate_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(DelegateUpdated {
        stake_mint: pool.stake_mint,
        delegate,
        enabled: true,
        delegate_count: pool.delegate_count,
    });
    Ok(())
}

/// Disables a delegate. Positions it funded keep their `funded_by` link,
/// but the delegate fails the entry check on every later call.
#[derive(Accounts)]
#[instruction(delegate: Pubkey)]
pub struct RemoveDelegate<'info> {
    #[account(
        constraint = farm_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.delegated_mode @ ErrorCode::DelegatedModeDisabled,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), delegate.as_ref()],
        bump = pool_delegate.bump,
    )]
    pub pool_delegate: Account<'info, PoolDelegate>,
}

pub fn remove_delegate(ctx: Context<RemoveDelegate>, delegate: Pubkey) -> Result<()> {
    let pool_delegate = &mut ctx.accounts.pool_delegate;
    require!(pool_delegate.enabled, ErrorCode::DelegateNotEnabled);
    pool_delegate.enabled = false;

    emit!(DelegateUpdated {
        stake_mint: ctx.accounts.pool.stake_mint,
        delegate,
        enabled: false,
        delegate_count: ctx.accounts.pool.delegate_count,
    });
    Ok(())
}
