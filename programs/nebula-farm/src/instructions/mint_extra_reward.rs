use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::mint_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Mints additional reward tokens on top of the accumulator payout.
///
/// Restricted to enabled delegates of a pool in delegated mode; the NFT
/// booster uses it to pay boost extras. The vault authority must hold the
/// reward mint's mint authority.
#[derive(Accounts)]
pub struct MintExtraReward<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    /// CHECK: PDA derivation enforced via seeds; mint authority of the reward mint.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump = farm_config.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [POOL_SEED.as_bytes(), pool.stake_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.delegated_mode @ ErrorCode::NotEnabledDelegate,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), caller.key().as_ref()],
        bump = pool_delegate.bump,
        constraint = pool_delegate.enabled @ ErrorCode::NotEnabledDelegate,
    )]
    pub pool_delegate: Account<'info, PoolDelegate>,

    #[account(mut, address = farm_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, token::mint = reward_mint)]
    pub destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn mint_extra_reward(
    ctx: Context<MintExtraReward>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);

    let farm_config = &mut ctx.accounts.farm_config;
    farm_config.total_extra_minted = farm_config
        .total_extra_minted
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    mint_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.destination.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        &[&[crate::AUTH_SEED.as_bytes(), &[farm_config.authority_bump]]],
    )?;

    emit!(ExtraRewardMinted {
        delegate: ctx.accounts.caller.key(),
        beneficiary,
        stake_mint: ctx.accounts.pool.stake_mint,
        amount,
    });
    Ok(())
}
