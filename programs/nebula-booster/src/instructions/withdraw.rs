use crate::error::ErrorCode;
use crate::instructions::shared::*;
use crate::states::*;
use crate::utils::transfer_from_escrow_to_user;
use crate::BOOSTER_AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use nebula_boost_config::resolve::is_stake_token_allowed;
use nebula_boost_config::states::{ENERGY_SEED, STAKE_TOKEN_SEED};
use nebula_farm::states::{DELEGATE_SEED, POOL_SEED, POSITION_SEED};

/// Withdraw stake through the booster; the harvested reward is boosted.
#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut)]
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

    #[account(
        seeds = [STAKING_SLOT_SEED.as_bytes(), stake_mint.key().as_ref(), user.key().as_ref()],
        bump = staking_slot.bump,
    )]
    pub staking_slot: Box<Account<'info, StakingSlot>>,

    /// CHECK: farm pool PDA.
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: farm delegate entry of the booster authority.
    #[account(
        seeds = [DELEGATE_SEED.as_bytes(), pool.key().as_ref(), booster_authority.key().as_ref()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub pool_delegate: UncheckedAccount<'info>,

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
        associated_token::mint = stake_mint,
        associated_token::authority = booster_authority,
        associated_token::token_program = token_program,
    )]
    pub stake_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = user,
    )]
    pub user_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: config PDA of the staked NFT; may be empty.
    #[account(
        mut,
        seeds = [ENERGY_SEED.as_bytes(), staking_slot.collection.as_ref(), staking_slot.nft_mint.as_ref()],
        bump,
        seeds::program = nebula_boost_config::ID,
    )]
    pub energy_record: UncheckedAccount<'info>,

    /// CHECK: category entry of the staked NFT; checked by `resolve_energy`.
    pub staked_nft_category: UncheckedAccount<'info>,

    /// CHECK: category energy default of the staked NFT; checked by `resolve_energy`.
    pub category_energy: UncheckedAccount<'info>,

    #[account(mut, address = booster_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = booster_authority,
        associated_token::token_program = token_program,
    )]
    pub reward_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = reward_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub farm: FarmAccounts<'info>,

    pub energy: EnergyAccounts<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

pub fn withdraw(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);
    require!(
        is_stake_token_allowed(&ctx.accounts.stake_token_allowance)?,
        ErrorCode::BadStakeToken
    );

    let user = ctx.accounts.user.key();
    let stake_mint = ctx.accounts.stake_mint.key();
    let authority_bump = ctx.accounts.booster_config.authority_bump;
    let farm = ctx.accounts.farm.link(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.pool_delegate.to_account_info(),
        ctx.accounts.position.to_account_info(),
        ctx.accounts.booster_authority.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.reward_escrow.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        authority_bump,
    );
    let energy = ctx.accounts.energy.link(
        ctx.accounts.energy_record.to_account_info(),
        ctx.accounts.staked_nft_category.to_account_info(),
        ctx.accounts.category_energy.to_account_info(),
        ctx.accounts.user.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    let reward_before = ctx.accounts.reward_escrow.amount;
    let stake_before = ctx.accounts.stake_escrow.amount;
    farm.withdraw(
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.stake_escrow.to_account_info(),
        user,
        amount,
    )?;
    let returned = escrow_delta(&mut ctx.accounts.stake_escrow, stake_before)?;
    let base = escrow_delta(&mut ctx.accounts.reward_escrow, reward_before)?;

    transfer_from_escrow_to_user(
        ctx.accounts.booster_authority.to_account_info(),
        ctx.accounts.stake_escrow.to_account_info(),
        ctx.accounts.user_stake_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        returned,
        ctx.accounts.stake_mint.decimals,
        &[&[BOOSTER_AUTH_SEED.as_bytes(), &[authority_bump]]],
    )?;

    pay_boosted(
        &farm,
        &energy,
        &ctx.accounts.staking_slot,
        user,
        stake_mint,
        ctx.accounts.user_reward_token.to_account_info(),
        ctx.accounts.reward_mint.decimals,
        base,
    )?;

    emit!(Withdraw {
        user,
        stake_mint,
        amount: returned,
    });
    Ok(())
}
