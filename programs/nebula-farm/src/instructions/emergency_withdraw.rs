use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Returns a position's whole principal to the beneficiary without settling
/// rewards. Anything accrued and unclaimed is forfeited; the reward vault is
/// never touched.
///
/// Callable by the position's funder or by the beneficiary itself,
/// regardless of pool mode or delegate status.
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmergencyWithdraw<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    /// CHECK: PDA derivation enforced via seeds; signs the stake vault transfer.
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
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), beneficiary.as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, UserPosition>>,

    #[account(mut, address = pool.stake_vault)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = pool.stake_mint)]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Beneficiary's stake token account; receives the principal.
    #[account(
        mut,
        token::mint = stake_mint,
        constraint = beneficiary_stake_token.owner == beneficiary @ ErrorCode::InvalidTokenOwner,
    )]
    pub beneficiary_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, beneficiary: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let position = &mut ctx.accounts.position;
    require!(
        caller == position.funded_by || caller == beneficiary,
        ErrorCode::EmergencyOnlyFunder
    );

    let amount = position.take_all_for_emergency();

    let pool = &mut ctx.accounts.pool;
    pool.remove_stake(amount)?;

    transfer_from_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.beneficiary_stake_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.accounts.farm_config.authority_bump]]],
    )?;

    emit!(EmergencyWithdrawn {
        caller,
        beneficiary,
        stake_mint: pool.stake_mint,
        amount,
    });
    Ok(())
}
