use crate::error::ErrorCode;
use crate::states::*;
use crate::REWARD_VAULT_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Accounts context for `initialise_farm`.
///
/// This handler:
/// - Creates the farm configuration with its emission schedule.
/// - Creates the reward vault, a PDA token account owned by the vault authority.
///
/// The reward mint's mint authority should be the vault authority PDA if
/// delegates are expected to call `mint_extra_reward`.
#[derive(Accounts)]
pub struct InitialiseFarm<'info> {
    /// Bootstrap admin (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// Vault authority PDA.
    ///
    /// CHECK: PDA derivation enforced via seeds. Not read as an account; used as Pubkey.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = FarmConfig::LEN
    )]
    pub farm_config: Account<'info, FarmConfig>,

    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned reward vault.
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = reward_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn initialise_farm(
    ctx: Context<InitialiseFarm>,
    admin: Pubkey,
    emission_per_slot: u64,
    start_slot: u64,
) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default(), ErrorCode::InvalidParam);

    let farm_config = ctx.accounts.farm_config.deref_mut();
    farm_config.bump = ctx.bumps.farm_config;
    farm_config.authority_bump = ctx.bumps.authority;
    farm_config.admin = admin;
    farm_config.reward_mint = ctx.accounts.reward_mint.key();
    farm_config.reward_vault = ctx.accounts.reward_vault.key();
    farm_config.emission_per_slot = emission_per_slot;
    farm_config.start_slot = start_slot;
    msg!("Farm config initialized");

    emit!(FarmInitialized {
        admin,
        reward_mint: farm_config.reward_mint,
        reward_vault: farm_config.reward_vault,
        emission_per_slot,
        start_slot,
    });
    Ok(())
}
