use crate::error::ErrorCode;
use crate::states::*;
use crate::BOOSTER_AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use nebula_farm::states::{FarmConfig, FARM_CONFIG_SEED};

/// Creates the booster configuration.
///
/// Only the bootstrap admin key may run it. Before any boosted call works,
/// the booster authority PDA must also be enabled as a delegate on each
/// farm pool and allow-listed as an energy consumer.
#[derive(Accounts)]
pub struct InitialiseBooster<'info> {
    #[account(mut, address = crate::admin::id() @ ErrorCode::InvalidOwner)]
    pub owner: Signer<'info>,

    #[account(
        init,
        seeds = [BOOSTER_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = BoosterConfig::LEN
    )]
    pub booster_config: Box<Account<'info, BoosterConfig>>,

    /// CHECK: PDA derivation enforced via seeds; holds escrows and signs CPIs.
    #[account(
        seeds = [BOOSTER_AUTH_SEED.as_bytes()],
        bump,
    )]
    pub booster_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump = farm_config.bump,
        seeds::program = nebula_farm::ID,
    )]
    pub farm_config: Box<Account<'info, FarmConfig>>,

    #[account(address = farm_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    pub system_program: Program<'info, System>,
}

pub fn initialise_booster(ctx: Context<InitialiseBooster>, admin: Pubkey) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default(), ErrorCode::InvalidOwner);

    let booster_config = &mut ctx.accounts.booster_config;
    booster_config.bump = ctx.bumps.booster_config;
    booster_config.authority_bump = ctx.bumps.booster_authority;
    booster_config.admin = admin;
    booster_config.reward_mint = ctx.accounts.reward_mint.key();

    emit!(BoosterInitialized {
        admin,
        booster_authority: ctx.accounts.booster_authority.key(),
        reward_mint: booster_config.reward_mint,
    });
    Ok(())
}
