use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitialiseConfig<'info> {
    /// Bootstrap admin (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        init,
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = BoostConfig::LEN
    )]
    pub boost_config: Account<'info, BoostConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialise_config(ctx: Context<InitialiseConfig>, admin: Pubkey) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default(), ErrorCode::NullAddress);
    let boost_config = &mut ctx.accounts.boost_config;
    boost_config.bump = ctx.bumps.boost_config;
    boost_config.admin = admin;
    msg!("Boost config initialized");

    emit!(AdminChanged {
        previous: Pubkey::default(),
        admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,
}

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::NullAddress);
    let boost_config = &mut ctx.accounts.boost_config;
    let previous = boost_config.admin;
    boost_config.admin = new_admin;

    emit!(AdminChanged {
        previous,
        admin: new_admin,
    });
    Ok(())
}
