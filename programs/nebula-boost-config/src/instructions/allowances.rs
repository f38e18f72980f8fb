use crate::error::ErrorCode;
use crate::resolve::is_stake_token_allowed;
use crate::states::*;
use anchor_lang::prelude::*;

// ────────────────────────────────────────────────────────────────────────────
// Stake token allow-list
// ────────────────────────────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(stake_mint: Pubkey)]
pub struct SetStakeTokenAllowance<'info> {
    #[account(
        mut,
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,

    #[account(
        init_if_needed,
        seeds = [STAKE_TOKEN_SEED.as_bytes(), stake_mint.as_ref()],
        bump,
        payer = owner,
        space = StakeTokenAllowance::LEN
    )]
    pub stake_token_allowance: Account<'info, StakeTokenAllowance>,

    pub system_program: Program<'info, System>,
}

pub fn set_stake_token_allowance(
    ctx: Context<SetStakeTokenAllowance>,
    stake_mint: Pubkey,
    allowed: bool,
) -> Result<()> {
    require_keys_neq!(stake_mint, Pubkey::default(), ErrorCode::NullAddress);
    let entry = &mut ctx.accounts.stake_token_allowance;
    entry.bump = ctx.bumps.stake_token_allowance;
    entry.stake_mint = stake_mint;
    entry.allowed = allowed;

    emit!(StakeTokenAllowanceSet {
        stake_mint,
        allowed
    });
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Energy consumer allow-list
// ────────────────────────────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(consumer: Pubkey)]
pub struct SetConsumerAllowance<'info> {
    #[account(
        mut,
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,

    #[account(
        init_if_needed,
        seeds = [ENERGY_CONSUMER_SEED.as_bytes(), consumer.as_ref()],
        bump,
        payer = owner,
        space = EnergyConsumer::LEN
    )]
    pub energy_consumer: Account<'info, EnergyConsumer>,

    pub system_program: Program<'info, System>,
}

pub fn set_consumer_allowance(
    ctx: Context<SetConsumerAllowance>,
    consumer: Pubkey,
    allowed: bool,
) -> Result<()> {
    require_keys_neq!(consumer, Pubkey::default(), ErrorCode::NullAddress);
    let entry = &mut ctx.accounts.energy_consumer;
    entry.bump = ctx.bumps.energy_consumer;
    entry.consumer = consumer;
    entry.allowed = allowed;

    emit!(ConsumerAllowanceSet { consumer, allowed });
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// NFT category tag
// ────────────────────────────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(collection: Pubkey, nft_mint: Pubkey)]
pub struct SetNftCategory<'info> {
    #[account(
        mut,
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,

    #[account(
        init_if_needed,
        seeds = [NFT_CATEGORY_SEED.as_bytes(), nft_mint.as_ref()],
        bump,
        payer = owner,
        space = NftCategory::LEN
    )]
    pub nft_category: Account<'info, NftCategory>,

    pub system_program: Program<'info, System>,
}

pub fn set_nft_category(
    ctx: Context<SetNftCategory>,
    collection: Pubkey,
    nft_mint: Pubkey,
    category_id: u32,
) -> Result<()> {
    let entry = &mut ctx.accounts.nft_category;
    entry.bump = ctx.bumps.nft_category;
    entry.collection = collection;
    entry.nft_mint = nft_mint;
    entry.category_id = category_id;

    emit!(NftCategorySet {
        collection,
        nft_mint,
        category_id,
    });
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Exact NFT override
// ────────────────────────────────────────────────────────────────────────────

/// Sets the exact override for one NFT under `stake_mint`. The stake mint
/// must already be allowed.
#[derive(Accounts)]
#[instruction(stake_mint: Pubkey, collection: Pubkey, nft_mint: Pubkey)]
pub struct SetNftAllowance<'info> {
    #[account(
        mut,
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,

    /// CHECK: address derived from `stake_mint`; read through `resolve`.
    #[account(
        seeds = [STAKE_TOKEN_SEED.as_bytes(), stake_mint.as_ref()],
        bump,
    )]
    pub stake_token_allowance: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [NFT_ALLOWANCE_SEED.as_bytes(), stake_mint.as_ref(), nft_mint.as_ref()],
        bump,
        payer = owner,
        space = NftAllowance::LEN
    )]
    pub nft_allowance: Account<'info, NftAllowance>,

    pub system_program: Program<'info, System>,
}

pub fn set_nft_allowance(
    ctx: Context<SetNftAllowance>,
    stake_mint: Pubkey,
    collection: Pubkey,
    nft_mint: Pubkey,
    allowed: bool,
) -> Result<()> {
    require!(
        is_stake_token_allowed(&ctx.accounts.stake_token_allowance)?,
        ErrorCode::BadStakingToken
    );
    let entry = &mut ctx.accounts.nft_allowance;
    entry.bump = ctx.bumps.nft_allowance;
    entry.stake_mint = stake_mint;
    entry.collection = collection;
    entry.nft_mint = nft_mint;
    entry.allowed = allowed;

    emit!(NftAllowanceSet {
        stake_mint,
        collection,
        nft_mint,
        allowed,
    });
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Category fallback
// ────────────────────────────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(stake_mint: Pubkey, collection: Pubkey, category_id: u32)]
pub struct SetCategoryAllowance<'info> {
    #[account(
        mut,
        constraint = boost_config.is_admin(&owner.key()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [BOOST_CONFIG_SEED.as_bytes()],
        bump = boost_config.bump,
    )]
    pub boost_config: Account<'info, BoostConfig>,

    /// CHECK: address derived from `stake_mint`; read through `resolve`.
    #[account(
        seeds = [STAKE_TOKEN_SEED.as_bytes(), stake_mint.as_ref()],
        bump,
    )]
    pub stake_token_allowance: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [
            CATEGORY_ALLOWANCE_SEED.as_bytes(),
            stake_mint.as_ref(),
            collection.as_ref(),
            &category_id.to_le_bytes(),
        ],
        bump,
        payer = owner,
        space = CategoryAllowance::LEN
    )]
    pub category_allowance: Account<'info, CategoryAllowance>,

    pub system_program: Program<'info, System>,
}

pub fn set_category_allowance(
    ctx: Context<SetCategoryAllowance>,
    stake_mint: Pubkey,
    collection: Pubkey,
    category_id: u32,
    allowed: bool,
) -> Result<()> {
    require!(
        is_stake_token_allowed(&ctx.accounts.stake_token_allowance)?,
        ErrorCode::BadStakingToken
    );
    let entry = &mut ctx.accounts.category_allowance;
    entry.bump = ctx.bumps.category_allowance;
    entry.stake_mint = stake_mint;
    entry.collection = collection;
    entry.category_id = category_id;
    entry.allowed = allowed;

    emit!(CategoryAllowanceSet {
        stake_mint,
        collection,
        category_id,
        allowed,
    });
    Ok(())
}
