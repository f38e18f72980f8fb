use crate::error::ErrorCode;
use crate::instructions::shared::*;
use crate::states::*;
use crate::{BOOSTER_AUTH_SEED, HARVEST_GROUP_LEN};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use nebula_boost_config::resolve::{
    energy_record_address, is_stake_token_allowed, stake_token_allowance_address,
};
use nebula_farm::states::{Pool, POOL_SEED};

/// Harvest several pools in one call.
///
/// `remaining_accounts` holds one group of `HARVEST_GROUP_LEN` accounts per
/// pool, in order:
/// `[stake_token_allowance, pool, pool_delegate, position, staking_slot,
/// energy_record, nft_category, category_energy]`, the last three for the
/// NFT staked in that slot.
/// Each pool emits its own `Harvest`.
#[derive(Accounts)]
pub struct HarvestMany<'info> {
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

    #[account(mut, address = booster_config.reward_mint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = user,
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

/// Number of pool groups in `len` remaining accounts.
pub fn group_count(len: usize) -> Result<usize> {
    require_gt!(len, 0, ErrorCode::EmptyBatch);
    require!(len % HARVEST_GROUP_LEN == 0, ErrorCode::MalformedBatch);
    Ok(len / HARVEST_GROUP_LEN)
}

/// One validated pool group.
struct HarvestGroup<'info> {
    stake_mint: Pubkey,
    pool: AccountInfo<'info>,
    pool_delegate: AccountInfo<'info>,
    position: AccountInfo<'info>,
    staking_slot: StakingSlot,
    energy_record: AccountInfo<'info>,
    nft_category: AccountInfo<'info>,
    category_energy: AccountInfo<'info>,
}

impl<'info> HarvestGroup<'info> {
    fn parse(group: &'info [AccountInfo<'info>], user: &Pubkey) -> Result<Self> {
        let [allowance, pool, pool_delegate, position, slot, energy_record, nft_category, category_energy] =
            group
        else {
            return err!(ErrorCode::MalformedBatch);
        };

        require_keys_eq!(*pool.owner, nebula_farm::ID, ErrorCode::InvalidPoolAccount);
        let (stake_mint, pool_bump) = {
            let data = pool.try_borrow_data()?;
            let state = Pool::try_deserialize(&mut &data[..])?;
            (state.stake_mint, state.bump)
        };
        let expected = Pubkey::create_program_address(
            &[POOL_SEED.as_bytes(), stake_mint.as_ref(), &[pool_bump]],
            &nebula_farm::ID,
        )
        .map_err(|_| error!(ErrorCode::InvalidPoolAccount))?;
        require_keys_eq!(pool.key(), expected, ErrorCode::InvalidPoolAccount);

        let (expected, _) = stake_token_allowance_address(&stake_mint);
        require_keys_eq!(allowance.key(), expected, ErrorCode::BadStakeToken);
        require!(is_stake_token_allowed(allowance)?, ErrorCode::BadStakeToken);

        let (expected, _) = Pubkey::find_program_address(
            &[STAKING_SLOT_SEED.as_bytes(), stake_mint.as_ref(), user.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(slot.key(), expected, ErrorCode::InvalidPoolAccount);
        let staking_slot = if slot.data_is_empty() {
            StakingSlot::default()
        } else {
            let account = Account::<StakingSlot>::try_from(slot)?;
            account.into_inner()
        };

        let (expected, _) = energy_record_address(&staking_slot.collection, &staking_slot.nft_mint);
        require_keys_eq!(energy_record.key(), expected, ErrorCode::InvalidNftAccount);

        Ok(HarvestGroup {
            stake_mint,
            pool: pool.clone(),
            pool_delegate: pool_delegate.clone(),
            position: position.clone(),
            staking_slot,
            energy_record: energy_record.clone(),
            nft_category: nft_category.clone(),
            category_energy: category_energy.clone(),
        })
    }
}

pub fn harvest_many<'info>(ctx: Context<'_, '_, 'info, 'info, HarvestMany<'info>>) -> Result<()> {
    let remaining = ctx.remaining_accounts;
    group_count(remaining.len())?;

    let user = ctx.accounts.user.key();
    for chunk in remaining.chunks(HARVEST_GROUP_LEN) {
        let group = HarvestGroup::parse(chunk, &user)?;

        let farm = ctx.accounts.farm.link(
            group.pool.clone(),
            group.pool_delegate.clone(),
            group.position.clone(),
            ctx.accounts.booster_authority.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.reward_escrow.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.booster_config.authority_bump,
        );
        let energy = ctx.accounts.energy.link(
            group.energy_record.clone(),
            group.nft_category.clone(),
            group.category_energy.clone(),
            ctx.accounts.user.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        );

        harvest_boosted(
            &farm,
            &energy,
            &mut ctx.accounts.reward_escrow,
            &group.staking_slot,
            user,
            group.stake_mint,
            ctx.accounts.user_reward_token.to_account_info(),
            ctx.accounts.reward_mint.decimals,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(
            group_count(0).unwrap_err(),
            error!(ErrorCode::EmptyBatch)
        );
    }

    #[test]
    fn partial_group_is_rejected() {
        assert_eq!(
            group_count(HARVEST_GROUP_LEN + 1).unwrap_err(),
            error!(ErrorCode::MalformedBatch)
        );
    }

    #[test]
    fn whole_groups_are_counted() {
        assert_eq!(group_count(HARVEST_GROUP_LEN).unwrap(), 1);
        assert_eq!(group_count(HARVEST_GROUP_LEN * 3).unwrap(), 3);
    }
}
