use crate::boost::BoostOutcome;
use crate::error::ErrorCode;
use crate::instructions::shared::*;
use crate::states::*;
use crate::utils::{transfer_from_escrow_to_user, transfer_from_user_to_escrow};
use crate::BOOSTER_AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use nebula_boost_config::resolve::{
    category_allowance_address, is_nft_allowed, is_stake_token_allowed, load_if_present,
};
use nebula_boost_config::states::{
    CategoryAllowance, NftAllowance, NftCategory, ENERGY_SEED, NFT_ALLOWANCE_SEED,
    NFT_CATEGORY_SEED, STAKE_TOKEN_SEED,
};
use nebula_farm::states::{DELEGATE_SEED, POOL_SEED, POSITION_SEED};

/// Stake an NFT against a pool, replacing the one staked there before.
///
/// The pool is always harvested first and boosted with the outgoing NFT
/// (if any). The outgoing NFT is returned and only then is the new one
/// taken into custody. `staked_nft_*` accounts are required when the slot
/// already holds an NFT.
#[derive(Accounts)]
pub struct StakeNft<'info> {
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

    /// CHECK: only used to derive pool, slot and allowance addresses.
    pub stake_mint: UncheckedAccount<'info>,

    /// CHECK: config PDA, contents read through `resolve`.
    #[account(
        seeds = [STAKE_TOKEN_SEED.as_bytes(), stake_mint.key().as_ref()],
        bump,
        seeds::program = nebula_boost_config::ID,
    )]
    pub stake_token_allowance: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [STAKING_SLOT_SEED.as_bytes(), stake_mint.key().as_ref(), user.key().as_ref()],
        bump,
        payer = user,
        space = StakingSlot::LEN
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

    /// CHECK: farm position PDA of `user`; may be empty.
    #[account(
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), user.key().as_ref()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub position: UncheckedAccount<'info>,

    /// CHECK: energy record of the outgoing NFT; may be empty.
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

    pub nft_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        seeds = [b"metadata", metadata_program.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key(),
    )]
    pub nft_metadata: Box<Account<'info, MetadataAccount>>,

    /// CHECK: exact allowance entry; may be empty.
    #[account(
        seeds = [NFT_ALLOWANCE_SEED.as_bytes(), stake_mint.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        seeds::program = nebula_boost_config::ID,
    )]
    pub nft_allowance: UncheckedAccount<'info>,

    /// CHECK: category entry of the nft; may be empty.
    #[account(
        seeds = [NFT_CATEGORY_SEED.as_bytes(), nft_mint.key().as_ref()],
        bump,
        seeds::program = nebula_boost_config::ID,
    )]
    pub nft_category: UncheckedAccount<'info>,

    /// CHECK: depends on the category id; address checked in the handler.
    pub category_allowance: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = nft_mint,
        token::authority = user,
    )]
    pub user_nft_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = nft_mint,
        associated_token::authority = booster_authority,
        associated_token::token_program = token_program,
    )]
    pub nft_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = staking_slot.nft_mint @ ErrorCode::InvalidNftAccount)]
    pub staked_nft_mint: Option<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = staking_slot.nft_mint,
        associated_token::authority = booster_authority,
        associated_token::token_program = token_program,
    )]
    pub staked_nft_escrow: Option<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = staking_slot.nft_mint,
        token::authority = user,
    )]
    pub user_staked_nft_token: Option<InterfaceAccount<'info, TokenAccount>>,

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

    pub metadata_program: Program<'info, Metadata>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

/// Verified collection of an NFT, if its metadata carries one.
pub fn verified_collection(metadata: &MetadataAccount) -> Option<Pubkey> {
    metadata
        .collection
        .as_ref()
        .filter(|c| c.verified)
        .map(|c| c.key)
}

/// Resolves the NFT allowance: the exact entry for this NFT first, else the
/// allowance of its category. Entries recorded for another collection are
/// ignored.
pub fn check_nft_allowed(
    stake_mint: &Pubkey,
    collection: &Pubkey,
    nft_allowance: &AccountInfo,
    nft_category: &AccountInfo,
    category_allowance: &AccountInfo,
) -> Result<bool> {
    let exact = load_if_present::<NftAllowance>(nft_allowance)?
        .filter(|a| a.collection == *collection);

    let category = match load_if_present::<NftCategory>(nft_category)?
        .filter(|c| c.collection == *collection)
    {
        Some(category) => {
            let (expected, _) =
                category_allowance_address(stake_mint, collection, category.category_id);
            require_keys_eq!(
                category_allowance.key(),
                expected,
                ErrorCode::InvalidCategoryAccount
            );
            load_if_present::<CategoryAllowance>(category_allowance)?
        }
        None => None,
    };

    Ok(is_nft_allowed(exact.as_ref(), category.as_ref()))
}

/// Re-points `slot` at the incoming NFT and returns the outgoing
/// `(collection, nft_mint)`, if any.
///
/// `harvest` runs first and sees the slot still holding the outgoing NFT, so
/// pending reward is boosted with the outgoing NFT's energy. A failed
/// harvest leaves the slot untouched.
pub fn swap_staked_nft<F>(
    slot: &mut StakingSlot,
    collection: Pubkey,
    nft_mint: Pubkey,
    now: u64,
    harvest: F,
) -> Result<Option<(Pubkey, Pubkey)>>
where
    F: FnOnce(&StakingSlot) -> Result<BoostOutcome>,
{
    harvest(slot)?;
    let outgoing = slot
        .is_staked()
        .then_some((slot.collection, slot.nft_mint));
    slot.clear();
    slot.stage(collection, nft_mint, now);
    Ok(outgoing)
}

pub fn stake_nft(ctx: Context<StakeNft>) -> Result<()> {
    require!(
        is_stake_token_allowed(&ctx.accounts.stake_token_allowance)?,
        ErrorCode::BadStakeToken
    );

    let user = ctx.accounts.user.key();
    let stake_mint = ctx.accounts.stake_mint.key();
    let nft_mint = ctx.accounts.nft_mint.key();
    let collection =
        verified_collection(&ctx.accounts.nft_metadata).ok_or(ErrorCode::UnverifiedCollection)?;

    ctx.accounts
        .staking_slot
        .bind(ctx.bumps.staking_slot, stake_mint, user);
    require!(
        !ctx.accounts.staking_slot.holds(&collection, &nft_mint),
        ErrorCode::NftAlreadyStaked
    );
    require!(
        check_nft_allowed(
            &stake_mint,
            &collection,
            &ctx.accounts.nft_allowance,
            &ctx.accounts.nft_category,
            &ctx.accounts.category_allowance,
        )?,
        ErrorCode::BadNft
    );
    if ctx.accounts.staking_slot.is_staked()
        && (ctx.accounts.staked_nft_mint.is_none()
            || ctx.accounts.staked_nft_escrow.is_none()
            || ctx.accounts.user_staked_nft_token.is_none())
    {
        return err!(ErrorCode::MissingStakedNftAccounts);
    }

    // --- 1) Harvest with the outgoing NFT, then swap the slot ---
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
    let user_reward_token = ctx.accounts.user_reward_token.to_account_info();
    let reward_decimals = ctx.accounts.reward_mint.decimals;
    let reward_escrow = &mut ctx.accounts.reward_escrow;
    let outgoing = swap_staked_nft(
        &mut ctx.accounts.staking_slot,
        collection,
        nft_mint,
        Clock::get()?.slot,
        |outgoing_slot| {
            harvest_boosted(
                &farm,
                &energy,
                reward_escrow,
                outgoing_slot,
                user,
                stake_mint,
                user_reward_token,
                reward_decimals,
            )
        },
    )?;

    // --- 2) Return the outgoing NFT ---
    if let Some((old_collection, old_nft)) = outgoing {
        let (Some(staked_mint), Some(staked_escrow), Some(user_staked_token)) = (
            ctx.accounts.staked_nft_mint.as_ref(),
            ctx.accounts.staked_nft_escrow.as_ref(),
            ctx.accounts.user_staked_nft_token.as_ref(),
        ) else {
            return err!(ErrorCode::MissingStakedNftAccounts);
        };

        transfer_from_escrow_to_user(
            ctx.accounts.booster_authority.to_account_info(),
            staked_escrow.to_account_info(),
            user_staked_token.to_account_info(),
            staked_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            staked_escrow.amount,
            staked_mint.decimals,
            &[&[BOOSTER_AUTH_SEED.as_bytes(), &[authority_bump]]],
        )?;

        emit!(NftUnstaked {
            user,
            stake_mint,
            collection: old_collection,
            nft_mint: old_nft,
        });
    }

    // --- 3) Take custody of the new NFT ---
    transfer_from_user_to_escrow(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.user_nft_token.to_account_info(),
        ctx.accounts.nft_escrow.to_account_info(),
        ctx.accounts.nft_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
        ctx.accounts.nft_mint.decimals,
    )?;

    emit!(NftStaked {
        user,
        stake_mint,
        collection,
        nft_mint,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_boost_config::states::EnergyRecord;

    struct Raw {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl Raw {
        fn empty(key: Pubkey) -> Self {
            Raw {
                key,
                owner: nebula_boost_config::ID,
                lamports: 0,
                data: vec![],
            }
        }

        fn with<T: AccountSerialize>(key: Pubkey, state: &T) -> Self {
            let mut data = Vec::new();
            state.try_serialize(&mut data).unwrap();
            Raw {
                key,
                owner: nebula_boost_config::ID,
                lamports: 1,
                data,
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                false,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    #[test]
    fn exact_allowance_for_the_collection_is_enough() {
        let stake_mint = Pubkey::new_unique();
        let collection = Pubkey::new_unique();
        let mut exact = Raw::with(
            Pubkey::new_unique(),
            &NftAllowance {
                stake_mint,
                collection,
                allowed: true,
                ..Default::default()
            },
        );
        let mut category = Raw::empty(Pubkey::new_unique());
        let mut category_allowance = Raw::empty(Pubkey::new_unique());

        assert!(check_nft_allowed(
            &stake_mint,
            &collection,
            &exact.info(),
            &category.info(),
            &category_allowance.info(),
        )
        .unwrap());
    }

    #[test]
    fn exact_allowance_of_another_collection_is_ignored() {
        let stake_mint = Pubkey::new_unique();
        let mut exact = Raw::with(
            Pubkey::new_unique(),
            &NftAllowance {
                stake_mint,
                collection: Pubkey::new_unique(),
                allowed: true,
                ..Default::default()
            },
        );
        let mut category = Raw::empty(Pubkey::new_unique());
        let mut category_allowance = Raw::empty(Pubkey::new_unique());

        assert!(!check_nft_allowed(
            &stake_mint,
            &Pubkey::new_unique(),
            &exact.info(),
            &category.info(),
            &category_allowance.info(),
        )
        .unwrap());
    }

    #[test]
    fn category_allowance_must_sit_at_its_address() {
        let stake_mint = Pubkey::new_unique();
        let collection = Pubkey::new_unique();
        let mut exact = Raw::empty(Pubkey::new_unique());
        let mut category = Raw::with(
            Pubkey::new_unique(),
            &NftCategory {
                collection,
                category_id: 7,
                ..Default::default()
            },
        );
        let allowance = CategoryAllowance {
            stake_mint,
            collection,
            category_id: 7,
            allowed: true,
            ..Default::default()
        };

        let mut misplaced = Raw::with(Pubkey::new_unique(), &allowance);
        assert!(check_nft_allowed(
            &stake_mint,
            &collection,
            &exact.info(),
            &category.info(),
            &misplaced.info(),
        )
        .is_err());

        let (address, _) = category_allowance_address(&stake_mint, &collection, 7);
        let mut placed = Raw::with(address, &allowance);
        assert!(check_nft_allowed(
            &stake_mint,
            &collection,
            &exact.info(),
            &category.info(),
            &placed.info(),
        )
        .unwrap());
    }

    fn energy(max_energy: u64, boost_bps: u64) -> EnergyRecord {
        let mut record = EnergyRecord::default();
        record.provision(max_energy, boost_bps, 1);
        record
    }

    #[test]
    fn swap_boosts_with_outgoing_nft_before_staging_incoming() {
        let old_collection = Pubkey::new_unique();
        let old_nft = Pubkey::new_unique();
        let new_collection = Pubkey::new_unique();
        let new_nft = Pubkey::new_unique();
        let outgoing_energy = energy(1_000, 2_000);
        let incoming_energy = energy(1_000, 9_000);

        let mut slot = StakingSlot::default();
        slot.stage(old_collection, old_nft, 5);

        let mut seen = None;
        let outgoing = swap_staked_nft(&mut slot, new_collection, new_nft, 9, |at_harvest| {
            seen = Some(at_harvest.nft_mint);
            let record = if at_harvest.holds(&old_collection, &old_nft) {
                &outgoing_energy
            } else {
                &incoming_energy
            };
            let outcome = resolve_boost(at_harvest, Some(record), 100)?;
            assert_eq!(outcome.extra, 20);
            Ok(outcome)
        })
        .unwrap();

        assert_eq!(seen, Some(old_nft));
        assert_eq!(outgoing, Some((old_collection, old_nft)));
        assert!(slot.holds(&new_collection, &new_nft));
        assert_eq!(slot.staked_at_slot, 9);
    }

    #[test]
    fn first_stake_harvests_unboosted_and_returns_nothing() {
        let mut slot = StakingSlot::default();
        let collection = Pubkey::new_unique();
        let nft = Pubkey::new_unique();
        let record = energy(1_000, 5_000);

        let outgoing = swap_staked_nft(&mut slot, collection, nft, 3, |at_harvest| {
            let outcome = resolve_boost(at_harvest, Some(&record), 100)?;
            assert_eq!(outcome, BoostOutcome::unboosted(100));
            Ok(outcome)
        })
        .unwrap();

        assert_eq!(outgoing, None);
        assert!(slot.holds(&collection, &nft));
    }

    #[test]
    fn failed_harvest_leaves_slot_untouched() {
        let old_collection = Pubkey::new_unique();
        let old_nft = Pubkey::new_unique();
        let mut slot = StakingSlot::default();
        slot.stage(old_collection, old_nft, 5);

        let result = swap_staked_nft(&mut slot, Pubkey::new_unique(), Pubkey::new_unique(), 9, |_| {
            err!(ErrorCode::MathOverflow)
        });

        assert!(result.is_err());
        assert!(slot.holds(&old_collection, &old_nft));
        assert_eq!(slot.staked_at_slot, 5);
    }
}
