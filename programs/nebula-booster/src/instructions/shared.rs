use crate::boost::{compute_boost, BoostOutcome};
use crate::error::ErrorCode;
use crate::states::{Harvest, StakingSlot};
use crate::utils::transfer_from_escrow_to_user;
use crate::BOOSTER_AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use nebula_boost_config::program::NebulaBoostConfig;
use nebula_boost_config::resolve::resolve_energy;
use nebula_boost_config::states::EnergyRecord;
use nebula_farm::program::NebulaFarm;
use nebula_farm::states::{UserPosition, FARM_CONFIG_SEED};

//
// ──────────────────────────────────────────────────────────────────────────────
// Composite account groups shared by every farm-facing instruction
// ──────────────────────────────────────────────────────────────────────────────
//

/// Farm-wide accounts. Per-pool accounts live on the instruction itself (or
/// in `remaining_accounts` for `harvest_many`).
#[derive(Accounts)]
pub struct FarmAccounts<'info> {
    pub farm_program: Program<'info, NebulaFarm>,

    /// CHECK: farm PDA, validated again by the farm program.
    #[account(
        mut,
        seeds = [FARM_CONFIG_SEED.as_bytes()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub farm_config: UncheckedAccount<'info>,

    /// CHECK: farm vault authority PDA.
    #[account(
        seeds = [nebula_farm::AUTH_SEED.as_bytes()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub farm_authority: UncheckedAccount<'info>,

    /// CHECK: farm reward vault PDA.
    #[account(
        mut,
        seeds = [nebula_farm::REWARD_VAULT_SEED.as_bytes()],
        bump,
        seeds::program = nebula_farm::ID,
    )]
    pub reward_vault: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct EnergyAccounts<'info> {
    pub boost_config_program: Program<'info, NebulaBoostConfig>,

    /// CHECK: consumer allow-list entry of the booster authority; the config
    /// program checks its address and contents in `consume_energy`.
    pub consumer_allowance: UncheckedAccount<'info>,
}

//
// ──────────────────────────────────────────────────────────────────────────────
// CPI links
// ──────────────────────────────────────────────────────────────────────────────
//

/// Everything needed to act on one farm pool as its delegate.
#[derive(Clone)]
pub struct FarmLink<'info> {
    pub farm_program: AccountInfo<'info>,
    pub farm_config: AccountInfo<'info>,
    pub farm_authority: AccountInfo<'info>,
    pub reward_vault: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub pool_delegate: AccountInfo<'info>,
    pub position: AccountInfo<'info>,
    pub booster_authority: AccountInfo<'info>,
    pub reward_mint: AccountInfo<'info>,
    pub reward_escrow: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub authority_bump: u8,
}

impl<'info> FarmAccounts<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn link(
        &self,
        pool: AccountInfo<'info>,
        pool_delegate: AccountInfo<'info>,
        position: AccountInfo<'info>,
        booster_authority: AccountInfo<'info>,
        reward_mint: AccountInfo<'info>,
        reward_escrow: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        authority_bump: u8,
    ) -> FarmLink<'info> {
        FarmLink {
            farm_program: self.farm_program.to_account_info(),
            farm_config: self.farm_config.to_account_info(),
            farm_authority: self.farm_authority.to_account_info(),
            reward_vault: self.reward_vault.to_account_info(),
            pool,
            pool_delegate,
            position,
            booster_authority,
            reward_mint,
            reward_escrow,
            token_program,
            authority_bump,
        }
    }
}

impl<'info> FarmAccounts<'info> {
    /// Forwards to the farm's emergency path. Principal goes straight to
    /// `beneficiary_stake_token`; no reward account is involved.
    #[allow(clippy::too_many_arguments)]
    pub fn emergency_withdraw(
        &self,
        pool: AccountInfo<'info>,
        position: AccountInfo<'info>,
        booster_authority: AccountInfo<'info>,
        stake_vault: AccountInfo<'info>,
        stake_mint: AccountInfo<'info>,
        beneficiary_stake_token: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        authority_bump: u8,
        beneficiary: Pubkey,
    ) -> Result<()> {
        let bump = [authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_farm::cpi::emergency_withdraw(
            CpiContext::new_with_signer(
                self.farm_program.to_account_info(),
                nebula_farm::cpi::accounts::EmergencyWithdraw {
                    caller: booster_authority,
                    farm_config: self.farm_config.to_account_info(),
                    authority: self.farm_authority.to_account_info(),
                    pool,
                    position,
                    stake_vault,
                    stake_mint,
                    beneficiary_stake_token,
                    token_program,
                },
                signer,
            ),
            beneficiary,
        )
    }
}

impl<'info> FarmLink<'info> {
    /// Stake currently booked in the farm for this position; 0 when the
    /// position was never opened.
    pub fn position_amount(&self) -> Result<u64> {
        if self.position.data_is_empty() {
            return Ok(0);
        }
        require_keys_eq!(*self.position.owner, nebula_farm::ID, ErrorCode::InvalidPoolAccount);
        let data = self.position.try_borrow_data()?;
        let position = UserPosition::try_deserialize(&mut &data[..])?;
        Ok(position.amount)
    }

    pub fn deposit(
        &self,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        stake_vault: AccountInfo<'info>,
        stake_mint: AccountInfo<'info>,
        stake_escrow: AccountInfo<'info>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_farm::cpi::deposit(
            CpiContext::new_with_signer(
                self.farm_program.clone(),
                nebula_farm::cpi::accounts::Deposit {
                    payer,
                    caller: self.booster_authority.clone(),
                    farm_config: self.farm_config.clone(),
                    authority: self.farm_authority.clone(),
                    pool: self.pool.clone(),
                    pool_delegate: Some(self.pool_delegate.clone()),
                    position: self.position.clone(),
                    stake_vault,
                    stake_mint,
                    caller_stake_token: stake_escrow,
                    reward_vault: self.reward_vault.clone(),
                    reward_mint: self.reward_mint.clone(),
                    reward_destination: self.reward_escrow.clone(),
                    token_program: self.token_program.clone(),
                    system_program,
                },
                signer,
            ),
            beneficiary,
            amount,
        )
    }

    pub fn withdraw(
        &self,
        stake_vault: AccountInfo<'info>,
        stake_mint: AccountInfo<'info>,
        stake_escrow: AccountInfo<'info>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_farm::cpi::withdraw(
            CpiContext::new_with_signer(
                self.farm_program.clone(),
                nebula_farm::cpi::accounts::Withdraw {
                    caller: self.booster_authority.clone(),
                    farm_config: self.farm_config.clone(),
                    authority: self.farm_authority.clone(),
                    pool: self.pool.clone(),
                    pool_delegate: Some(self.pool_delegate.clone()),
                    position: self.position.clone(),
                    stake_vault,
                    stake_mint,
                    caller_stake_token: stake_escrow,
                    reward_vault: self.reward_vault.clone(),
                    reward_mint: self.reward_mint.clone(),
                    reward_destination: self.reward_escrow.clone(),
                    token_program: self.token_program.clone(),
                },
                signer,
            ),
            beneficiary,
            amount,
        )
    }

    pub fn harvest(&self, beneficiary: Pubkey) -> Result<()> {
        let bump = [self.authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_farm::cpi::harvest(
            CpiContext::new_with_signer(
                self.farm_program.clone(),
                nebula_farm::cpi::accounts::Harvest {
                    caller: self.booster_authority.clone(),
                    farm_config: self.farm_config.clone(),
                    authority: self.farm_authority.clone(),
                    pool: self.pool.clone(),
                    pool_delegate: Some(self.pool_delegate.clone()),
                    position: self.position.clone(),
                    reward_vault: self.reward_vault.clone(),
                    reward_mint: self.reward_mint.clone(),
                    reward_destination: self.reward_escrow.clone(),
                    token_program: self.token_program.clone(),
                },
                signer,
            ),
            beneficiary,
        )
    }

    pub fn mint_extra_reward(
        &self,
        destination: AccountInfo<'info>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_farm::cpi::mint_extra_reward(
            CpiContext::new_with_signer(
                self.farm_program.clone(),
                nebula_farm::cpi::accounts::MintExtraReward {
                    caller: self.booster_authority.clone(),
                    farm_config: self.farm_config.clone(),
                    authority: self.farm_authority.clone(),
                    pool: self.pool.clone(),
                    pool_delegate: self.pool_delegate.clone(),
                    reward_mint: self.reward_mint.clone(),
                    destination,
                    token_program: self.token_program.clone(),
                },
                signer,
            ),
            beneficiary,
            amount,
        )
    }
}

/// Energy side of a boost: the consumer entry plus the staked NFT's record
/// and category accounts (empty PDAs when nothing is staked). `payer` funds
/// the NFT's own record when the first spend comes out of its category.
#[derive(Clone)]
pub struct EnergyLink<'info> {
    pub boost_config_program: AccountInfo<'info>,
    pub consumer_allowance: AccountInfo<'info>,
    pub energy_record: AccountInfo<'info>,
    pub nft_category: AccountInfo<'info>,
    pub category_energy: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> EnergyAccounts<'info> {
    pub fn link(
        &self,
        energy_record: AccountInfo<'info>,
        nft_category: AccountInfo<'info>,
        category_energy: AccountInfo<'info>,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> EnergyLink<'info> {
        EnergyLink {
            boost_config_program: self.boost_config_program.to_account_info(),
            consumer_allowance: self.consumer_allowance.to_account_info(),
            energy_record,
            nft_category,
            category_energy,
            payer,
            system_program,
        }
    }
}

impl<'info> EnergyLink<'info> {
    pub fn consume(
        &self,
        booster_authority: AccountInfo<'info>,
        authority_bump: u8,
        collection: Pubkey,
        nft_mint: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let bump = [authority_bump];
        let signer: &[&[&[u8]]] = &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]];
        nebula_boost_config::cpi::consume_energy(
            CpiContext::new_with_signer(
                self.boost_config_program.clone(),
                nebula_boost_config::cpi::accounts::ConsumeEnergy {
                    consumer: booster_authority,
                    payer: self.payer.clone(),
                    consumer_allowance: self.consumer_allowance.clone(),
                    energy_record: self.energy_record.clone(),
                    nft_category: self.nft_category.clone(),
                    category_energy: self.category_energy.clone(),
                    system_program: self.system_program.clone(),
                },
                signer,
            ),
            collection,
            nft_mint,
            amount,
        )
    }
}

//
// ──────────────────────────────────────────────────────────────────────────────
// Boosted payout
// ──────────────────────────────────────────────────────────────────────────────
//

/// Reward that landed in the escrow since `before`, after reloading it.
pub fn escrow_delta(escrow: &mut InterfaceAccount<TokenAccount>, before: u64) -> Result<u64> {
    escrow.reload()?;
    let delta = escrow
        .amount
        .checked_sub(before)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(delta)
}

/// Boost owed for `base` given the slot's staked NFT and its energy record.
/// No NFT or no record means no boost.
pub fn resolve_boost(
    staking_slot: &StakingSlot,
    record: Option<&EnergyRecord>,
    base: u64,
) -> Result<BoostOutcome> {
    match record {
        Some(record) if staking_slot.is_staked() => {
            compute_boost(base, record.current_energy, record.boost_bps)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))
        }
        _ => Ok(BoostOutcome::unboosted(base)),
    }
}

/// Pays a harvested `base` out to the user and tops it up with the NFT boost.
///
/// Flow:
/// 1) Forward `base` from the reward escrow to `user_reward_token`.
/// 2) Compute the boost from the staked NFT's energy, own record first,
///    else its category default.
/// 3) Spend `extra` energy, then have the farm mint `extra` to the user.
/// 4) Emit `Harvest`, also when everything is zero.
#[allow(clippy::too_many_arguments)]
pub fn pay_boosted<'info>(
    farm: &FarmLink<'info>,
    energy: &EnergyLink<'info>,
    staking_slot: &StakingSlot,
    user: Pubkey,
    stake_mint: Pubkey,
    user_reward_token: AccountInfo<'info>,
    reward_decimals: u8,
    base: u64,
) -> Result<BoostOutcome> {
    let bump = [farm.authority_bump];
    transfer_from_escrow_to_user(
        farm.booster_authority.clone(),
        farm.reward_escrow.clone(),
        user_reward_token.clone(),
        farm.reward_mint.clone(),
        farm.token_program.clone(),
        base,
        reward_decimals,
        &[&[BOOSTER_AUTH_SEED.as_bytes(), &bump]],
    )?;

    let record = if staking_slot.is_staked() {
        resolve_energy(
            &energy.energy_record,
            &energy.nft_category,
            &energy.category_energy,
            &staking_slot.collection,
            &staking_slot.nft_mint,
        )?
        .map(|resolved| resolved.record)
    } else {
        None
    };
    let outcome = resolve_boost(staking_slot, record.as_ref(), base)?;

    if outcome.extra > 0 {
        energy.consume(
            farm.booster_authority.clone(),
            farm.authority_bump,
            staking_slot.collection,
            staking_slot.nft_mint,
            outcome.extra,
        )?;
        farm.mint_extra_reward(user_reward_token, user, outcome.extra)?;
    }

    emit!(Harvest {
        user,
        stake_mint,
        base: outcome.base,
        extra: outcome.extra,
        total: outcome.total,
    });
    Ok(outcome)
}

/// Harvests the user's farm position, if it holds stake, and pays it out
/// boosted by the NFT currently in `staking_slot`.
#[allow(clippy::too_many_arguments)]
pub fn harvest_boosted<'info>(
    farm: &FarmLink<'info>,
    energy: &EnergyLink<'info>,
    reward_escrow: &mut InterfaceAccount<'info, TokenAccount>,
    staking_slot: &StakingSlot,
    user: Pubkey,
    stake_mint: Pubkey,
    user_reward_token: AccountInfo<'info>,
    reward_decimals: u8,
) -> Result<BoostOutcome> {
    let base = if farm.position_amount()? > 0 {
        let before = reward_escrow.amount;
        farm.harvest(user)?;
        escrow_delta(reward_escrow, before)?
    } else {
        0
    };
    pay_boosted(
        farm,
        energy,
        staking_slot,
        user,
        stake_mint,
        user_reward_token,
        reward_decimals,
        base,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current_energy: u64, boost_bps: u64) -> EnergyRecord {
        EnergyRecord {
            max_energy: current_energy,
            current_energy,
            boost_bps,
            ..Default::default()
        }
    }

    fn staked() -> StakingSlot {
        let mut slot = StakingSlot::default();
        slot.stage(Pubkey::new_unique(), Pubkey::new_unique(), 1);
        slot
    }

    #[test]
    fn staked_nft_with_energy_boosts() {
        let outcome = resolve_boost(&staked(), Some(&record(10, 1_000)), 100).unwrap();
        assert_eq!(outcome.extra, 10);
        assert_eq!(outcome.total, 110);
    }

    #[test]
    fn empty_slot_ignores_record() {
        let outcome =
            resolve_boost(&StakingSlot::default(), Some(&record(10, 1_000)), 100).unwrap();
        assert_eq!(outcome, BoostOutcome::unboosted(100));
    }

    #[test]
    fn unprovisioned_nft_is_not_boosted() {
        let outcome = resolve_boost(&staked(), None, 100).unwrap();
        assert_eq!(outcome, BoostOutcome::unboosted(100));
    }

    #[test]
    fn drained_nft_is_not_boosted() {
        let outcome = resolve_boost(&staked(), Some(&record(0, 5_000)), 100).unwrap();
        assert_eq!(outcome.extra, 0);
        assert_eq!(outcome.total, 100);
    }
}
