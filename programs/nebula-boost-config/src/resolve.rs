//! Read-only lookups other programs run against this program's accounts.
//!
//! The booster links this crate as a library and calls these directly on the
//! accounts it was handed; no CPI is involved. Callers are responsible for
//! checking that each account sits at the address derived below.

use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;
use anchor_lang::Owner;

/// Deserializes `info` when it is an initialized account of this program.
/// An empty or foreign account reads as `None`.
pub fn load_if_present<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() || *info.owner != T::owner() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut &data[..])?;
    Ok(Some(account))
}

pub fn is_stake_token_allowed(info: &AccountInfo) -> Result<bool> {
    Ok(load_if_present::<StakeTokenAllowance>(info)?.is_some_and(|a| a.allowed))
}

pub fn is_consumer_allowed(info: &AccountInfo) -> Result<bool> {
    Ok(load_if_present::<EnergyConsumer>(info)?.is_some_and(|c| c.allowed))
}

/// Two-step NFT allowance: an exact override that allows wins, otherwise
/// the category-level entry decides.
pub fn is_nft_allowed(exact: Option<&NftAllowance>, category: Option<&CategoryAllowance>) -> bool {
    if exact.is_some_and(|a| a.allowed) {
        return true;
    }
    category.is_some_and(|c| c.allowed)
}

/// Energy that applies to an NFT, and whether it still lives only in the
/// category template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEnergy {
    pub record: EnergyRecord,
    pub from_category: bool,
}

/// Two-step energy lookup: the NFT's own record when provisioned, else a
/// full tank from the default of the NFT's category.
///
/// `energy_record` must already sit at `energy_record_address`; the category
/// accounts are checked here since their address depends on stored state.
/// A category entry recorded for another collection is ignored.
pub fn resolve_energy(
    energy_record: &AccountInfo,
    nft_category: &AccountInfo,
    category_energy: &AccountInfo,
    collection: &Pubkey,
    nft_mint: &Pubkey,
) -> Result<Option<ResolvedEnergy>> {
    if let Some(record) = load_if_present::<EnergyRecord>(energy_record)? {
        return Ok(Some(ResolvedEnergy {
            record,
            from_category: false,
        }));
    }

    let (expected, _) = nft_category_address(nft_mint);
    require_keys_eq!(nft_category.key(), expected, ErrorCode::InvalidCategoryAccount);
    let Some(category) =
        load_if_present::<NftCategory>(nft_category)?.filter(|c| c.collection == *collection)
    else {
        return Ok(None);
    };

    let (expected, _) = category_energy_address(collection, category.category_id);
    require_keys_eq!(category_energy.key(), expected, ErrorCode::InvalidCategoryAccount);
    Ok(load_if_present::<CategoryEnergy>(category_energy)?.map(|template| ResolvedEnergy {
        record: template.record_for(*nft_mint),
        from_category: true,
    }))
}

pub fn stake_token_allowance_address(stake_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_TOKEN_SEED.as_bytes(), stake_mint.as_ref()], &crate::ID)
}

pub fn nft_category_address(nft_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_CATEGORY_SEED.as_bytes(), nft_mint.as_ref()], &crate::ID)
}

pub fn category_allowance_address(
    stake_mint: &Pubkey,
    collection: &Pubkey,
    category_id: u32,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CATEGORY_ALLOWANCE_SEED.as_bytes(),
            stake_mint.as_ref(),
            collection.as_ref(),
            &category_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}

pub fn energy_record_address(collection: &Pubkey, nft_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ENERGY_SEED.as_bytes(), collection.as_ref(), nft_mint.as_ref()],
        &crate::ID,
    )
}

pub fn category_energy_address(collection: &Pubkey, category_id: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CATEGORY_ENERGY_SEED.as_bytes(),
            collection.as_ref(),
            &category_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn exact(allowed: bool) -> NftAllowance {
        NftAllowance {
            allowed,
            ..Default::default()
        }
    }

    fn category(allowed: bool) -> CategoryAllowance {
        CategoryAllowance {
            allowed,
            ..Default::default()
        }
    }

    #[test]
    fn exact_override_wins() {
        assert!(is_nft_allowed(Some(&exact(true)), None));
        assert!(is_nft_allowed(Some(&exact(true)), Some(&category(false))));
    }

    #[test]
    fn falls_back_to_category() {
        assert!(is_nft_allowed(None, Some(&category(true))));
        assert!(is_nft_allowed(Some(&exact(false)), Some(&category(true))));
        assert!(!is_nft_allowed(Some(&exact(false)), Some(&category(false))));
        assert!(!is_nft_allowed(None, None));
    }

    quickcheck! {
        fn allowance_is_exact_or_category(e: Option<bool>, c: Option<bool>) -> bool {
            let e_acc = e.map(exact);
            let c_acc = c.map(category);
            is_nft_allowed(e_acc.as_ref(), c_acc.as_ref())
                == (e == Some(true) || c == Some(true))
        }
    }

    #[test]
    fn category_addresses_differ_by_id() {
        let stake = Pubkey::new_unique();
        let collection = Pubkey::new_unique();
        assert_ne!(
            category_allowance_address(&stake, &collection, 1).0,
            category_allowance_address(&stake, &collection, 2).0
        );
    }

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
                owner: anchor_lang::system_program::ID,
                lamports: 0,
                data: vec![],
            }
        }

        fn with<T: AccountSerialize>(key: Pubkey, owner: Pubkey, state: &T) -> Self {
            let mut data = Vec::new();
            state.try_serialize(&mut data).unwrap();
            Raw {
                key,
                owner,
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

    struct Nft {
        collection: Pubkey,
        mint: Pubkey,
        record: Raw,
        category: Raw,
        category_energy: Raw,
    }

    impl Nft {
        fn new() -> Self {
            let collection = Pubkey::new_unique();
            let mint = Pubkey::new_unique();
            Nft {
                record: Raw::empty(energy_record_address(&collection, &mint).0),
                category: Raw::empty(nft_category_address(&mint).0),
                category_energy: Raw::empty(category_energy_address(&collection, 1).0),
                collection,
                mint,
            }
        }

        fn own_record(mut self, max_energy: u64, boost_bps: u64) -> Self {
            let mut record = EnergyRecord {
                collection: self.collection,
                nft_mint: self.mint,
                ..Default::default()
            };
            record.provision(max_energy, boost_bps, 3);
            self.record = Raw::with(self.record.key, crate::ID, &record);
            self
        }

        fn in_category(mut self, category_id: u32, max_energy: u64, boost_bps: u64) -> Self {
            let category = NftCategory {
                collection: self.collection,
                nft_mint: self.mint,
                category_id,
                ..Default::default()
            };
            self.category = Raw::with(self.category.key, crate::ID, &category);
            let mut template = CategoryEnergy {
                collection: self.collection,
                category_id,
                ..Default::default()
            };
            template.provision(max_energy, boost_bps, 2);
            let key = category_energy_address(&self.collection, category_id).0;
            self.category_energy = Raw::with(key, crate::ID, &template);
            self
        }

        fn resolve(&mut self) -> Result<Option<ResolvedEnergy>> {
            resolve_energy(
                &self.record.info(),
                &self.category.info(),
                &self.category_energy.info(),
                &self.collection,
                &self.mint,
            )
        }
    }

    #[test]
    fn unprovisioned_nft_without_category_has_no_energy() {
        assert_eq!(Nft::new().resolve().unwrap(), None);
    }

    #[test]
    fn category_default_applies_without_own_record() {
        let resolved = Nft::new().in_category(1, 5, 10).resolve().unwrap().unwrap();
        assert!(resolved.from_category);
        assert_eq!(resolved.record.max_energy, 5);
        assert_eq!(resolved.record.current_energy, 5);
        assert_eq!(resolved.record.boost_bps, 10);
    }

    #[test]
    fn own_record_takes_precedence_over_category() {
        let resolved = Nft::new()
            .in_category(1, 5, 10)
            .own_record(9, 12)
            .resolve()
            .unwrap()
            .unwrap();
        assert!(!resolved.from_category);
        assert_eq!(resolved.record.max_energy, 9);
        assert_eq!(resolved.record.boost_bps, 12);
    }

    #[test]
    fn category_of_another_collection_is_ignored() {
        let mut nft = Nft::new().in_category(1, 5, 10);
        nft.collection = Pubkey::new_unique();
        assert_eq!(nft.resolve().unwrap(), None);
    }

    #[test]
    fn category_without_energy_default_has_no_energy() {
        let mut nft = Nft::new().in_category(1, 5, 10);
        nft.category_energy = Raw::empty(nft.category_energy.key);
        assert_eq!(nft.resolve().unwrap(), None);
    }

    #[test]
    fn wrong_category_energy_account_is_rejected() {
        let mut nft = Nft::new().in_category(4, 5, 10);
        nft.category_energy.key = category_energy_address(&nft.collection, 5).0;
        let err = nft.resolve().unwrap_err();
        assert_eq!(err, ErrorCode::InvalidCategoryAccount.into());
    }

    #[test]
    fn foreign_owned_record_falls_through_to_category() {
        let mut nft = Nft::new().in_category(1, 5, 10);
        let record = EnergyRecord {
            max_energy: 100,
            current_energy: 100,
            ..Default::default()
        };
        nft.record = Raw::with(nft.record.key, Pubkey::new_unique(), &record);
        let resolved = nft.resolve().unwrap().unwrap();
        assert!(resolved.from_category);
        assert_eq!(resolved.record.max_energy, 5);
    }
}
