use crate::error::ErrorCode;
use crate::resolve::energy_record_address;
use crate::states::*;
use crate::utils::create_owned_pda;
use anchor_lang::prelude::*;

/// Provisions (or re-provisions) the energy of one NFT.
#[derive(Accounts)]
#[instruction(collection: Pubkey, nft_mint: Pubkey)]
pub struct SetNftEnergy<'info> {
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
        seeds = [ENERGY_SEED.as_bytes(), collection.as_ref(), nft_mint.as_ref()],
        bump,
        payer = owner,
        space = EnergyRecord::LEN
    )]
    pub energy_record: Account<'info, EnergyRecord>,

    pub system_program: Program<'info, System>,
}

pub fn set_nft_energy(
    ctx: Context<SetNftEnergy>,
    collection: Pubkey,
    nft_mint: Pubkey,
    max_energy: u64,
    boost_bps: u64,
) -> Result<()> {
    let record = &mut ctx.accounts.energy_record;
    record.bump = ctx.bumps.energy_record;
    record.collection = collection;
    record.nft_mint = nft_mint;
    record.provision(max_energy, boost_bps, Clock::get()?.slot);

    emit!(NftEnergySet {
        collection,
        nft_mint,
        max_energy,
        boost_bps,
    });
    Ok(())
}

/// One record of a `set_nft_energy_batch` call.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct EnergyEntry {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub max_energy: u64,
    pub boost_bps: u64,
}

/// Provisions many NFTs at once.
///
/// The energy record PDA of `entries[i]` is passed writable as
/// `remaining_accounts[i]`; missing records are created here.
#[derive(Accounts)]
pub struct SetNftEnergyBatch<'info> {
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

    pub system_program: Program<'info, System>,
}

pub fn set_nft_energy_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetNftEnergyBatch<'info>>,
    entries: Vec<EnergyEntry>,
) -> Result<()> {
    require!(!entries.is_empty(), ErrorCode::EmptyBatch);
    require_eq!(
        entries.len(),
        ctx.remaining_accounts.len(),
        ErrorCode::BatchLengthMismatch
    );

    let slot = Clock::get()?.slot;
    for (entry, info) in entries.iter().zip(ctx.remaining_accounts.iter()) {
        let (expected, bump) = energy_record_address(&entry.collection, &entry.nft_mint);
        require_keys_eq!(info.key(), expected, ErrorCode::InvalidEnergyAccount);

        let mut record = if info.data_is_empty() {
            let seeds: &[&[u8]] = &[
                ENERGY_SEED.as_bytes(),
                entry.collection.as_ref(),
                entry.nft_mint.as_ref(),
                &[bump],
            ];
            create_owned_pda(
                ctx.accounts.owner.to_account_info(),
                info.clone(),
                ctx.accounts.system_program.to_account_info(),
                EnergyRecord::LEN,
                seeds,
            )?;
            EnergyRecord {
                bump,
                collection: entry.collection,
                nft_mint: entry.nft_mint,
                ..Default::default()
            }
        } else {
            require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidEnergyAccount);
            let data = info.try_borrow_data()?;
            let existing = EnergyRecord::try_deserialize(&mut &data[..])?;
            existing
        };

        record.provision(entry.max_energy, entry.boost_bps, slot);
        let mut data = info.try_borrow_mut_data()?;
        record.try_serialize(&mut &mut data[..])?;

        emit!(NftEnergySet {
            collection: entry.collection,
            nft_mint: entry.nft_mint,
            max_energy: entry.max_energy,
            boost_bps: entry.boost_bps,
        });
    }
    Ok(())
}

/// Provisions the default energy of one category of a collection.
#[derive(Accounts)]
#[instruction(collection: Pubkey, category_id: u32)]
pub struct SetCategoryEnergy<'info> {
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
        seeds = [
            CATEGORY_ENERGY_SEED.as_bytes(),
            collection.as_ref(),
            &category_id.to_le_bytes(),
        ],
        bump,
        payer = owner,
        space = CategoryEnergy::LEN
    )]
    pub category_energy: Account<'info, CategoryEnergy>,

    pub system_program: Program<'info, System>,
}

pub fn set_category_energy(
    ctx: Context<SetCategoryEnergy>,
    collection: Pubkey,
    category_id: u32,
    max_energy: u64,
    boost_bps: u64,
) -> Result<()> {
    let template = &mut ctx.accounts.category_energy;
    template.bump = ctx.bumps.category_energy;
    template.collection = collection;
    template.category_id = category_id;
    template.provision(max_energy, boost_bps, Clock::get()?.slot);

    emit!(CategoryEnergySet {
        collection,
        category_id,
        max_energy,
        boost_bps,
    });
    Ok(())
}
