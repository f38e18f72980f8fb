use crate::error::ErrorCode;
use crate::resolve::{is_consumer_allowed, resolve_energy};
use crate::states::*;
use crate::utils::create_owned_pda;
use anchor_lang::prelude::*;

/// Spends energy of one NFT. Only allow-listed consumers may call it.
///
/// `energy_record` is unchecked so an NFT that was never provisioned falls
/// back to its category default, and fails with `NoEnergyRecord` when that
/// is missing too. The first spend out of a category default writes the
/// NFT's own record, paid by `payer`.
#[derive(Accounts)]
#[instruction(collection: Pubkey, nft_mint: Pubkey)]
pub struct ConsumeEnergy<'info> {
    pub consumer: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: address derived from `consumer`; read through `resolve`.
    #[account(
        seeds = [ENERGY_CONSUMER_SEED.as_bytes(), consumer.key().as_ref()],
        bump,
    )]
    pub consumer_allowance: UncheckedAccount<'info>,

    /// CHECK: address derived from the NFT; ownership and layout checked in the handler.
    #[account(
        mut,
        seeds = [ENERGY_SEED.as_bytes(), collection.as_ref(), nft_mint.as_ref()],
        bump,
    )]
    pub energy_record: UncheckedAccount<'info>,

    /// CHECK: category entry of the NFT; address checked by `resolve_energy`.
    pub nft_category: UncheckedAccount<'info>,

    /// CHECK: category default; address checked by `resolve_energy`.
    pub category_energy: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn consume_energy(
    ctx: Context<ConsumeEnergy>,
    collection: Pubkey,
    nft_mint: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(
        is_consumer_allowed(&ctx.accounts.consumer_allowance)?,
        ErrorCode::OnlyEligibleCaller
    );

    let info = ctx.accounts.energy_record.to_account_info();
    let resolved = resolve_energy(
        &info,
        &ctx.accounts.nft_category,
        &ctx.accounts.category_energy,
        &collection,
        &nft_mint,
    )?
    .ok_or(ErrorCode::NoEnergyRecord)?;

    let mut record = resolved.record;
    record.consume(amount)?;

    if resolved.from_category {
        let bump = ctx.bumps.energy_record;
        create_owned_pda(
            ctx.accounts.payer.to_account_info(),
            info.clone(),
            ctx.accounts.system_program.to_account_info(),
            EnergyRecord::LEN,
            &[
                ENERGY_SEED.as_bytes(),
                collection.as_ref(),
                nft_mint.as_ref(),
                &[bump],
            ],
        )?;
        record.bump = bump;
    }

    let mut data = info.try_borrow_mut_data()?;
    record.try_serialize(&mut &mut data[..])?;

    emit!(EnergyConsumed {
        consumer: ctx.accounts.consumer.key(),
        collection,
        nft_mint,
        amount,
        current_energy: record.current_energy,
    });
    Ok(())
}
