use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Booster Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the booster configuration account.
pub const BOOSTER_CONFIG_SEED: &str = "booster_config";

#[account]
#[derive(Default, Debug)]
pub struct BoosterConfig {
    /// PDA bump for this account.
    pub bump: u8,

    /// Bump of the booster authority PDA (`BOOSTER_AUTH_SEED`).
    pub authority_bump: u8,

    pub admin: Pubkey,

    /// Reward mint of the farm; boosts are paid in it.
    pub reward_mint: Pubkey,
}

impl BoosterConfig {
    pub const LEN: usize = 8 + 1 + 1 + 32 * 2;
}
