use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Boost Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the boost configuration account.
pub const BOOST_CONFIG_SEED: &str = "boost_config";

/// Holds the admin allowed to edit allow-lists and provision energy.
#[account]
#[derive(Default, Debug)]
pub struct BoostConfig {
    pub bump: u8,
    pub admin: Pubkey,
}

impl BoostConfig {
    pub const LEN: usize = 8 + 1 + 32;

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        *key == self.admin || *key == crate::admin::id()
    }
}
