pub mod initialise_farm;
pub use initialise_farm::*;

pub mod update_farm_config;
pub use update_farm_config::*;

pub mod add_pool;
pub use add_pool::*;

pub mod set_pool;
pub use set_pool::*;

pub mod settle_pool;
pub use settle_pool::*;

pub mod delegation;
pub use delegation::*;

pub mod fund_reward_vault;
pub use fund_reward_vault::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod harvest;
pub use harvest::*;

pub mod emergency_withdraw;
pub use emergency_withdraw::*;

pub mod mint_extra_reward;
pub use mint_extra_reward::*;

pub mod pending_reward;
pub use pending_reward::*;
