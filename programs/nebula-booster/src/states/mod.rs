pub mod booster_config;
pub use booster_config::*;

pub mod events;
pub use events::*;

pub mod staking_slot;
pub use staking_slot::*;
