pub mod shared;
pub use shared::*;

pub mod initialise_booster;
pub use initialise_booster::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod stake_nft;
pub use stake_nft::*;

pub mod unstake_nft;
pub use unstake_nft::*;

pub mod harvest;
pub use harvest::*;

pub mod harvest_many;
pub use harvest_many::*;

pub mod emergency_withdraw;
pub use emergency_withdraw::*;
