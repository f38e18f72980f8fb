pub mod initialise_config;
pub use initialise_config::*;

pub mod allowances;
pub use allowances::*;

pub mod set_nft_energy;
pub use set_nft_energy::*;

pub mod consume_energy;
pub use consume_energy::*;
