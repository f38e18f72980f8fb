pub mod allowance;
pub use allowance::*;

pub mod boost_config;
pub use boost_config::*;

pub mod category_energy;
pub use category_energy::*;

pub mod energy_record;
pub use energy_record::*;

pub mod events;
pub use events::*;
