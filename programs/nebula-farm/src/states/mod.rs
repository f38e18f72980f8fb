pub mod events;
pub use events::*;

pub mod farm_config;
pub use farm_config::*;

pub mod pool;
pub use pool::*;

pub mod pool_delegate;
pub use pool_delegate::*;

pub mod user_position;
pub use user_position::*;
