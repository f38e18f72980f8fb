pub mod account;
pub use account::*;

pub mod pools;
pub use pools::*;

pub mod reward_vault;
pub use reward_vault::*;

pub mod token;
pub use token::*;
