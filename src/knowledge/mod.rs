pub mod types;
pub mod base;

pub use types::*;
pub use base::*;
