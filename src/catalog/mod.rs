pub mod types;
pub mod robots;
pub mod resources;

pub use types::*;
pub use robots::*;
pub use resources::*;
