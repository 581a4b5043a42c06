pub mod types;
pub mod queue;

pub use types::*;
pub use queue::TaskRunner;
