pub mod arm;

pub use arm::*;
