pub mod error;
pub mod config;
pub mod runner;
pub mod kinematics;
pub mod avoidance;
pub mod catalog;
pub mod knowledge;
pub mod telemetry;
pub mod outputs;

pub use error::{Result, RoboError};
pub use config::DemoConfig;
pub use runner::TaskRunner;
