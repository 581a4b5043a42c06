use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::avoidance::AvoidanceConfig;
use crate::catalog::{example_resources, example_robot_specs, ResourceRecord, RobotSpec};
use crate::error::Result;
use crate::kinematics::ArmConfig;
use crate::knowledge::{default_topics, Topic};
use crate::runner::{example_tasks, Task};

/// Everything the demo binary needs. Missing sections fall back to the
/// built-in example data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub arm: ArmConfig,
    pub avoidance: AvoidanceConfig,
    pub tasks: Vec<Task>,
    pub robots: Vec<RobotSpec>,
    pub resources: Vec<ResourceRecord>,
    pub topics: Vec<Topic>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            arm: ArmConfig::default(),
            avoidance: AvoidanceConfig::default(),
            tasks: example_tasks(),
            robots: example_robot_specs(),
            resources: example_resources(),
            topics: default_topics(),
        }
    }
}

impl DemoConfig {
    /// Reads a JSON config. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using built-in examples");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Err(e) = self.arm.validate().and_then(|_| self.avoidance.validate()) {
            warn!("Rejected config: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
