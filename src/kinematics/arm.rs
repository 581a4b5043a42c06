use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, Result};

/// Link geometry of a two-link planar arm. First joint sits at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    pub link1_length: f64,
    pub link2_length: f64,
}

impl ArmConfig {
    pub fn new(link1_length: f64, link2_length: f64) -> Result<Self> {
        Ok(Self {
            link1_length: ensure_positive("link1_length", link1_length)?,
            link2_length: ensure_positive("link2_length", link2_length)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.link1_length, self.link2_length).map(|_| ())
    }
}

impl Default for ArmConfig {
    /// 1.0m and 0.8m links.
    fn default() -> Self {
        Self {
            link1_length: 1.0,
            link2_length: 0.8,
        }
    }
}

/// Joint angles in radians, right-hand convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    pub fn degrees(&self) -> (f64, f64) {
        (self.theta1.to_degrees(), self.theta2.to_degrees())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndEffectorPosition {
    pub x: f64,
    pub y: f64,
}

/// Planar forward kinematics over raw link lengths.
///
/// Angles are not normalized. Zero-length links are accepted and collapse
/// onto the origin.
pub fn forward_kinematics(l1: f64, l2: f64, theta1: f64, theta2: f64) -> EndEffectorPosition {
    let outer = theta1 + theta2;
    EndEffectorPosition {
        x: l1 * theta1.cos() + l2 * outer.cos(),
        y: l1 * theta1.sin() + l2 * outer.sin(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLinkArm {
    config: ArmConfig,
}

impl TwoLinkArm {
    pub fn new(config: ArmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> ArmConfig {
        self.config
    }

    pub fn forward_kinematics(&self, theta1: f64, theta2: f64) -> EndEffectorPosition {
        let pos = forward_kinematics(self.config.link1_length, self.config.link2_length, theta1, theta2);
        debug!(theta1, theta2, x = pos.x, y = pos.y, "forward kinematics");
        pos
    }

    pub fn solve(&self, angles: JointAngles) -> EndEffectorPosition {
        self.forward_kinematics(angles.theta1, angles.theta2)
    }

    /// Maximum distance from the base the end effector can reach.
    pub fn reach(&self) -> f64 {
        self.config.link1_length + self.config.link2_length
    }
}

/// Joint configurations used by the arm walkthrough.
pub fn example_configurations() -> Vec<JointAngles> {
    use std::f64::consts::PI;
    vec![
        JointAngles::new(0.0, 0.0),
        JointAngles::new(PI / 4.0, PI / 4.0),
        JointAngles::new(PI / 2.0, -PI / 4.0),
    ]
}
