use tracing::debug;

use super::types::{Action, AvoidanceConfig, SensorReadings, VelocityCommand};
use crate::error::Result;

/// Fraction of max speed kept while turning away from an obstacle.
pub const TURN_SPEED_FACTOR: f64 = 0.3;
/// rad/s
pub const TURN_RATE: f64 = 0.5;

/// Reactive three-branch policy. Pure: holds only its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvoidancePolicy {
    config: AvoidanceConfig,
}

impl AvoidancePolicy {
    pub fn new(config: AvoidanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> AvoidanceConfig {
        self.config
    }

    /// Precedence: clear front, then more clearance on the left, then right.
    /// `left == right` turns right.
    pub fn compute_velocity(&self, front: f64, left: f64, right: f64) -> VelocityCommand {
        let max_speed = self.config.max_speed;
        let cmd = if front > self.config.safe_distance {
            VelocityCommand { linear: max_speed, angular: 0.0 }
        } else if left > right {
            VelocityCommand { linear: max_speed * TURN_SPEED_FACTOR, angular: TURN_RATE }
        } else {
            VelocityCommand { linear: max_speed * TURN_SPEED_FACTOR, angular: -TURN_RATE }
        };
        debug!(front, left, right, linear = cmd.linear, angular = cmd.angular, "velocity decision");
        cmd
    }

    pub fn command_for(&self, readings: SensorReadings) -> VelocityCommand {
        self.compute_velocity(readings.front, readings.left, readings.right)
    }

    /// Classifies any command, including ones this policy never produced.
    pub fn describe_action(&self, cmd: VelocityCommand) -> Action {
        if cmd.linear == self.config.max_speed && cmd.angular == 0.0 {
            Action::FullSpeedForward
        } else if cmd.angular > 0.0 {
            Action::TurningLeft
        } else if cmd.angular < 0.0 {
            Action::TurningRight
        } else {
            Action::Stopped
        }
    }
}

/// Policy plus the latest sensor snapshot.
#[derive(Debug, Clone)]
pub struct ObstacleAvoidanceController {
    policy: AvoidancePolicy,
    sensors: SensorReadings,
}

impl ObstacleAvoidanceController {
    pub fn new(config: AvoidanceConfig) -> Result<Self> {
        Ok(Self {
            policy: AvoidancePolicy::new(config)?,
            sensors: SensorReadings::default(),
        })
    }

    pub fn policy(&self) -> &AvoidancePolicy {
        &self.policy
    }

    pub fn sensors(&self) -> SensorReadings {
        self.sensors
    }

    /// Overwrites all three readings.
    pub fn update_sensors(&mut self, front: f64, left: f64, right: f64) {
        self.sensors = SensorReadings::new(front, left, right);
    }

    pub fn compute_velocity(&self) -> VelocityCommand {
        self.policy.command_for(self.sensors)
    }

    pub fn describe_action(&self, cmd: VelocityCommand) -> Action {
        self.policy.describe_action(cmd)
    }
}
