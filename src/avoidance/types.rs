use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Result};

/// Range readings in meters. `f64::INFINITY` means nothing detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub front: f64,
    pub left: f64,
    pub right: f64,
}

impl SensorReadings {
    pub fn new(front: f64, left: f64, right: f64) -> Self {
        Self { front, left, right }
    }
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityCommand {
    /// m/s
    pub linear: f64,
    /// rad/s, positive turns left.
    pub angular: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvoidanceConfig {
    /// meters
    pub safe_distance: f64,
    /// m/s
    pub max_speed: f64,
}

impl AvoidanceConfig {
    pub fn new(safe_distance: f64, max_speed: f64) -> Result<Self> {
        Ok(Self {
            safe_distance: ensure_positive("safe_distance", safe_distance)?,
            max_speed: ensure_positive("max_speed", max_speed)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.safe_distance, self.max_speed).map(|_| ())
    }
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            safe_distance: 0.5,
            max_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    FullSpeedForward,
    TurningLeft,
    TurningRight,
    Stopped,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::FullSpeedForward => "full-speed forward",
            Action::TurningLeft => "turning left",
            Action::TurningRight => "turning right",
            Action::Stopped => "stopped",
        }
    }

    /// Sentence used in the simulation printout.
    pub fn description(&self) -> &'static str {
        match self {
            Action::FullSpeedForward => "Moving forward at full speed",
            Action::TurningLeft => "Turning left to avoid obstacle",
            Action::TurningRight => "Turning right to avoid obstacle",
            Action::Stopped => "Stopped",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub readings: SensorReadings,
}

impl Scenario {
    pub fn new(name: impl Into<String>, front: f64, left: f64, right: f64) -> Self {
        Self {
            name: name.into(),
            readings: SensorReadings::new(front, left, right),
        }
    }
}

pub fn example_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Clear path", 5.0, 3.0, 3.0),
        Scenario::new("Obstacle ahead, left clear", 0.3, 2.0, 0.8),
        Scenario::new("Obstacle ahead, right clear", 0.2, 0.5, 2.5),
        Scenario::new("Very close obstacle", 0.1, 0.4, 0.4),
    ]
}
