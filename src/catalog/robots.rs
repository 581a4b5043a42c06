use super::types::RobotSpec;
use crate::error::{Result, RoboError};

/// Read-only comparison table of robot specifications.
#[derive(Debug, Clone, Default)]
pub struct RobotSpecCatalog {
    specs: Vec<RobotSpec>,
}

impl RobotSpecCatalog {
    pub fn new(specs: Vec<RobotSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[RobotSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn fastest(&self) -> Result<&RobotSpec> {
        self.first_max("fastest", |a, b| a.max_speed > b.max_speed)
    }

    pub fn longest_battery(&self) -> Result<&RobotSpec> {
        self.first_max("longest_battery", |a, b| a.battery_life > b.battery_life)
    }

    pub fn most_articulated(&self) -> Result<&RobotSpec> {
        self.first_max("most_articulated", |a, b| a.dof > b.dof)
    }

    /// Linear scan. A later record only replaces the current best when
    /// `beats` holds strictly, so ties keep the earliest record.
    fn first_max<F>(&self, query: &'static str, beats: F) -> Result<&RobotSpec>
    where
        F: Fn(&RobotSpec, &RobotSpec) -> bool,
    {
        let mut iter = self.specs.iter();
        let mut best = iter.next().ok_or(RoboError::EmptyCatalog { query })?;
        for spec in iter {
            if beats(spec, best) {
                best = spec;
            }
        }
        Ok(best)
    }
}

pub fn power_to_weight_ratio(spec: &RobotSpec) -> f64 {
    spec.power_to_weight_ratio()
}

/// Two-decimal rendering for display.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

pub fn example_robot_specs() -> Vec<RobotSpec> {
    let spec = |name: &str, height: f64, weight: f64, dof: u32, max_speed: f64, battery_life: f64, payload: f64| RobotSpec {
        name: name.to_string(),
        height,
        weight,
        dof,
        max_speed,
        battery_life,
        payload,
    };
    vec![
        spec("Tesla Optimus", 1.73, 57.0, 28, 0.8, 8.0, 20.0),
        spec("Boston Dynamics Atlas", 1.5, 89.0, 28, 1.5, 1.0, 11.0),
        spec("Figure 01", 1.7, 60.0, 30, 1.2, 5.0, 20.0),
        spec("Unitree H1", 1.8, 47.0, 25, 1.5, 2.0, 15.0),
    ]
}
