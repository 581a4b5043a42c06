use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoboError;

/// Approximate published specification of a humanoid robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub name: String,
    /// meters
    pub height: f64,
    /// kg
    pub weight: f64,
    pub dof: u32,
    /// m/s
    pub max_speed: f64,
    /// hours
    pub battery_life: f64,
    /// kg
    pub payload: f64,
}

impl RobotSpec {
    /// Payload over weight, full precision.
    pub fn power_to_weight_ratio(&self) -> f64 {
        self.payload / self.weight
    }
}

// Closed vocabularies for resource records. Parsing goes through FromStr so
// bad strings surface as `RoboError::InvalidEnum`.
macro_rules! closed_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RoboError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(RoboError::InvalidEnum { field: $field, value: other.to_string() }),
                }
            }
        }
    };
}

closed_enum!(Category, "category", {
    Framework => "framework",
    Simulator => "simulator",
    Hardware => "hardware",
    Course => "course",
    Publication => "publication",
});

closed_enum!(Difficulty, "difficulty", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

closed_enum!(Cost, "cost", {
    Free => "free",
    Paid => "paid",
    Expensive => "expensive",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub category: Category,
    pub url: String,
    pub difficulty: Difficulty,
    pub cost: Cost,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        url: impl Into<String>,
        difficulty: Difficulty,
        cost: Cost,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            url: url.into(),
            difficulty,
            cost,
        }
    }

    /// Builds a record from raw strings, validating the three tags.
    pub fn parse(name: &str, category: &str, url: &str, difficulty: &str, cost: &str) -> Result<Self, RoboError> {
        Ok(Self::new(name, category.parse()?, url, difficulty.parse()?, cost.parse()?))
    }
}

/// Conjunctive equality filter. `None` fields are unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub cost: Option<Cost>,
}

impl FilterCriteria {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.difficulty.is_none() && self.cost.is_none()
    }

    pub fn matches(&self, record: &ResourceRecord) -> bool {
        self.category.map_or(true, |c| record.category == c)
            && self.difficulty.map_or(true, |d| record.difficulty == d)
            && self.cost.map_or(true, |k| record.cost == k)
    }
}
