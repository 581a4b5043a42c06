use tracing::debug;

use super::types::{Category, Cost, Difficulty, FilterCriteria, ResourceRecord};

/// Append-only record store.
pub trait ResourceStore {
    fn add_resource(&mut self, record: ResourceRecord);
    /// Owned, ordered results. Later inserts never alter a returned Vec.
    fn search(&self, criteria: &FilterCriteria) -> Vec<ResourceRecord>;
    fn all(&self) -> &[ResourceRecord];
}

#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    records: Vec<ResourceRecord>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ResourceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResourceStore for ResourceCatalog {
    fn add_resource(&mut self, record: ResourceRecord) {
        // No dedup.
        self.records.push(record);
    }

    fn search(&self, criteria: &FilterCriteria) -> Vec<ResourceRecord> {
        let results: Vec<ResourceRecord> = self
            .records
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        debug!(?criteria, hits = results.len(), "resource search");
        results
    }

    fn all(&self) -> &[ResourceRecord] {
        &self.records
    }
}

pub fn example_resources() -> Vec<ResourceRecord> {
    use Category::*;
    use Cost::*;
    use Difficulty::*;
    vec![
        ResourceRecord::new("ROS 2", Framework, "https://ros.org", Intermediate, Free),
        ResourceRecord::new("Gazebo", Simulator, "https://gazebosim.org", Intermediate, Free),
        ResourceRecord::new("NVIDIA Isaac Sim", Simulator, "https://developer.nvidia.com/isaac-sim", Advanced, Free),
        ResourceRecord::new("TurtleBot 4", Hardware, "https://clearpathrobotics.com/turtlebot-4", Beginner, Expensive),
        ResourceRecord::new("Modern Robotics (book)", Course, "http://modernrobotics.org", Intermediate, Free),
        ResourceRecord::new("PyBullet", Simulator, "https://pybullet.org", Beginner, Free),
    ]
}

/// Searches shown by the discovery walkthrough.
pub fn example_searches() -> Vec<(&'static str, FilterCriteria)> {
    vec![
        ("Free beginner resources", FilterCriteria::any().difficulty(Difficulty::Beginner).cost(Cost::Free)),
        ("All simulators", FilterCriteria::any().category(Category::Simulator)),
        ("Intermediate-level resources", FilterCriteria::any().difficulty(Difficulty::Intermediate)),
    ]
}
