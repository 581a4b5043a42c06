use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_DURATION_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

/// A unit of simulated work. Consumed exactly once by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub name: String,
    /// Simulated execution time. No real work is performed.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::new(name)
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerState {
    Idle,
    Executing,
}

/// Point-in-time view returned by `TaskRunner::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerStatus {
    pub state: RunnerState,
    pub queue_length: usize,
}

impl Default for RunnerStatus {
    fn default() -> Self {
        Self {
            state: RunnerState::Idle,
            queue_length: 0,
        }
    }
}

/// The three tasks of the pick-and-place walkthrough.
pub fn example_tasks() -> Vec<Task> {
    vec![
        Task::with_duration("Navigate to workstation", 2000),
        Task::with_duration("Pick up object", 1500),
        Task::with_duration("Place object in bin", 1500),
    ]
}
