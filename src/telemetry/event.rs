use serde::{Deserialize, Serialize};
use crate::runner::types::TaskId;

/// Lifecycle events emitted by the task runner, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerEvent {
    TaskAdded { id: TaskId, name: String },
    TaskStarted { id: TaskId, name: String },
    TaskCompleted { id: TaskId, name: String },
    /// Queue drained; the runner is back to Idle.
    Idle,
}

impl RunnerEvent {
    pub fn task_name(&self) -> Option<&str> {
        match self {
            RunnerEvent::TaskAdded { name, .. }
            | RunnerEvent::TaskStarted { name, .. }
            | RunnerEvent::TaskCompleted { name, .. } => Some(name),
            RunnerEvent::Idle => None,
        }
    }
}
