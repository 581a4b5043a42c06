use std::collections::VecDeque;
use super::event::RunnerEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerMetrics {
    pub added: u64,
    pub started: u64,
    pub completed: u64,
    pub idle_transitions: u64,
}

impl RunnerMetrics {
    /// Tasks started but not yet completed.
    pub fn in_flight(&self) -> u64 {
        self.started.saturating_sub(self.completed)
    }
}

pub fn compute_metrics(events: &VecDeque<RunnerEvent>) -> RunnerMetrics {
    let mut metrics = RunnerMetrics::default();

    for event in events {
        match event {
            RunnerEvent::TaskAdded { .. } => metrics.added += 1,
            RunnerEvent::TaskStarted { .. } => metrics.started += 1,
            RunnerEvent::TaskCompleted { .. } => metrics.completed += 1,
            RunnerEvent::Idle => metrics.idle_transitions += 1,
        }
    }

    metrics
}
