use std::collections::VecDeque;
use super::event::RunnerEvent;
use super::metrics::{RunnerMetrics, compute_metrics};

const MAX_EVENTS: usize = 10_000;

/// Bounded history of runner events. Oldest entries are evicted first.
#[derive(Debug)]
pub struct EventRecorder {
    buffer: VecDeque<RunnerEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(64),
        }
    }

    pub fn record(&mut self, event: RunnerEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &RunnerEvent> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn snapshot(&self) -> RunnerMetrics {
        compute_metrics(&self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}
