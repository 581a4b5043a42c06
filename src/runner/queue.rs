use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::types::{RunnerState, RunnerStatus, Task};
use crate::error::{Result, RoboError};
use crate::telemetry::RunnerEvent;

struct QueueState {
    state: RunnerState,
    queue: VecDeque<Task>,
    // True while a drain task owns the head of the queue.
    draining: bool,
}

impl QueueState {
    fn status(&self) -> RunnerStatus {
        RunnerStatus {
            state: self.state,
            queue_length: self.queue.len(),
        }
    }
}

enum Step {
    Busy,
    Idle,
    Started(Task),
}

struct Shared {
    inner: Mutex<QueueState>,
    events: mpsc::UnboundedSender<RunnerEvent>,
    status: watch::Sender<RunnerStatus>,
    cancel: CancellationToken,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, QueueState> {
        // Nothing panics while holding the lock, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: RunnerEvent) {
        // Receiver may have been dropped; events are observational.
        let _ = self.events.send(event);
    }

    /// One dequeue. `continuing` is set when called from an active drain.
    fn step(&self, continuing: bool) -> Step {
        let (step, status) = {
            let mut inner = self.lock();
            if inner.draining && !continuing {
                return Step::Busy;
            }
            let step = match inner.queue.pop_front() {
                Some(task) => {
                    inner.state = RunnerState::Executing;
                    inner.draining = true;
                    Step::Started(task)
                }
                None => {
                    inner.state = RunnerState::Idle;
                    inner.draining = false;
                    Step::Idle
                }
            };
            (step, inner.status())
        };
        self.status.send_replace(status);

        match &step {
            Step::Started(task) => {
                info!(task = %task.name, duration_ms = task.duration_ms, "Executing task");
                self.emit(RunnerEvent::TaskStarted { id: task.id, name: task.name.clone() });
            }
            Step::Idle => {
                info!("No tasks remaining. Robot idle.");
                self.emit(RunnerEvent::Idle);
            }
            Step::Busy => {}
        }
        step
    }

    fn halt(&self) {
        let status = {
            let mut inner = self.lock();
            inner.state = RunnerState::Idle;
            inner.draining = false;
            inner.status()
        };
        self.status.send_replace(status);
        info!(remaining = status.queue_length, "Runner shut down");
    }

    async fn drain(self: Arc<Self>, mut task: Task) {
        loop {
            // The simulated wait is never cut short.
            tokio::time::sleep(task.duration()).await;
            info!(task = %task.name, "Task completed");
            self.emit(RunnerEvent::TaskCompleted { id: task.id, name: task.name });

            if self.cancel.is_cancelled() {
                self.halt();
                return;
            }

            match self.step(true) {
                Step::Started(next) => task = next,
                Step::Idle | Step::Busy => return,
            }
        }
    }
}

/// Sequential task executor with simulated durations.
///
/// `add_task`, `status` and `execute_next` return immediately. Completion of
/// each task, and the dequeue that follows it, happen on a tokio task spawned
/// on the caller's runtime. At most one task executes at a time.
pub struct TaskRunner {
    shared: Arc<Shared>,
}

impl TaskRunner {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RunnerEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let (status, _) = watch::channel(RunnerStatus::default());
        let shared = Shared {
            inner: Mutex::new(QueueState {
                state: RunnerState::Idle,
                queue: VecDeque::new(),
                draining: false,
            }),
            events,
            status,
            cancel: CancellationToken::new(),
        };
        (Self { shared: Arc::new(shared) }, rx)
    }

    /// Appends to the tail of the queue. Does not change state.
    pub fn add_task(&self, task: Task) {
        let status = {
            let mut inner = self.shared.lock();
            inner.queue.push_back(task.clone());
            inner.status()
        };
        self.shared.status.send_replace(status);
        info!(task = %task.name, "Task added");
        self.shared.emit(RunnerEvent::TaskAdded { id: task.id, name: task.name });
    }

    /// Starts draining the queue.
    ///
    /// The head task is dequeued before this returns. If a drain is already
    /// in flight the call is a no-op.
    pub fn execute_next(&self) -> Result<()> {
        let handle = Handle::try_current().map_err(|_| RoboError::NoRuntime)?;

        if self.shared.cancel.is_cancelled() {
            debug!("execute_next ignored after shutdown");
            return Ok(());
        }

        match self.shared.step(false) {
            Step::Started(task) => {
                handle.spawn(Arc::clone(&self.shared).drain(task));
            }
            Step::Busy => debug!("execute_next ignored, drain already in flight"),
            Step::Idle => {}
        }
        Ok(())
    }

    pub fn status(&self) -> RunnerStatus {
        self.shared.lock().status()
    }

    pub fn subscribe(&self) -> watch::Receiver<RunnerStatus> {
        self.shared.status.subscribe()
    }

    /// Resolves once no task is executing.
    pub async fn wait_idle(&self) {
        let mut rx = self.subscribe();
        // Sender lives in `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|s| s.state == RunnerState::Idle).await;
    }

    /// Stops the drain after the in-flight task completes. Queued tasks stay queued.
    pub fn shutdown(&self) {
        self.shared.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shared.cancel.is_cancelled()
    }
}
