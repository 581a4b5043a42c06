//! Runner event stream.
//!
//! Events are observational only. Nothing in the runner reads them back to
//! make decisions; they exist for the text layer and for verification.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::RunnerEvent;
pub use metrics::RunnerMetrics;
pub use recorder::EventRecorder;
