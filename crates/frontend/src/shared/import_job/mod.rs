//! Remote import jobs: submit, poll, reconcile progress, finish.
//!
//! The deals service runs scrape+rank jobs whose duration is unknown and
//! reports progress only when asked. This module turns that into one
//! awaited call, [`ImportOrchestrator::run`], while keeping the visible
//! progress from ever moving backwards.

pub mod display;
pub mod error;
pub mod orchestrator;
pub mod poller;
pub mod ports;
pub mod progress;
pub mod submitter;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ImportError;
pub use orchestrator::{CachePolicy, ImportOrchestrator, RunOutcome, RunReport};
pub use poller::JobPoller;
pub use ports::{DealsReader, GlooSleeper, JobApi, ProgressSink, Sleeper};
pub use progress::{reconcile, LocalProgress, RawProgressSnapshot};
pub use submitter::{JobHandle, JobSubmitter, Submission, TerminalOutcome};
