use contracts::usecases::u601_fetch_deals::JobStatusResponse;
use std::time::Duration;

use super::error::ImportError;
use super::ports::{JobApi, Sleeper};
use super::submitter::JobHandle;
use crate::shared::config::ImportSettings;

/// Polls one job until it reports a terminal status or runs out of attempts.
///
/// Each call to [`JobPoller::next`] performs at most one status request and
/// yields its snapshot. The sequence is finite and cannot be restarted:
/// after a terminal snapshot, a transport error or a timeout it only
/// returns `None`. The interval delay is taken before every attempt except
/// the first, so nothing waits after the last snapshot.
pub struct JobPoller<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    sleeper: &'a S,
    handle: JobHandle,
    interval: Duration,
    max_attempts: u32,
    attempts: u32,
    finished: bool,
}

impl<'a, A, S> JobPoller<'a, A, S>
where
    A: JobApi + ?Sized,
    S: Sleeper + ?Sized,
{
    pub fn new(api: &'a A, sleeper: &'a S, handle: JobHandle, settings: &ImportSettings) -> Self {
        Self {
            api,
            sleeper,
            handle,
            interval: settings.poll_interval(),
            max_attempts: settings.max_attempts,
            attempts: 0,
            finished: false,
        }
    }

    pub fn handle(&self) -> &JobHandle {
        &self.handle
    }

    /// Status requests issued so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub async fn next(&mut self) -> Option<Result<JobStatusResponse, ImportError>> {
        if self.finished {
            return None;
        }
        if self.attempts >= self.max_attempts {
            self.finished = true;
            log::warn!(
                "import job {} not finished after {} status checks",
                self.handle,
                self.attempts
            );
            return Some(Err(ImportError::PollTimeout {
                attempts: self.attempts,
            }));
        }
        if self.attempts > 0 {
            self.sleeper.sleep(self.interval).await;
        }

        self.attempts += 1;
        match self.api.job_status(&self.handle).await {
            Ok(snapshot) => {
                // Absent status means "still going"
                if snapshot.status.is_some_and(|s| s.is_terminal()) {
                    self.finished = true;
                }
                Some(Ok(snapshot))
            }
            Err(e) => {
                self.finished = true;
                log::error!("status request for import job {} failed: {}", self.handle, e);
                Some(Err(ImportError::PollTransport(e)))
            }
        }
    }
}
