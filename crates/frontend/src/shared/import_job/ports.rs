//! Collaborators the import engine talks to

use async_trait::async_trait;
use contracts::domain::a001_deal::Deal;
use contracts::usecases::u601_fetch_deals::{
    ImportMenusRequest, JobStatusResponse, SubmitJobResponse,
};
use std::time::Duration;

use super::progress::LocalProgress;
use super::submitter::JobHandle;

/// Remote job endpoints of the deals service
#[async_trait(?Send)]
pub trait JobApi {
    async fn submit(&self, request: &ImportMenusRequest) -> Result<SubmitJobResponse, String>;
    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatusResponse, String>;
}

/// Reloads the ranked deal list after an import
#[async_trait(?Send)]
pub trait DealsReader {
    async fn reload(&self) -> Result<Vec<Deal>, String>;
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Receives reconciled progress while a job runs
pub trait ProgressSink {
    fn show(&self, progress: &LocalProgress);
    fn hide(&self);
}

impl ProgressSink for () {
    fn show(&self, _progress: &LocalProgress) {}
    fn hide(&self) {}
}

#[async_trait(?Send)]
impl<T: JobApi + ?Sized> JobApi for &T {
    async fn submit(&self, request: &ImportMenusRequest) -> Result<SubmitJobResponse, String> {
        (**self).submit(request).await
    }

    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatusResponse, String> {
        (**self).job_status(handle).await
    }
}

#[async_trait(?Send)]
impl<T: DealsReader + ?Sized> DealsReader for &T {
    async fn reload(&self) -> Result<Vec<Deal>, String> {
        (**self).reload().await
    }
}

#[async_trait(?Send)]
impl<T: Sleeper + ?Sized> Sleeper for &T {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn show(&self, progress: &LocalProgress) {
        (**self).show(progress)
    }

    fn hide(&self) {
        (**self).hide()
    }
}

/// Browser timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}
