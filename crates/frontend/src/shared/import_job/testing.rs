//! In-memory collaborators for engine tests

use async_trait::async_trait;
use contracts::domain::a001_deal::Deal;
use contracts::usecases::u601_fetch_deals::{
    ImportMenusRequest, JobProgress, JobStatus, JobStatusResponse, SubmitJobResponse,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use super::ports::{DealsReader, JobApi, ProgressSink, Sleeper};
use super::progress::LocalProgress;
use super::submitter::JobHandle;

pub fn status(status: JobStatus, completed: u32, failed: u32, total: u32) -> JobStatusResponse {
    JobStatusResponse {
        status: Some(status),
        progress: Some(JobProgress {
            completed: Some(completed),
            failed: Some(failed),
            total_stores: Some(total),
        }),
        result: None,
    }
}

pub fn deal(id: i64, restaurant: &str, item: &str) -> Deal {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "restaurant_name": restaurant,
        "item_name": item,
        "price": 4.99,
    }))
    .unwrap()
}

/// Job API that replays a script of responses
pub struct ScriptedJobApi {
    submit_response: Result<SubmitJobResponse, String>,
    statuses: RefCell<VecDeque<Result<JobStatusResponse, String>>>,
    fallback: Option<JobStatusResponse>,
    submitted: RefCell<Vec<ImportMenusRequest>>,
    polled: RefCell<Vec<JobHandle>>,
}

impl ScriptedJobApi {
    fn with_submit(submit_response: Result<SubmitJobResponse, String>) -> Self {
        Self {
            submit_response,
            statuses: RefCell::new(VecDeque::new()),
            fallback: None,
            submitted: RefCell::new(Vec::new()),
            polled: RefCell::new(Vec::new()),
        }
    }

    pub fn accepting(job_id: &str) -> Self {
        Self::with_submit(Ok(SubmitJobResponse {
            job_id: Some(job_id.to_string()),
            status: Some(JobStatus::Queued),
            result: None,
        }))
    }

    pub fn responding(response: SubmitJobResponse) -> Self {
        Self::with_submit(Ok(response))
    }

    pub fn failing_submit(message: &str) -> Self {
        Self::with_submit(Err(message.to_string()))
    }

    pub fn then_status(self, response: JobStatusResponse) -> Self {
        self.statuses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn then_error(self, message: &str) -> Self {
        self.statuses.borrow_mut().push_back(Err(message.to_string()));
        self
    }

    /// Returned once the scripted statuses run out
    pub fn always(mut self, response: JobStatusResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.borrow().len()
    }

    pub fn submitted(&self) -> Vec<ImportMenusRequest> {
        self.submitted.borrow().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.polled.borrow().len()
    }

    pub fn polled_handles(&self) -> Vec<JobHandle> {
        self.polled.borrow().clone()
    }
}

#[async_trait(?Send)]
impl JobApi for ScriptedJobApi {
    async fn submit(&self, request: &ImportMenusRequest) -> Result<SubmitJobResponse, String> {
        self.submitted.borrow_mut().push(request.clone());
        self.submit_response.clone()
    }

    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatusResponse, String> {
        self.polled.borrow_mut().push(handle.clone());
        let next = self.statuses.borrow_mut().pop_front();
        match next {
            Some(response) => response,
            None => self
                .fallback
                .clone()
                .ok_or_else(|| "script exhausted".to_string()),
        }
    }
}

pub struct CountingDeals {
    result: Result<Vec<Deal>, String>,
    calls: Cell<usize>,
}

impl CountingDeals {
    pub fn returning(deals: Vec<Deal>) -> Self {
        Self {
            result: Ok(deals),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl DealsReader for CountingDeals {
    async fn reload(&self) -> Result<Vec<Deal>, String> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    shown: RefCell<Vec<LocalProgress>>,
    hidden: Cell<usize>,
}

impl RecordingSink {
    pub fn shown(&self) -> Vec<LocalProgress> {
        self.shown.borrow().clone()
    }

    pub fn completed_counts(&self) -> Vec<u32> {
        self.shown.borrow().iter().map(|p| p.completed).collect()
    }

    pub fn hidden(&self) -> usize {
        self.hidden.get()
    }
}

impl ProgressSink for RecordingSink {
    fn show(&self, progress: &LocalProgress) {
        self.shown.borrow_mut().push(progress.clone());
    }

    fn hide(&self) {
        self.hidden.set(self.hidden.get() + 1);
    }
}
