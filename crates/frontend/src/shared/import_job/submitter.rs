use contracts::usecases::u601_fetch_deals::{
    ImportMenusRequest, ImportResult, JobStatus, SubmitJobResponse,
};
use std::fmt;

use super::error::ImportError;
use super::ports::JobApi;

/// Server-issued id of an asynchronous import job
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final status of a job plus whatever summary the server attached
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalOutcome {
    pub status: JobStatus,
    pub result: Option<ImportResult>,
}

impl TerminalOutcome {
    /// Completed and partial runs count as success; anything else is a
    /// remote failure.
    pub fn into_result(self) -> Result<TerminalOutcome, ImportError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ImportError::RemoteJobFailed {
                status: self.status,
                result: self.result,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The server did the work inline; nothing to poll
    Terminal(TerminalOutcome),
    Accepted(JobHandle),
}

impl Submission {
    /// Normalize the two server behaviours into one shape. A successful
    /// status means the work was done inline; otherwise a job id is polled,
    /// whatever status came with it. A failed or unrecognised status is only
    /// final when there is no job to poll.
    pub fn from_response(response: SubmitJobResponse) -> Result<Self, ImportError> {
        let job_id = response.job_id.filter(|id| !id.trim().is_empty());
        match (response.status, job_id) {
            (Some(status), _) if status.is_success() => Ok(Submission::Terminal(TerminalOutcome {
                status,
                result: response.result,
            })),
            (_, Some(id)) => Ok(Submission::Accepted(JobHandle::new(id))),
            (Some(status), None) if status.is_terminal() => {
                Ok(Submission::Terminal(TerminalOutcome {
                    status,
                    result: response.result,
                }))
            }
            _ => Err(ImportError::SubmissionFailed(
                "response carried neither a terminal status nor a job id".to_string(),
            )),
        }
    }
}

/// Issues the job-creation request
pub struct JobSubmitter<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: JobApi + ?Sized> JobSubmitter<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn submit(
        &self,
        location: &str,
        restaurants: &[String],
    ) -> Result<Submission, ImportError> {
        let request = ImportMenusRequest::new(location, restaurants.to_vec());
        let response = self
            .api
            .submit(&request)
            .await
            .map_err(ImportError::SubmissionFailed)?;
        Submission::from_response(response)
    }
}
