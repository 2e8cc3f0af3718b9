use contracts::usecases::u601_fetch_deals::{ImportResult, JobStatus};
use thiserror::Error;

/// Ways an import run can fail. All of them are recovered by the
/// orchestrator and turned into a message for the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// Transport failure or a response with neither a terminal status nor a job id
    #[error("failed to start import: {0}")]
    SubmissionFailed(String),

    /// A single status request failed; polling is not retried
    #[error("failed to fetch import status: {0}")]
    PollTransport(String),

    #[error("import still not finished after {attempts} status checks")]
    PollTimeout { attempts: u32 },

    /// The server reported a terminal status other than completed/partial
    #[error("import job ended with status `{}`", .status.as_str())]
    RemoteJobFailed {
        status: JobStatus,
        result: Option<ImportResult>,
    },
}

impl ImportError {
    pub fn user_message(&self) -> String {
        match self {
            ImportError::SubmissionFailed(_) => {
                "Failed to start fetching deals. Please try refreshing.".to_string()
            }
            ImportError::PollTransport(_) => {
                "Lost contact with the deal import. Please try refreshing.".to_string()
            }
            ImportError::PollTimeout { .. } => {
                "Fetching deals is taking longer than expected. The import may still be \
                 running on the server; try refreshing in a minute."
                    .to_string()
            }
            ImportError::RemoteJobFailed { result, .. } => match result {
                Some(result) if !result.skipped.is_empty() => format!(
                    "The deal import failed on the server ({} restaurants skipped). Please try refreshing.",
                    result.skipped.len()
                ),
                _ => "The deal import failed on the server. Please try refreshing.".to_string(),
            },
        }
    }
}
