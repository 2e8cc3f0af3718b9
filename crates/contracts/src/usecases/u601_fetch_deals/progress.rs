use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::response::ImportResult;

/// Job status as reported by the deals service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    /// All restaurants imported
    Completed,
    /// Finished, but some restaurants failed
    Partial,
    Failed,
    /// Any status string this client does not know about
    Unknown,
}

impl JobStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "queued" => JobStatus::Queued,
            "running" => JobStatus::Running,
            "completed" => JobStatus::Completed,
            "partial" => JobStatus::Partial,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Partial => "partial",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }

    /// No further progress will be reported once a job is in this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Queued | JobStatus::Running)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Partial)
    }
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(JobStatus::parse(&value))
    }
}

/// Answer to `GET /scrape/ubereats/jobs/{job_id}`.
///
/// Every field may be missing on any given poll; malformed values decode
/// as absent instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatusResponse {
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub progress: Option<JobProgress>,
    #[serde(default)]
    pub result: Option<ImportResult>,
}

/// Raw per-job counters. `completed` counts successful restaurants only,
/// `failed` counts the ones that errored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProgress {
    #[serde(default, deserialize_with = "lenient_count")]
    pub completed: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub failed: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_stores: Option<u32>,
}

/// A finite, non-negative JSON number as a count. Fractions are
/// truncated and huge values saturate.
pub fn count_from_value(value: &Value) -> Option<u32> {
    let n = value.as_f64()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n as u32)
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<JobStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(JobStatus::parse))
}
