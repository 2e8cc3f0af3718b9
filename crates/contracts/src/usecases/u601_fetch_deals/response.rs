use serde::{Deserialize, Serialize};

use super::progress::{lenient_status, JobStatus};

/// Answer to `POST /scrape/ubereats`.
///
/// The server either finishes synchronously (terminal `status`, `result`
/// filled in) or hands back a `job_id` to poll. Both shapes decode into
/// this one record; interpretation is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitJobResponse {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub result: Option<ImportResult>,
}

/// Import summary produced by the deals service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub updated: u32,
    #[serde(default)]
    pub ranked: u32,
    /// Items the scraper gave up on; the shape varies by source
    #[serde(default)]
    pub skipped: Vec<serde_json::Value>,
}

impl ImportResult {
    /// Multi-line summary shown after an import, e.g. "Import complete.\nCreated: 3..."
    pub fn summary_text(&self, title: &str) -> String {
        format!(
            "{} complete.\nCreated: {}\nUpdated: {}\nRanked: {}\nSkipped: {}",
            title,
            self.created,
            self.updated,
            self.ranked,
            self.skipped.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronous_completion() {
        let resp: SubmitJobResponse = serde_json::from_str(
            r#"{"status":"partial","result":{"created":2,"updated":1,"skipped":["Subway"]}}"#,
        )
        .unwrap();
        assert_eq!(resp.status, Some(JobStatus::Partial));
        assert_eq!(resp.job_id, None);
        let result = resp.result.unwrap();
        assert_eq!(result.created, 2);
        assert_eq!(result.ranked, 0);
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn test_async_job_handle_without_status() {
        let resp: SubmitJobResponse = serde_json::from_str(r#"{"job_id":"abc-123"}"#).unwrap();
        assert_eq!(resp.job_id.as_deref(), Some("abc-123"));
        assert_eq!(resp.status, None);
        assert_eq!(resp.result, None);
    }

    #[test]
    fn test_malformed_status_keeps_job_id() {
        let resp: SubmitJobResponse =
            serde_json::from_str(r#"{"job_id":"j1","status":1}"#).unwrap();
        assert_eq!(resp.job_id.as_deref(), Some("j1"));
        assert_eq!(resp.status, None);

        let resp: SubmitJobResponse =
            serde_json::from_str(r#"{"job_id":"j2","status":null}"#).unwrap();
        assert_eq!(resp.status, None);
    }

    #[test]
    fn test_summary_text() {
        let result = ImportResult {
            created: 4,
            updated: 2,
            ranked: 6,
            skipped: vec![serde_json::json!("KFC")],
        };
        assert_eq!(
            result.summary_text("Uber Eats import"),
            "Uber Eats import complete.\nCreated: 4\nUpdated: 2\nRanked: 6\nSkipped: 1"
        );
    }
}
