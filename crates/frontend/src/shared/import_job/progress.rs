use contracts::usecases::u601_fetch_deals::{JobStatus, JobStatusResponse};

/// Progress of one import run as shown to the user.
///
/// `completed` counts finished restaurants, successful or failed, and
/// never decreases for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalProgress {
    pub completed: u32,
    pub failed: u32,
    pub total: u32,
    pub status: JobStatus,
    pub visible: bool,
}

impl LocalProgress {
    /// State right after a job has been accepted
    pub fn started(total: u32) -> Self {
        Self {
            completed: 0,
            failed: 0,
            total,
            status: JobStatus::Queued,
            visible: true,
        }
    }

    /// Closing frame of a run: same counts, no longer rendered
    pub fn finished(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }
}

/// One poll's worth of untrusted progress data. Absent is not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProgressSnapshot {
    /// Successful restaurants only
    pub completed: Option<u32>,
    pub failed: Option<u32>,
    pub total: Option<u32>,
    pub status: Option<JobStatus>,
}

impl From<&JobStatusResponse> for RawProgressSnapshot {
    fn from(response: &JobStatusResponse) -> Self {
        let progress = response.progress.as_ref();
        Self {
            completed: progress.and_then(|p| p.completed),
            failed: progress.and_then(|p| p.failed),
            total: progress.and_then(|p| p.total_stores),
            status: response.status,
        }
    }
}

/// Merge the latest snapshot into the previous local view.
///
/// Missing fields fall back to what was known before. `failed` tracks the
/// server's latest value, while `completed` is clamped so it never drops
/// below the previous value even when the server reports less.
pub fn reconcile(
    previous: &LocalProgress,
    snapshot: &RawProgressSnapshot,
    default_total: u32,
) -> LocalProgress {
    let prev_completed_only = previous.completed.saturating_sub(previous.failed);
    let completed_only = snapshot.completed.unwrap_or(prev_completed_only);
    let failed = snapshot.failed.unwrap_or(previous.failed);
    let done_now = completed_only.saturating_add(failed);

    let total = match snapshot.total {
        Some(total) if total > 0 => total,
        _ if previous.total > 0 => previous.total,
        _ => default_total,
    };

    LocalProgress {
        completed: previous.completed.max(done_now),
        failed,
        total,
        status: snapshot.status.unwrap_or(previous.status),
        visible: true,
    }
}
