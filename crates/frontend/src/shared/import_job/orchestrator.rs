use chrono::Utc;
use contracts::domain::a001_deal::Deal;
use contracts::usecases::u601_fetch_deals::ImportResult;

use super::error::ImportError;
use super::poller::JobPoller;
use super::ports::{DealsReader, JobApi, ProgressSink, Sleeper};
use super::progress::{reconcile, LocalProgress, RawProgressSnapshot};
use super::submitter::{JobHandle, JobSubmitter, Submission, TerminalOutcome};
use crate::shared::config::ImportSettings;
use crate::shared::storage::KeyValueStore;

/// Whether a run may reuse the last successful import for the same location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    ReuseCached,
    /// Always submit a new job
    Force,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The location was already imported; only the deal list was reloaded
    CachedReuse,
    Finished(TerminalOutcome),
}

/// Everything a caller needs after a run. Failures are carried here,
/// never raised.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub outcome: Result<RunOutcome, ImportError>,
    /// Result of the deal list reload attempted at the end of every run
    pub deals: Result<Vec<Deal>, String>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Message for the error banner, if anything went wrong
    pub fn user_message(&self) -> Option<String> {
        match (&self.outcome, &self.deals) {
            (Err(e), _) => Some(e.user_message()),
            (Ok(_), Err(_)) => {
                Some("Failed to load deals. Make sure the backend is running.".to_string())
            }
            (Ok(_), Ok(_)) => None,
        }
    }
}

/// Drives one import: cache check, submit, poll, reconcile, reload.
///
/// Only one run may be active at a time; callers guard that with their
/// own in-progress flag.
pub struct ImportOrchestrator<A, D, K, S, P = ()> {
    api: A,
    deals: D,
    store: K,
    sleeper: S,
    sink: P,
    settings: ImportSettings,
    cache_key: String,
}

impl<A, D, K, S> ImportOrchestrator<A, D, K, S, ()>
where
    A: JobApi,
    D: DealsReader,
    K: KeyValueStore,
    S: Sleeper,
{
    pub fn new(api: A, deals: D, store: K, sleeper: S) -> Self {
        Self {
            api,
            deals,
            store,
            sleeper,
            sink: (),
            settings: ImportSettings::default(),
            cache_key: "lastScrapedLocation".to_string(),
        }
    }
}

impl<A, D, K, S, P> ImportOrchestrator<A, D, K, S, P>
where
    A: JobApi,
    D: DealsReader,
    K: KeyValueStore,
    S: Sleeper,
    P: ProgressSink,
{
    pub fn with_settings(mut self, settings: ImportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Storage key holding the last successfully imported location
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = key.into();
        self
    }

    pub fn with_sink<P2: ProgressSink>(self, sink: P2) -> ImportOrchestrator<A, D, K, S, P2> {
        ImportOrchestrator {
            api: self.api,
            deals: self.deals,
            store: self.store,
            sleeper: self.sleeper,
            sink,
            settings: self.settings,
            cache_key: self.cache_key,
        }
    }

    pub fn cached_location(&self) -> Option<String> {
        self.store.get(&self.cache_key)
    }

    pub async fn run(&self, location: &str, restaurants: &[String]) -> RunReport {
        self.run_with(location, restaurants, CachePolicy::ReuseCached)
            .await
    }

    pub async fn run_with(
        &self,
        location: &str,
        restaurants: &[String],
        policy: CachePolicy,
    ) -> RunReport {
        if policy == CachePolicy::ReuseCached
            && self.cached_location().as_deref() == Some(location)
        {
            log::info!("deals for {} already imported, reloading only", location);
            return RunReport {
                outcome: Ok(RunOutcome::CachedReuse),
                deals: self.reload_deals().await,
            };
        }

        let started_at = Utc::now();
        let outcome = self.import(location, restaurants).await;
        let elapsed_ms = (Utc::now() - started_at).num_milliseconds();
        match &outcome {
            Ok(terminal) => log::info!(
                "import for {} finished as {} in {} ms",
                location,
                terminal.status.as_str(),
                elapsed_ms
            ),
            Err(e) => log::warn!("import for {} failed after {} ms: {}", location, elapsed_ms, e),
        }

        // Reload even on failure so stale deals do not linger
        let deals = self.reload_deals().await;
        if outcome.is_ok() {
            self.store.set(&self.cache_key, location);
        }
        self.sink.hide();

        RunReport {
            outcome: outcome.map(RunOutcome::Finished),
            deals,
        }
    }

    async fn import(
        &self,
        location: &str,
        restaurants: &[String],
    ) -> Result<TerminalOutcome, ImportError> {
        let handle = match JobSubmitter::new(&self.api)
            .submit(location, restaurants)
            .await?
        {
            Submission::Terminal(outcome) => {
                log::info!("import for {} finished synchronously", location);
                return outcome.into_result();
            }
            Submission::Accepted(handle) => handle,
        };
        log::info!("import job {} accepted for {}", handle, location);

        let default_total = u32::try_from(restaurants.len()).unwrap_or(u32::MAX);
        let mut progress = LocalProgress::started(default_total);
        self.sink.show(&progress);

        let polled = self.poll(handle, &mut progress, default_total).await;
        self.sink.show(&progress.finished());

        // The poller only ends quietly after a terminal snapshot
        TerminalOutcome {
            status: progress.status,
            result: polled?,
        }
        .into_result()
    }

    /// Reconciles every snapshot into `progress`; returns the result
    /// attached to the last one.
    async fn poll(
        &self,
        handle: JobHandle,
        progress: &mut LocalProgress,
        default_total: u32,
    ) -> Result<Option<ImportResult>, ImportError> {
        let mut poller = JobPoller::new(&self.api, &self.sleeper, handle, &self.settings);
        let mut result = None;
        while let Some(step) = poller.next().await {
            let snapshot = step?;
            *progress = reconcile(progress, &RawProgressSnapshot::from(&snapshot), default_total);
            log::debug!(
                "import job {}: {}/{} done, {} failed, status {}",
                poller.handle(),
                progress.completed,
                progress.total,
                progress.failed,
                progress.status.as_str()
            );
            self.sink.show(progress);
            result = snapshot.result;
        }
        Ok(result)
    }

    async fn reload_deals(&self) -> Result<Vec<Deal>, String> {
        let deals = self.deals.reload().await;
        if let Err(e) = &deals {
            log::error!("failed to reload deals: {}", e);
        }
        deals
    }
}
