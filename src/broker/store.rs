use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// State tracked for one live job.
#[derive(Debug)]
struct JobEntry {
    submitted_at: Instant,
    result: Option<String>,
}

/// Outcome of resolving a poll against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Id was never issued, or the job already resolved to an earlier poll
    Unknown,
    /// Job is live but the background task has not finished
    Pending,
    /// Final text; the entry has been removed
    Completed(String),
    /// Job exceeded the poll timeout; the entry has been removed
    TimedOut,
}

/// In-memory map of live jobs, shared between the dispatcher, the
/// background tasks and the poll handlers.
///
/// A single mutex guards one entry map, so a poll sees either "no result
/// yet" or the complete final text. The lock is never held across an
/// await.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Mutex<HashMap<String, JobEntry>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the submission time for a fresh job id. Must happen before
    /// the id is handed back to the caller.
    pub fn insert(&self, id: &str, submitted_at: Instant) {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.insert(
            id.to_owned(),
            JobEntry {
                submitted_at,
                result: None,
            },
        );
    }

    /// Store the final text for a job. If a timed-out poll already
    /// reclaimed the entry, the late write is dropped.
    pub fn complete(&self, id: &str, result: String) {
        let mut jobs = self.jobs.lock().unwrap();
        if let Some(entry) = jobs.get_mut(id) {
            entry.result = Some(result);
        }
    }

    /// Classify a job id against `now`, removing the entry on the two
    /// terminal outcomes. Each job resolves to a caller at most once;
    /// any later poll sees [`PollOutcome::Unknown`].
    pub fn resolve(&self, id: &str, timeout: Duration, now: Instant) -> PollOutcome {
        let mut jobs = self.jobs.lock().unwrap();
        let Some(entry) = jobs.get_mut(id) else {
            return PollOutcome::Unknown;
        };

        if let Some(text) = entry.result.take() {
            jobs.remove(id);
            return PollOutcome::Completed(text);
        }

        if now.duration_since(entry.submitted_at) >= timeout {
            jobs.remove(id);
            return PollOutcome::TimedOut;
        }

        PollOutcome::Pending
    }

    /// Number of live jobs (pending or completed-but-unretrieved).
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
