//! Job lifecycle: dispatching prompts to detached background tasks and
//! resolving polls against the shared job store.

pub mod store;

pub use store::{JobStore, PollOutcome};

use crate::config::Config;
use crate::upstream::{call_with_retry, UpstreamCall};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Dispatches submitted prompts and resolves polls. One instance is
/// shared across all HTTP handler tasks.
pub struct Broker {
    store: Arc<JobStore>,
    upstream: Arc<dyn UpstreamCall>,
    retries: u32,
    retry_delay: Duration,
    poll_timeout: Duration,
}

impl Broker {
    pub fn new(upstream: Arc<dyn UpstreamCall>, config: &Config) -> Self {
        Self {
            store: Arc::new(JobStore::new()),
            upstream,
            retries: config.retries,
            retry_delay: config.retry_delay,
            poll_timeout: config.poll_timeout,
        }
    }

    /// Accept a prompt and hand back its job id immediately.
    ///
    /// Returns `None` without creating a job when the prompt is empty
    /// after trimming. The timing entry is written before this returns,
    /// so a poll on the returned id can never miss the record.
    ///
    /// The upstream call runs on a detached task that outlives this
    /// request; it is never joined, and process exit abandons it.
    pub fn submit(&self, msg: &str) -> Option<String> {
        let msg = msg.trim();
        if msg.is_empty() {
            return None;
        }

        let id = Uuid::new_v4().to_string();
        self.store.insert(&id, Instant::now());
        info!("user ({}): {}", id, msg);

        let store = self.store.clone();
        let upstream = self.upstream.clone();
        let prompt = msg.to_owned();
        let job_id = id.clone();
        let (retries, delay) = (self.retries, self.retry_delay);
        tokio::spawn(async move {
            let reply = call_with_retry(upstream.as_ref(), &prompt, retries, delay).await;
            info!("ai ({}): {}", job_id, reply);
            store.complete(&job_id, reply);
        });

        Some(id)
    }

    /// Classify a job id against the store and the poll timeout. Always
    /// returns immediately; waiting is the caller's job (re-poll).
    pub fn poll(&self, id: &str) -> PollOutcome {
        self.store.resolve(id, self.poll_timeout, Instant::now())
    }

    /// Number of live jobs.
    pub fn live_jobs(&self) -> usize {
        self.store.len()
    }
}
