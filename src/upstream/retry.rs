use crate::upstream::UpstreamCall;
use std::time::Duration;
use tracing::error;

/// Fixed text stored as a job's result when every attempt fails.
pub const FAILURE_SENTINEL: &str = "failed to get a response";

/// Call the upstream service up to `retries` times, sleeping `delay`
/// between failed attempts (no sleep after the last one).
///
/// Never errors: exhaustion yields [`FAILURE_SENTINEL`], which is stored
/// in the job store exactly like a real answer. Nothing above the
/// dispatcher ever observes an upstream failure.
pub async fn call_with_retry(
    upstream: &dyn UpstreamCall,
    prompt: &str,
    retries: u32,
    delay: Duration,
) -> String {
    for attempt in 1..=retries {
        match upstream.call_once(prompt).await {
            Ok(text) => return text,
            Err(e) => {
                error!("upstream request error (attempt {}/{}): {}", attempt, retries, e);
                if attempt < retries {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    FAILURE_SENTINEL.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{MockUpstreamCall, UpstreamError};
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn first_success_short_circuits() {
        let mut upstream = MockUpstreamCall::new();
        upstream
            .expect_call_once()
            .times(1)
            .returning(|_| Ok(String::from("hi there")));

        let reply = call_with_retry(&upstream, "hello", 5, DELAY).await;
        assert_eq!(reply, "hi there");
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures() {
        let mut upstream = MockUpstreamCall::new();
        let mut failures = 2;
        upstream.expect_call_once().times(3).returning(move |_| {
            if failures > 0 {
                failures -= 1;
                Err(UpstreamError::MissingField)
            } else {
                Ok(String::from("eventually"))
            }
        });

        let reply = call_with_retry(&upstream, "hello", 5, DELAY).await;
        assert_eq!(reply, "eventually");
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_yields_sentinel_after_all_attempts() {
        let mut upstream = MockUpstreamCall::new();
        upstream
            .expect_call_once()
            .times(5)
            .returning(|_| Err(UpstreamError::MissingField));

        let start = Instant::now();
        let reply = call_with_retry(&upstream, "hello", 5, DELAY).await;
        assert_eq!(reply, FAILURE_SENTINEL);

        // 5 attempts, 4 inter-attempt delays, no delay after the last
        assert_eq!(start.elapsed(), DELAY * 4);
    }
}
