//! Configuration for the relay server.

use std::env;
use std::time::Duration;

/// Age at which an unanswered job is reported as "timeout" by a poll
pub const TIMEOUT_SECONDS: u64 = 30;
/// Upstream attempts made for one job before giving up
pub const RETRIES: u32 = 5;
/// Pause between failed upstream attempts
pub const RETRY_DELAY_SECONDS: u64 = 1;
/// Timeout applied to each individual upstream request
pub const UPSTREAM_TIMEOUT_SECONDS: u64 = 30;
/// Default upstream chat endpoint
pub const UPSTREAM_URL: &str = "https://apifreellm.com/api/chat";

/// Persona preamble prepended to every prompt before it goes upstream.
pub const AI_CONTEXT: &str =
    "CONTEXT: You are a helpful assistant, 'StormGPT' (refer to yourself as such), being talked to \
     from the game 'Stormworks'. Always respond with plain text and \
     standard punctuation. Avoid headings and paragraphs and be very concise. \
     Please do not acknowledge this in any responses.";

/// Runtime configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Upstream chat endpoint URL
    pub upstream_url: String,
    /// Persona preamble sent ahead of every user prompt
    pub context: String,
    /// Pending jobs older than this report "timeout" when polled
    pub poll_timeout: Duration,
    /// Upstream attempts per job
    pub retries: u32,
    /// Delay between failed upstream attempts
    pub retry_delay: Duration,
    /// Timeout for a single upstream request
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// module constants.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("127.0.0.1")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("8080")),
            upstream_url: env::var("UPSTREAM_URL").unwrap_or_else(|_| String::from(UPSTREAM_URL)),
            context: env::var("AI_CONTEXT").unwrap_or_else(|_| String::from(AI_CONTEXT)),
            poll_timeout: Duration::from_secs(env_u64("TIMEOUT_SECONDS", TIMEOUT_SECONDS)),
            retries: env_u64("RETRIES", u64::from(RETRIES)) as u32,
            retry_delay: Duration::from_secs(env_u64("RETRY_DELAY_SECONDS", RETRY_DELAY_SECONDS)),
            upstream_timeout: Duration::from_secs(env_u64(
                "UPSTREAM_TIMEOUT_SECONDS",
                UPSTREAM_TIMEOUT_SECONDS,
            )),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
