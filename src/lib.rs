//! StormGPT - Asynchronous chat relay for Stormworks
//!
//! A client submits a prompt over HTTP, gets back an opaque job id
//! immediately, and polls a second endpoint until the slow upstream
//! text-generation call completes.
//!
//! - broker/: job lifecycle (dispatch, in-memory store, poll resolution)
//! - upstream/: upstream client and the retry policy around it
//! - http: thin axum boundary (/chat and /result)
//! - config: environment configuration

pub mod broker;
pub mod config;
pub mod http;
pub mod upstream;

pub use broker::{Broker, PollOutcome};
pub use config::Config;
