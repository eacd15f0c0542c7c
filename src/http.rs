//! Thin HTTP boundary: two plain-text routes over the broker.

use crate::broker::{Broker, PollOutcome};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;

/// Build the application router. Unknown paths fall through to axum's
/// default 404 handler with an empty body.
pub fn router(broker: Arc<Broker>) -> Router {
    Router::new()
        .route("/chat", get(chat))
        .route("/result", get(result))
        .with_state(broker)
}

#[derive(Debug, Deserialize)]
struct ChatParams {
    #[serde(default)]
    msg: String,
}

#[derive(Debug, Deserialize)]
struct ResultParams {
    #[serde(default)]
    id: String,
}

/// `GET /chat?msg=<text>` - submit a prompt, answer with the job id.
async fn chat(State(broker): State<Arc<Broker>>, Query(params): Query<ChatParams>) -> String {
    match broker.submit(&params.msg) {
        Some(id) => id,
        None => String::from("no message provided"),
    }
}

/// `GET /result?id=<job_id>` - poll a job, answer with its result text
/// or one of the fixed status strings.
async fn result(State(broker): State<Arc<Broker>>, Query(params): Query<ResultParams>) -> String {
    match broker.poll(&params.id) {
        PollOutcome::Completed(text) => text,
        PollOutcome::Pending => String::from("pending"),
        PollOutcome::TimedOut => String::from("timeout"),
        PollOutcome::Unknown => String::from("invalid id"),
    }
}
