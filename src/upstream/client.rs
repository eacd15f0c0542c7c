use crate::config::Config;
use crate::upstream::{UpstreamCall, UpstreamError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

/// HTTP client for the apifreellm chat endpoint.
pub struct ApiFreeLlmClient {
    http: reqwest::Client,
    url: String,
    context: String,
}

impl ApiFreeLlmClient {
    /// Build a client with the configured endpoint, persona preamble and
    /// per-request timeout.
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            url: config.upstream_url.clone(),
            context: config.context.clone(),
        })
    }
}

#[async_trait]
impl UpstreamCall for ApiFreeLlmClient {
    async fn call_once(&self, prompt: &str) -> Result<String, UpstreamError> {
        let full_prompt = format!("{}\n{}", self.context, prompt);

        let resp = self
            .http
            .post(&self.url)
            .json(&ChatRequest {
                message: &full_prompt,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status()));
        }

        let body: ChatResponse = resp.json().await?;
        let text = body.response.ok_or(UpstreamError::MissingField)?;
        Ok(normalize(&text))
    }
}

/// Game-side consumers only handle plain ASCII; strip everything else
/// and lowercase what remains.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase()
}
