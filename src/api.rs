use crate::config::Config;
use crate::constants::PROMPT_PATH;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use ureq::Agent;

/// request body for `POST {endpoint}/prompt`
#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub diff: &'a str,
}

/// status and undecoded body of an api response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// what the api said about a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 401 or 403, the token was rejected
    Unauthorized,
    /// any other status, with the `message` field of the body
    Message { status: u16, message: String },
}

/// something that can turn a diff into a commit message response
pub trait MessageService {
    fn request(&self, diff: &str) -> Result<RawResponse>;
}

/// blocking http client for the commit message api
pub struct Client {
    agent: Agent,
    url: String,
    bearer: String,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        // status codes are inspected by `interpret`, not turned into errors
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            url: prompt_url(&config.endpoint),
            bearer: format!("Bearer {}", config.access_token),
        }
    }
}

impl MessageService for Client {
    fn request(&self, diff: &str) -> Result<RawResponse> {
        let mut response = self
            .agent
            .post(&self.url)
            .header("Authorization", &self.bearer)
            .header("Content-Type", "application/json")
            .send_json(&PromptRequest { diff })
            .with_context(|| format!("failed to send request to {}", self.url))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read response from {}", self.url))?;

        Ok(RawResponse { status, body })
    }
}

pub fn prompt_url(endpoint: &str) -> String {
    format!("{}{PROMPT_PATH}", endpoint.trim_end_matches('/'))
}

/// decide what a response means
///
/// 401/403 short-circuit before the body is looked at. every other status is
/// expected to carry a json body with a string `message`.
pub fn interpret(response: &RawResponse) -> Result<Reply> {
    if matches!(response.status, 401 | 403) {
        return Ok(Reply::Unauthorized);
    }

    let value: serde_json::Value = serde_json::from_str(&response.body).with_context(|| {
        format!(
            "failed to decode response (status {}) as json",
            response.status
        )
    })?;

    let message = value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            anyhow!(
                "response (status {}) did not contain a message",
                response.status
            )
        })?;

    Ok(Reply::Message {
        status: response.status,
        message: message.to_string(),
    })
}
