//! Client for the hosted chat-completion API.
//!
//! Talks to an OpenAI-style `/chat/completions` endpoint. The base URL and
//! model come from [`Config`] so tests can point the client at a local fake.

use crate::config::Config;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Fixed scope guardrail sent as the system message on every request.
const SYSTEM_INSTRUCTION: &str = "You are a finance Q&A assistant. Provide educational \
     information only; do not give personalized financial advice. If asked for buy/sell \
     or specific recommendations, explain risks and suggest consulting a professional.";

/// Substituted when the service returns no usable text.
const FALLBACK_ANSWER: &str = "I couldn't generate a response. Try rephrasing.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Client for the completion service.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send the fixed system instruction plus `question` and return the
    /// assistant's text. Empty output is substituted with a fallback string
    /// rather than reported as an error.
    pub async fn ask(&self, question: &str) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(question),
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| CompletionError::Request(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::MalformedResponse(err.to_string()))?;

        Ok(extract_answer(parsed))
    }
}

/// Two-message prompt: system guardrail, then the user's question.
fn build_messages(question: &str) -> Vec<PromptMessage<'_>> {
    vec![
        PromptMessage {
            role: "system",
            content: SYSTEM_INSTRUCTION,
        },
        PromptMessage {
            role: "user",
            content: question,
        },
    ]
}

/// Pull the answer text out of the response, falling back when the service
/// returns an empty or missing content field.
fn extract_answer(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string())
}

fn map_http_error(status: StatusCode, body: String) -> CompletionError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    CompletionError::Api {
        status: status.as_u16(),
        message,
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<PromptMessage<'a>>,
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
