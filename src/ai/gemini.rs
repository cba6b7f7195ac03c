//! Blocking client for the Gemini `generateContent` endpoint.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::TextGenerator;
use super::error::AiError;

const API_KEY_HEADER: &str = "x-goog-api-key";
const USER_AGENT: &str = concat!("ai-shell/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Gemini REST client authenticated with an API key
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build the client. Requests never time out; a slow call blocks the shell.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, AiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AiError::Unavailable);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| AiError::Request(e.to_string()))?;

        Ok(Self { http, api_key, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        };

        debug!(model, prompt_len = prompt.len(), "sending generateContent request");
        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(AiError::Api { status: status.as_u16(), message: api_error_message(&text) });
        }

        parse_generate_response(&text)
    }
}

/// Extract the generated text from a successful response body
///
/// Text parts of the first candidate are concatenated in order.
pub(crate) fn parse_generate_response(body: &str) -> Result<String, AiError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>());

    match text {
        Some(text) => Ok(text),
        None => {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked ({})", r))
                .unwrap_or_else(|| "response contained no candidates".to_string());
            Err(AiError::InvalidResponse(reason))
        }
    }
}

/// Pull the human-readable message out of an error body, falling back to the raw body
pub(crate) fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}
