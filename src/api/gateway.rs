//! Blocking-per-turn client for the hosted text-generation endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::error::Error;
use std::fmt;
use tracing::debug;

use crate::api::{GenerationRequest, RequestOptions, TextGenerationPayload, TextGenerationResponse};
use crate::utils::url::construct_api_url;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// What went wrong while talking to the inference backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// The request never completed at the transport level.
    Network,
    /// The credential is missing or was rejected.
    Authentication,
    /// The backend or the HTTP client gave up waiting.
    Timeout,
    /// The backend reported a failure for the model or sent an unusable body.
    Model,
    /// The backend is throttling this credential.
    RateLimited,
}

impl GenerationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationErrorKind::Network => "network error",
            GenerationErrorKind::Authentication => "authentication failed",
            GenerationErrorKind::Timeout => "request timed out",
            GenerationErrorKind::Model => "model error",
            GenerationErrorKind::RateLimited => "rate limited",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    cause: String,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, cause: impl Into<String>) -> Self {
        Self {
            kind,
            cause: cause.into(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(
            GenerationErrorKind::Authentication,
            "HF_TOKEN is not set; export a Hugging Face access token and restart",
        )
    }

    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        let kind = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationErrorKind::Authentication,
            StatusCode::TOO_MANY_REQUESTS => GenerationErrorKind::RateLimited,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                GenerationErrorKind::Timeout
            }
            _ => GenerationErrorKind::Model,
        };
        let summary = summarize_error_body(body).unwrap_or_else(|| status.to_string());
        Self::new(kind, format!("HTTP {}: {}", status.as_u16(), summary))
    }

    fn from_transport(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            GenerationErrorKind::Timeout
        } else {
            GenerationErrorKind::Network
        };
        Self::new(kind, err.to_string())
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation failed ({}): {}", self.kind.as_str(), self.cause)
    }
}

impl Error for GenerationError {}

/// Single request/response exchange with a text-generation backend.
///
/// Implementations make exactly one attempt per call; retries are the
/// caller's business.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Gateway for the Hugging Face serverless inference API.
#[derive(Clone)]
pub struct HfInferenceGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HfInferenceGateway {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, token)
    }

    /// Use a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }
}

#[async_trait]
impl InferenceGateway for HfInferenceGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let Some(token) = self.token.as_deref() else {
            return Err(GenerationError::missing_credential());
        };

        let url = construct_api_url(&self.base_url, &format!("models/{}", request.model_id));
        let payload = TextGenerationPayload {
            inputs: &request.formatted_prompt,
            parameters: &request.parameters,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        debug!(model = %request.model_id, %url, "Sending text-generation request");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(GenerationError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GenerationError::from_transport)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Text-generation request rejected");
            return Err(GenerationError::from_status(status, &body));
        }

        parse_generation_body(&body).map(|text| text.trim().to_string())
    }
}

fn parse_generation_body(body: &str) -> Result<String, GenerationError> {
    match serde_json::from_str::<TextGenerationResponse>(body) {
        Ok(response) => response.into_text().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::Model, "backend returned no generations")
        }),
        Err(_) => {
            let summary = summarize_error_body(body)
                .unwrap_or_else(|| "backend returned an unreadable response".to_string());
            Err(GenerationError::new(GenerationErrorKind::Model, summary))
        }
    }
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    let summary = value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .or_else(|| {
            value.get("error").and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.to_string()),
                serde_json::Value::Array(items) => items
                    .iter()
                    .find_map(|item| item.as_str().map(str::to_owned)),
                _ => None,
            })
        })
        .or_else(|| {
            value
                .get("message")
                .and_then(|v| v.as_str().map(str::to_owned))
        });

    summary.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Collapse an error body into a single readable line.
fn summarize_error_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(summary) = extract_error_summary(&value).filter(|s| !s.is_empty()) {
            return Some(summary);
        }
    }

    Some(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}
