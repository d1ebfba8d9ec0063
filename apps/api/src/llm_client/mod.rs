/// LLM Client — the single point of entry for all text-generation calls in Tender.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// Callers depend on [`TextGenerationBackend`] only, never on a provider type.
///
/// Calls are NOT retried: a failed call is reported once and the caller turns it
/// into an error-indicated analysis result.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Config, ConfigError};

pub mod gemini;
pub mod openai;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication failed (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned empty content")]
    EmptyContent,
}

/// A text-generation service: one prompt in, free text out.
#[async_trait]
pub trait TextGenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Which of the two compared backends produced a result.
/// Primary is rendered in the left column, Secondary in the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Primary,
    Secondary,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Primary, Backend::Secondary];

    pub fn label(self) -> &'static str {
        match self {
            Backend::Primary => "Google Gemini",
            Backend::Secondary => "GPT-4",
        }
    }

    pub fn model(self) -> &'static str {
        match self {
            Backend::Primary => gemini::MODEL,
            Backend::Secondary => openai::MODEL,
        }
    }
}

/// The two backends compared by every search.
#[derive(Clone)]
pub struct BackendPair {
    pub primary: Arc<dyn TextGenerationBackend>,
    pub secondary: Arc<dyn TextGenerationBackend>,
}

impl BackendPair {
    /// Builds provider clients from the configured credentials.
    /// Fails before any network call if a credential is missing or malformed.
    pub fn from_config(config: &Config, http: &Client) -> Result<Self, ConfigError> {
        let credentials = config.credentials()?;
        Ok(Self {
            primary: Arc::new(GeminiClient::new(
                http.clone(),
                credentials.google_api_key,
            )),
            secondary: Arc::new(OpenAiClient::new(
                http.clone(),
                credentials.openai_api_key,
            )),
        })
    }

    pub fn get(&self, backend: Backend) -> &dyn TextGenerationBackend {
        match backend {
            Backend::Primary => self.primary.as_ref(),
            Backend::Secondary => self.secondary.as_ref(),
        }
    }
}

/// Shared HTTP client; its connection pool is reused by both providers.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Error body shape shared by the Gemini and OpenAI APIs.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Reads a provider response, mapping non-2xx statuses to [`BackendError`].
pub(crate) async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(classify_failure(status.as_u16(), body));
    }

    Ok(serde_json::from_str(&body)?)
}

fn classify_failure(status: u16, body: String) -> BackendError {
    let message = serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    match status {
        401 | 403 => BackendError::Auth { status, message },
        _ => BackendError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unauthorized_as_auth() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        match classify_failure(401, body.to_string()) {
            BackendError::Auth { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Auth, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_gemini_invalid_key_as_api_error() {
        // Gemini reports a bad key as 400 INVALID_ARGUMENT
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        let err = classify_failure(400, body.to_string());
        assert!(matches!(err, BackendError::Api { status: 400, .. }));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_classify_keeps_raw_body_when_not_json() {
        let err = classify_failure(502, "Bad Gateway".to_string());
        assert_eq!(err.to_string(), "API error (status 502): Bad Gateway");
    }

    #[test]
    fn test_backend_labels_and_models() {
        assert_eq!(Backend::Primary.label(), "Google Gemini");
        assert_eq!(Backend::Secondary.label(), "GPT-4");
        assert_eq!(Backend::Primary.model(), "gemini-2.5-flash");
        assert_eq!(Backend::Secondary.model(), "gpt-4");
    }

    #[test]
    fn test_backend_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Backend::Primary).unwrap(),
            r#""primary""#
        );
        assert_eq!(
            serde_json::to_string(&Backend::Secondary).unwrap(),
            r#""secondary""#
        );
    }

    #[test]
    fn test_backend_pair_requires_credentials() {
        let http = build_http_client().unwrap();
        let config = Config {
            google_api_key: Some("g-key".to_string()),
            openai_api_key: None,
        };
        assert!(BackendPair::from_config(&config, &http).is_err());

        let config = Config {
            google_api_key: Some("g-key".to_string()),
            openai_api_key: Some("sk-key".to_string()),
        };
        assert!(BackendPair::from_config(&config, &http).is_ok());
    }
}
