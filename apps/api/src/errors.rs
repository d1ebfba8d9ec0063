use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Backend failures are not represented here: they are folded into
/// error-indicated analysis results and never fail a whole request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(e) => format!(
                "{e}. Set it in the environment or in a .env file and restart the server."
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {e}");
                "CONFIGURATION_ERROR"
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GOOGLE_API_KEY;

    #[test]
    fn test_configuration_error_maps_to_503() {
        let err = AppError::from(ConfigError::Missing {
            key: GOOGLE_API_KEY,
        });
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.user_message().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_malformed_key_message_includes_reason() {
        let err = AppError::from(ConfigError::Malformed {
            key: GOOGLE_API_KEY,
            reason: "value is blank",
        });
        assert!(err.user_message().contains("value is blank"));
        assert!(err.user_message().contains(".env"));
    }
}
