use std::fmt;

use thiserror::Error;

/// Credential for the primary backend (Google Gemini).
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Credential for the secondary backend (OpenAI).
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Required environment variable '{key}' is not set")]
    Missing { key: &'static str },

    #[error("Environment variable '{key}' is malformed: {reason}")]
    Malformed {
        key: &'static str,
        reason: &'static str,
    },
}

/// Application configuration loaded from environment variables (and `.env`).
///
/// Missing credentials do not stop the server from starting. They are reported
/// by [`Config::credentials`] the first time a search needs them.
#[derive(Clone, Default)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

/// Validated credentials for both backends.
#[derive(Clone)]
pub struct Credentials {
    pub google_api_key: String,
    pub openai_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            google_api_key: std::env::var(GOOGLE_API_KEY).ok(),
            openai_api_key: std::env::var(OPENAI_API_KEY).ok(),
        }
    }

    /// Validates both credentials. Primary is checked first.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            google_api_key: require_key(GOOGLE_API_KEY, self.google_api_key.as_deref())?,
            openai_api_key: require_key(OPENAI_API_KEY, self.openai_api_key.as_deref())?,
        })
    }

    /// Every credential problem, for the startup warning.
    pub fn problems(&self) -> Vec<ConfigError> {
        [
            require_key(GOOGLE_API_KEY, self.google_api_key.as_deref()).err(),
            require_key(OPENAI_API_KEY, self.openai_api_key.as_deref()).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn require_key(key: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing { key })?.trim();

    if value.is_empty() {
        return Err(ConfigError::Malformed {
            key,
            reason: "value is blank",
        });
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::Malformed {
            key,
            reason: "value contains whitespace or control characters",
        });
    }

    Ok(value.to_string())
}
