use thiserror::Error;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    MissingCredential(String),

    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

/// Credentials and endpoint for the chat-completion provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
}

/// Application configuration loaded from environment variables.
///
/// A missing API key does not fail loading: the server still has to come up
/// and tell the user why it cannot tune anything. Callers check
/// [`Config::require_openai`] before building the LLM client.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    openai: Result<OpenAiConfig, ConfigError>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let openai = require(&lookup, "OPENAI_API_KEY").map(|api_key| OpenAiConfig {
            api_key,
            api_base: lookup("OPENAI_API_BASE")
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
        });

        Ok(Config { port, openai })
    }

    pub fn require_openai(&self) -> Result<&OpenAiConfig, ConfigError> {
        self.openai.as_ref().map_err(|e| e.clone())
    }
}

/// A blank value counts as missing.
fn require<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingCredential(key.to_string()))
}
