use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Secrets read from the process environment at startup.
pub struct Config {
    pub bot_token: String,
    pub openrouter_api_key: String,
}

impl Config {
    /// A missing variable fails here, before anything connects.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: require("TELEGRAM_BOT_TOKEN")?,
            openrouter_api_key: require("OPENROUTER_API_KEY")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
