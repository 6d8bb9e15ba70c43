//! Environment configuration. All keys are required; the bot refuses to start without them.

use std::env;
use thiserror::Error;

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Older deployments name the bot token `TOKEN`; read when `DISCORD_TOKEN` is unset.
pub const LEGACY_TOKEN_VAR: &str = "TOKEN";
pub const CSE_ID_VAR: &str = "CSE_ID";
pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable `{0}` is missing or empty")]
    Missing(&'static str),
}

#[derive(Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub cse_id: String,
    pub api_key: String,
}

// Keeps credentials out of debug logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("cse_id", &self.cse_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl BotConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| present(key).ok_or(ConfigError::Missing(key));

        let discord_token = present(TOKEN_VAR)
            .or_else(|| present(LEGACY_TOKEN_VAR))
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        Ok(Self {
            discord_token,
            cse_id: require(CSE_ID_VAR)?,
            api_key: require(API_KEY_VAR)?,
        })
    }
}
