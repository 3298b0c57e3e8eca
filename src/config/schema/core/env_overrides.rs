use super::Config;
use crate::config::Locale;
use crate::error::ConfigError;
use std::path::PathBuf;

/// First non-empty value among `keys`, trimmed.
fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

impl Config {
    /// Layer process environment over whatever the config file set.
    ///
    /// Secrets are normally supplied this way (`SFMC_JWT_SECRET`,
    /// `GEMINI_API_KEY`) so they never have to live in a file.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(port_str) = first_env(&["JOURNEY_DRAFTER_PORT", "PORT"]) {
            self.gateway.port = port_str
                .parse::<u16>()
                .map_err(|_| ConfigError::Validation(format!("invalid port {port_str:?}")))?;
        }

        if let Some(host) = first_env(&["JOURNEY_DRAFTER_HOST"]) {
            self.gateway.host = host;
        }

        if let Some(dir) = first_env(&["JOURNEY_DRAFTER_PUBLIC_DIR"]) {
            self.gateway.public_dir = Some(PathBuf::from(dir));
        }

        if let Some(secret) = first_env(&["JOURNEY_DRAFTER_JWT_SECRET", "SFMC_JWT_SECRET"]) {
            self.auth.jwt_secret = Some(secret);
        }

        if let Some(key) = first_env(&["GEMINI_API_KEY", "GOOGLE_API_KEY"]) {
            self.generation.api_key = Some(key);
        }

        if let Some(model) = first_env(&["JOURNEY_DRAFTER_MODEL"]) {
            self.generation.model = model;
        }

        if let Some(timeout_str) = first_env(&["JOURNEY_DRAFTER_TIMEOUT_SECS"]) {
            self.generation.timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
                ConfigError::Validation(format!("invalid generation timeout {timeout_str:?}"))
            })?;
        }

        if let Some(locale) = first_env(&["JOURNEY_DRAFTER_LOCALE"]) {
            self.prompt.locale = locale.parse::<Locale>().map_err(ConfigError::Validation)?;
        }

        Ok(())
    }
}
