use super::Config;
use crate::error::ConfigError;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Signing secret for `/execute` payloads. Never defaults to empty.
    pub fn jwt_secret(&self) -> Result<&str, ConfigError> {
        non_blank(self.auth.jwt_secret.as_deref()).ok_or(ConfigError::Missing {
            setting: "auth.jwt_secret",
            env_hint: "SFMC_JWT_SECRET",
        })
    }

    /// Generation-service credential. Never defaults to empty.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        non_blank(self.generation.api_key.as_deref()).ok_or(ConfigError::Missing {
            setting: "generation.api_key",
            env_hint: "GEMINI_API_KEY",
        })
    }

    /// Everything `serve` needs before it binds a socket.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt_secret()?;
        self.api_key()?;

        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ConfigError::Validation(format!(
                "generation.temperature must be within 0.0..=2.0, got {}",
                generation.temperature
            )));
        }
        if generation.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "generation.timeout_secs must be greater than zero".into(),
            ));
        }
        if generation.max_output_tokens == 0 {
            return Err(ConfigError::Validation(
                "generation.max_output_tokens must be greater than zero".into(),
            ));
        }
        if generation.model.trim().is_empty() {
            return Err(ConfigError::Validation("generation.model is empty".into()));
        }
        if !generation.base_url.starts_with("http://") && !generation.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "generation.base_url must be an http(s) URL, got {:?}",
                generation.base_url
            )));
        }
        Ok(())
    }
}
