use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Gemini API key
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Upper bound on a single generation call (default: 20)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Reject generated text that is not a subject/body JSON document
    #[serde(default = "default_true")]
    pub strict_draft_parsing: bool,
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_true() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
            strict_draft_parsing: true,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("strict_draft_parsing", &self.strict_draft_parsing)
            .finish()
    }
}
