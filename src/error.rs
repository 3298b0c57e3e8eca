use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `journey-drafter`.
///
/// Wraps the errors that can abort building an `ExecutionHandler`. Request
/// authentication and generation failures are matched per subsystem to pick
/// an outcome; startup and CLI code use `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum DrafterError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {setting} (set {env_hint})")]
    Missing {
        setting: &'static str,
        env_hint: &'static str,
    },

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Request authentication errors ──────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request body is not a compact JWS token")]
    Malformed,

    #[error("token segment {segment} is not valid base64url")]
    Encoding { segment: &'static str },

    #[error("token {segment} is not valid JSON: {message}")]
    Json {
        segment: &'static str,
        message: String,
    },

    #[error("unsupported signing algorithm {0:?}")]
    Algorithm(String),

    #[error("signature mismatch")]
    Signature,

    #[error("token expired at {exp}")]
    Expired { exp: i64 },

    #[error("token not valid before {nbf}")]
    NotYetValid { nbf: i64 },

    #[error("invalid signing key: {0}")]
    Key(String),
}

// ─── Generation service errors ──────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} returned {status}: {message}")]
    Status {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("provider {provider} returned an empty response")]
    Empty { provider: String },

    #[error("provider {provider} timed out after {secs}s")]
    Timeout { provider: String, secs: u64 },

    #[error("draft is not a subject/body document: {0}")]
    UnparsableDraft(String),
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),

    #[error("template not found: {0}")]
    NotFound(String),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, DrafterError>;
