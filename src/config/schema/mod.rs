mod auth;
mod core;
mod gateway;
mod generation;
mod observability;
mod prompt;

pub use auth::AuthConfig;
pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use generation::GenerationConfig;
pub use observability::{LogConfig, LogFormat};
pub use prompt::{Locale, PromptConfig};
