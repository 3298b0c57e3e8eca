pub mod schema;

pub use schema::{
    AuthConfig, Config, GatewayConfig, GenerationConfig, Locale, LogConfig, LogFormat,
    PromptConfig,
};
