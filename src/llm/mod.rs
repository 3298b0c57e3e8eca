pub mod gemini;
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

pub use gemini::GeminiDraftClient;
pub use http_client::build_provider_client_with_timeout;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::{DraftGenerator, GenerationFuture};
pub use types::GenerationResult;
