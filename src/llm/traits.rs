use super::types::GenerationResult;
use crate::error::GenerationError;
use crate::prompt::GenerationRequest;
use std::future::Future;
use std::pin::Pin;

pub type GenerationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationResult, GenerationError>> + Send + 'a>>;

/// Text-generation backend that turns a rendered prompt into a draft.
pub trait DraftGenerator: Send + Sync {
    /// Provider identifier used in logs and errors (e.g. "gemini").
    fn name(&self) -> &str;

    /// One request, no retries.
    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> GenerationFuture<'a>;
}
