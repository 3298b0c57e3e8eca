mod builder;
mod engine;

pub use builder::{GenerationRequest, PromptBuilder};
pub use engine::TeraEngine;
