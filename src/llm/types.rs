/// Raw text produced by the generation service for one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    /// Model version reported by the service, when it reports one.
    pub model_version: Option<String>,
}

impl GenerationResult {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_version: None,
        }
    }
}
