use crate::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Subject/body pair the generation service is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    #[serde(alias = "asunto")]
    pub subject: String,
    #[serde(alias = "cuerpo")]
    pub body: String,
}

impl EmailDraft {
    /// Parse generated text, tolerating a surrounding markdown code fence.
    pub fn parse(text: &str) -> Result<Self, GenerationError> {
        let json = strip_code_fence(text);
        let draft: Self = serde_json::from_str(json)
            .map_err(|e| GenerationError::UnparsableDraft(e.to_string()))?;

        if draft.subject.trim().is_empty() {
            return Err(GenerationError::UnparsableDraft("subject is empty".into()));
        }
        if draft.body.trim().is_empty() {
            return Err(GenerationError::UnparsableDraft("body is empty".into()));
        }
        Ok(draft)
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, `JSON`, ...) on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
