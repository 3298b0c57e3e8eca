//! Google Gemini `generateContent` client used to draft contact emails.
//!
//! The API key travels in the `x-goog-api-key` header so request URLs (which
//! show up in transport errors) never carry it.

use crate::config::{Config, GenerationConfig};
use crate::error::{ConfigError, GenerationError};
use crate::llm::{
    build_provider_client_with_timeout, sanitize_api_error,
    traits::{DraftGenerator, GenerationFuture},
    types::GenerationResult,
};
use crate::prompt::GenerationRequest;
use reqwest::Client;

mod types;
use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig as WireConfig, Part,
};

const PROVIDER: &str = "gemini";

pub struct GeminiDraftClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
    client: Client,
}

impl GeminiDraftClient {
    pub fn new(api_key: &str, settings: &GenerationConfig) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            client: build_provider_client_with_timeout(settings.timeout_secs),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_key()?, &config.generation))
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url,
            Self::model_name(&self.model)
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: WireConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
                response_mime_type: "application/json",
            },
        }
    }

    fn request_error(error: &reqwest::Error) -> GenerationError {
        GenerationError::Request {
            provider: PROVIDER.to_string(),
            message: sanitize_api_error(&error.to_string()),
        }
    }

    async fn call_api(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Self::request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GenerateContentResponse>(&error_text)
                .ok()
                .and_then(|body| body.error)
                .map_or(error_text, |err| err.message);
            return Err(GenerationError::Status {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: sanitize_api_error(&message),
            });
        }

        let result: GenerateContentResponse =
            response.json().await.map_err(|e| Self::request_error(&e))?;

        if let Some(err) = result.error.as_ref() {
            return Err(GenerationError::Request {
                provider: PROVIDER.to_string(),
                message: sanitize_api_error(&err.message),
            });
        }

        Ok(result)
    }

    fn extract_text(result: &GenerateContentResponse) -> Result<String, GenerationError> {
        let candidate = result.candidates.as_ref().and_then(|c| c.first());

        let mut out = String::new();
        if let Some(content) = candidate.and_then(|c| c.content.as_ref()) {
            for text in content.parts.iter().filter_map(|part| part.text.as_deref()) {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }

        if out.trim().is_empty() {
            let reason = result
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref())
                .or_else(|| candidate.and_then(|c| c.finish_reason.as_deref()));
            if let Some(reason) = reason {
                tracing::warn!(provider = PROVIDER, reason, "generation returned no text");
            }
            return Err(GenerationError::Empty {
                provider: PROVIDER.to_string(),
            });
        }

        Ok(out)
    }
}

impl DraftGenerator for GeminiDraftClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> GenerationFuture<'a> {
        Box::pin(async move {
            let wire = self.build_request(request.as_str());
            let result = self.call_api(&wire).await?;
            let text = Self::extract_text(&result)?;
            Ok(GenerationResult {
                text,
                model_version: result.model_version,
            })
        })
    }
}
