use super::{ContactAttributes, EmailDraft, RequestAuthenticator};
use crate::config::Config;
use crate::error::{GenerationError, Result};
use crate::llm::{DraftGenerator, GeminiDraftClient, GenerationResult};
use crate::prompt::{GenerationRequest, PromptBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// Last stage an execution reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStage {
    Received,
    Authenticating,
    Normalizing,
    Prompting,
    Generating,
    Completed,
}

impl ExecutionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Authenticating => "authenticating",
            Self::Normalizing => "normalizing",
            Self::Prompting => "prompting",
            Self::Generating => "generating",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Draft generated for the contact.
    Completed { contact_key: String, draft: String },
    Unauthorized,
    /// Generation could not produce a usable draft.
    Failed { contact_key: String },
}

/// Runs one `/execute` call: verify, normalize, prompt, generate.
///
/// Holds only read-only state, so a single handler is shared by every
/// in-flight execution.
pub struct ExecutionHandler {
    authenticator: RequestAuthenticator,
    prompts: PromptBuilder,
    generator: Arc<dyn DraftGenerator>,
    generation_timeout: Duration,
    strict_drafts: bool,
}

impl ExecutionHandler {
    pub fn new(
        authenticator: RequestAuthenticator,
        prompts: PromptBuilder,
        generator: Arc<dyn DraftGenerator>,
        generation_timeout: Duration,
        strict_drafts: bool,
    ) -> Self {
        Self {
            authenticator,
            prompts,
            generator,
            generation_timeout,
            strict_drafts,
        }
    }

    /// Wire the Gemini client and the configured prompt locale.
    pub fn from_config(config: &Config) -> Result<Self> {
        let authenticator = RequestAuthenticator::from_config(config)?;
        let prompts = PromptBuilder::new(config.prompt.locale)?;
        let generator: Arc<dyn DraftGenerator> = Arc::new(GeminiDraftClient::from_config(config)?);
        Ok(Self::new(
            authenticator,
            prompts,
            generator,
            Duration::from_secs(config.generation.timeout_secs),
            config.generation.strict_draft_parsing,
        ))
    }

    /// Upper bound on one generation call.
    pub fn generation_timeout(&self) -> Duration {
        self.generation_timeout
    }

    pub async fn execute(&self, body: &[u8]) -> ExecutionOutcome {
        let span = tracing::info_span!(
            "execute",
            execution_id = %uuid::Uuid::new_v4(),
            contact_key = tracing::field::Empty,
        );
        self.run(body).instrument(span).await
    }

    async fn run(&self, body: &[u8]) -> ExecutionOutcome {
        tracing::debug!(
            stage = ExecutionStage::Received.as_str(),
            bytes = body.len(),
            "execute received"
        );

        let claims = match self.authenticator.verify(body) {
            Ok(claims) => claims,
            Err(error) => {
                tracing::warn!(
                    stage = ExecutionStage::Authenticating.as_str(),
                    %error,
                    "rejecting unauthenticated execute call"
                );
                return ExecutionOutcome::Unauthorized;
            }
        };

        let contact_key = claims.contact_key();
        let logged_key = if contact_key.is_empty() {
            "unknown"
        } else {
            contact_key.as_str()
        };
        tracing::Span::current().record("contact_key", logged_key);
        tracing::info!(
            contact_key = logged_key,
            journey_id = claims.journey_id.as_deref().unwrap_or_default(),
            activity_id = claims.activity_id.as_deref().unwrap_or_default(),
            activity_object_id = claims.activity_object_id.as_deref().unwrap_or_default(),
            definition_instance_id = claims.definition_instance_id.as_deref().unwrap_or_default(),
            activity_instance_id = claims.activity_instance_id.as_deref().unwrap_or_default(),
            mode = ?claims.mode,
            "execute authenticated"
        );

        let attributes = ContactAttributes::from_arguments(&claims.in_arguments);
        tracing::debug!(
            contact_key = logged_key,
            stage = ExecutionStage::Normalizing.as_str(),
            attributes = attributes.len(),
            "arguments normalized"
        );

        let request = match self.prompts.build(&attributes) {
            Ok(request) => request,
            Err(error) => {
                tracing::error!(
                    contact_key = logged_key,
                    stage = ExecutionStage::Prompting.as_str(),
                    %error,
                    "prompt rendering failed"
                );
                return ExecutionOutcome::Failed { contact_key };
            }
        };

        let (draft, model_version) = match self.generate(&request).await {
            Ok(result) => match self.accept_draft(result) {
                Ok(accepted) => accepted,
                Err(error) => {
                    tracing::error!(
                        contact_key = logged_key,
                        stage = ExecutionStage::Generating.as_str(),
                        %error,
                        "generated draft rejected"
                    );
                    return ExecutionOutcome::Failed { contact_key };
                }
            },
            Err(error) => {
                tracing::error!(
                    contact_key = logged_key,
                    stage = ExecutionStage::Generating.as_str(),
                    provider = self.generator.name(),
                    %error,
                    "draft generation failed"
                );
                return ExecutionOutcome::Failed { contact_key };
            }
        };

        tracing::info!(
            contact_key = logged_key,
            stage = ExecutionStage::Completed.as_str(),
            model_version = model_version.as_deref().unwrap_or_default(),
            draft = %draft,
            "draft generated; persistence pending"
        );
        ExecutionOutcome::Completed { contact_key, draft }
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResult, GenerationError> {
        match tokio::time::timeout(self.generation_timeout, self.generator.generate(request)).await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout {
                provider: self.generator.name().to_string(),
                secs: self.generation_timeout.as_secs(),
            }),
        }
    }

    /// Validate the generated text as a subject/body draft. Lenient mode keeps
    /// unparsable text as-is.
    fn accept_draft(
        &self,
        result: GenerationResult,
    ) -> std::result::Result<(String, Option<String>), GenerationError> {
        match EmailDraft::parse(&result.text) {
            Ok(draft) => {
                tracing::debug!(subject = %draft.subject, "draft parsed");
            }
            Err(error) if !self.strict_drafts => {
                tracing::warn!(%error, "accepting unstructured draft text");
            }
            Err(error) => return Err(error),
        }
        Ok((result.text, result.model_version))
    }
}
