//! Per-contact execution pipeline for the journey custom activity.
//!
//! `/execute` bodies flow through [`RequestAuthenticator`] →
//! [`ContactAttributes`] → [`crate::prompt::PromptBuilder`] →
//! [`crate::llm::DraftGenerator`], orchestrated by [`ExecutionHandler`].

mod attributes;
mod auth;
mod claims;
mod draft;
mod execution;

pub use attributes::ContactAttributes;
pub use auth::RequestAuthenticator;
pub use claims::SignedClaims;
pub use draft::EmailDraft;
pub use execution::{ExecutionHandler, ExecutionOutcome, ExecutionStage};
