//! Axum-based HTTP gateway for the journey custom activity.
//!
//! - `POST /execute`: signed per-contact execution
//! - `POST /save`, `/publish`, `/validate`: lifecycle acknowledgements
//! - `GET /health`
//! - request body size limit (64 KiB) and request timeout (30 s, or longer
//!   when the generation timeout needs it)

mod handlers;
mod server;

pub use server::{build_app, request_timeout, run_gateway, run_gateway_with_listener};

use crate::activity::ExecutionHandler;
use std::sync::Arc;

/// Maximum request body size (64 KiB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30 s) -- prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Minimum gap between the generation timeout and the route timeout.
pub const GENERATION_TIMEOUT_MARGIN_SECS: u64 = 5;

pub const EXECUTE_COMPLETED_BODY: &str = "Execution completed.";
pub const UNAUTHORIZED_BODY: &str = "Unauthorized";
pub const EXECUTE_FAILED_BODY: &str = "Execution failed.";

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ExecutionHandler>,
}
