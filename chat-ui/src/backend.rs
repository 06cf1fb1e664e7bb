//! The reasoning backend, seen from the client as one request / one response.

use async_trait::async_trait;
use chat_types::ChatResponse;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP error {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl BackendError {
    /// True when the backend answered but the body did not have the expected shape.
    pub fn is_shape_failure(&self) -> bool {
        matches!(self, BackendError::Decode(_))
    }
}

/// Answers a single question with a final reply plus its execution trace.
///
/// Transport, auth and timeout policy belong to the implementation; callers
/// treat every `Err` the same way.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn ask(&self, message: &str) -> Result<ChatResponse, BackendError>;
}
