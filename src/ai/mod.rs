/// Completion-API plumbing.
///
/// - `CompletionBackend` - the seam between the dialogue and the wire; tests
///   substitute mock backends here
/// - `openrouter` - the production backend, one POST per prompt
/// - `Completion` - the recovery policy wrapper: a single attempt, any
///   failure becomes the fixed apology string
mod openrouter;

pub use openrouter::OpenRouterClient;

use crate::format::{self, ErrorKind};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

pub type CompletionResult<T> = Result<T, CompletionError>;

/// One prompt-in/text-out call to the remote model, carrying the requesting
/// user's identity for correlation.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str, user_id: u64) -> CompletionResult<String>;
}

/// Backend wrapper applying the error-recovery policy: no retry, no backoff,
/// and every failure is terminal at this boundary. The caller always gets
/// text back.
#[derive(Clone)]
pub struct Completion {
    backend: Arc<dyn CompletionBackend>,
}

impl Completion {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn complete(&self, prompt: &str, user_id: u64) -> String {
        match self.backend.complete(prompt, user_id).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(user_id, error = %err, "completion request failed");
                format::format_error(ErrorKind::CompletionFailed)
            }
        }
    }
}
