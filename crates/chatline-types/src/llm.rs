//! Inference backend request/response types.
//!
//! Models the Ollama-style `/api/generate` wire format and the tagged outcome
//! the inference client hands back to the chat service.

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Fallback reply when the backend answered but produced no reply text.
pub const FALLBACK_EMPTY_REPLY: &str = "I'm not sure how to answer that.";

/// Fallback reply when the call to the backend itself failed.
pub const FALLBACK_BACKEND_ERROR: &str = "Error talking to the AI model.";

/// Body of a non-streaming generate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Body of a generate response. Only the reply field matters; everything else
/// the backend sends (timings, context tokens) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Result of one inference call.
///
/// `Degraded` keeps the cause for logging while carrying the user-visible
/// fallback text; callers flatten it with [`InferenceOutcome::into_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    Reply(String),
    Degraded {
        fallback: String,
        cause: InferenceError,
    },
}

impl InferenceOutcome {
    /// Degrade with the fallback text matching the cause.
    pub fn degraded(cause: InferenceError) -> Self {
        let fallback = match cause {
            InferenceError::MissingReply => FALLBACK_EMPTY_REPLY,
            _ => FALLBACK_BACKEND_ERROR,
        };
        InferenceOutcome::Degraded {
            fallback: fallback.to_string(),
            cause,
        }
    }

    /// The text to show the user and persist.
    pub fn into_reply(self) -> String {
        match self {
            InferenceOutcome::Reply(text) => text,
            InferenceOutcome::Degraded { fallback, .. } => fallback,
        }
    }
}
