//! InferenceClient trait definition.
//!
//! Implementations live in chatline-infra (e.g., `OllamaClient`). Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).

use chatline_types::llm::InferenceOutcome;

/// A text-generation backend called once per chat turn.
///
/// `generate` has no error type: every failure is folded into
/// [`InferenceOutcome::Degraded`] so the chat service can always persist a
/// reply.
pub trait InferenceClient: Send + Sync {
    /// Model identifier sent to the backend (for logging).
    fn model(&self) -> &str;

    /// Generate a reply for a fully rendered prompt.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = InferenceOutcome> + Send;
}
