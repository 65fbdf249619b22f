//! Chat service orchestrating one conversation turn end to end.
//!
//! ChatService coordinates the PromptBuilder, an InferenceClient, and a
//! ConversationRepository. Each call is independent: there is no session state
//! shared between requests, and the repository is the only shared resource.

use chatline_types::conversation::{ConversationTurn, HistoryEntry};
use chatline_types::error::ChatError;
use chatline_types::llm::InferenceOutcome;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::chat::prompt::PromptBuilder;
use crate::llm::client::InferenceClient;
use crate::repository::conversation::ConversationRepository;

/// Orchestrates the chat turn pipeline.
///
/// Generic over `ConversationRepository` and `InferenceClient` to maintain
/// clean architecture (chatline-core never depends on chatline-infra).
pub struct ChatService<R: ConversationRepository, I: InferenceClient> {
    repo: R,
    inference: I,
    persona: String,
}

impl<R: ConversationRepository, I: InferenceClient> ChatService<R, I> {
    /// Create a new chat service.
    pub fn new(repo: R, inference: I, persona: impl Into<String>) -> Self {
        Self {
            repo,
            inference,
            persona: persona.into(),
        }
    }

    /// Access the conversation repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Access the inference client.
    pub fn inference(&self) -> &I {
        &self.inference
    }

    /// Run one chat turn and return the reply.
    ///
    /// Steps, strictly in order: validate, build prompt, generate, append.
    /// A missing or empty message short-circuits before any backend call.
    /// Inference failures degrade to a fallback reply which is still
    /// persisted. A failed append fails the whole turn and the reply is
    /// discarded.
    pub async fn submit_turn(
        &self,
        message: Option<&str>,
        history: &[HistoryEntry],
    ) -> Result<String, ChatError> {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => return Err(ChatError::EmptyMessage),
        };

        let prompt = PromptBuilder::build(&self.persona, history, message);
        debug!(
            history_len = history.len(),
            prompt_chars = prompt.len(),
            model = self.inference.model(),
            "Prompt built"
        );

        let outcome = self.inference.generate(&prompt).await;
        if let InferenceOutcome::Degraded { cause, .. } = &outcome {
            warn!(error = %cause, "Inference degraded to fallback reply");
        }
        let reply = outcome.into_reply();

        let turn = ConversationTurn {
            user: message.to_string(),
            bot: reply,
            timestamp: Utc::now(),
        };

        if let Err(e) = self.repo.append(&turn).await {
            error!(error = %e, "Failed to persist conversation turn");
            return Err(ChatError::Persistence(e));
        }

        info!(reply_chars = turn.bot.len(), "Conversation turn saved");
        Ok(turn.bot)
    }

    /// All persisted turns, oldest first.
    pub async fn list_turns(&self) -> Result<Vec<ConversationTurn>, ChatError> {
        let turns = self.repo.list_all().await.map_err(|e| {
            error!(error = %e, "Failed to load conversation history");
            ChatError::Persistence(e)
        })?;
        debug!(turns = turns.len(), "Conversation history loaded");
        Ok(turns)
    }
}
