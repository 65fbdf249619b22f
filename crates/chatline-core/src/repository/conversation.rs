//! Conversation repository trait definition.
//!
//! Append-only storage for conversation turns. There is no update,
//! delete, or filtered query.

use chatline_types::conversation::ConversationTurn;
use chatline_types::error::RepositoryError;

/// Repository trait for conversation turn persistence.
///
/// Implementations live in chatline-infra (e.g., `SqliteConversationRepository`).
/// Each `append` must be a single atomic write so concurrent appends never
/// merge or drop turns.
pub trait ConversationRepository: Send + Sync {
    /// Persist one turn.
    fn append(
        &self,
        turn: &ConversationTurn,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Every stored turn, ordered by timestamp ASC.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationTurn>, RepositoryError>> + Send;
}
