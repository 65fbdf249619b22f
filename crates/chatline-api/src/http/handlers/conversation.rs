//! Conversation history handler.

use axum::extract::State;
use axum::Json;

use chatline_types::conversation::ConversationTurn;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/conversations - Every stored turn, oldest first.
pub async fn list_conversations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConversationTurn>>, AppError> {
    let turns = state
        .chat_service
        .list_turns()
        .await
        .map_err(|e| AppError::HistoryUnavailable(e.to_string()))?;

    Ok(Json(turns))
}
