//! Chat turn handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chatline_types::conversation::HistoryEntry;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for a chat turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message. Missing and empty are both rejected.
    #[serde(default)]
    pub message: Option<String>,
    /// Prior messages for prompt context only; not persisted. Kept as raw
    /// JSON so a bad hint never rejects an otherwise valid message.
    #[serde(default)]
    pub history: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// POST /api/chat - Generate a reply and persist the turn.
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected chat body");
        AppError::NoMessage
    })?;

    let history = history_hint(body.history);
    let reply = state
        .chat_service
        .submit_turn(body.message.as_deref(), &history)
        .await?;

    Ok(Json(ChatReply { reply }))
}

/// Decode the caller's history hint, skipping entries that are not objects
/// with a usable role and text. Anything other than an array is ignored.
fn history_hint(raw: Option<Value>) -> Vec<HistoryEntry> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };

    let total = items.len();
    let entries: Vec<HistoryEntry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if entries.len() < total {
        tracing::debug!(
            skipped = total - entries.len(),
            "Dropped malformed history entries"
        );
    }
    entries
}
