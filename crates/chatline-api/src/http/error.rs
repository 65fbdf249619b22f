//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! The chat endpoint always answers with `{"reply": ...}` so the client can
//! render failures inline; the history endpoint answers with `{"error": ...}`.
//! Internal error details are logged, never returned.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use chatline_types::error::ChatError;

pub const NO_MESSAGE_REPLY: &str = "No message received.";
pub const GENERIC_FAILURE_REPLY: &str = "Something went wrong!";
pub const HISTORY_FAILURE: &str = "Failed to retrieve conversations";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty message, or an undecodable chat body.
    NoMessage,
    /// A chat turn could not be completed.
    TurnFailed(String),
    /// Conversation history could not be read.
    HistoryUnavailable(String),
    /// Anything unexpected, including handler panics.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::EmptyMessage => AppError::NoMessage,
            ChatError::Persistence(inner) => AppError::TurnFailed(inner.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NoMessage => (StatusCode::BAD_REQUEST, json!({ "reply": NO_MESSAGE_REPLY })),
            AppError::TurnFailed(detail) => {
                tracing::error!(error = %detail, "Chat turn failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "reply": GENERIC_FAILURE_REPLY }),
                )
            }
            AppError::HistoryUnavailable(detail) => {
                tracing::error!(error = %detail, "Conversation history unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": HISTORY_FAILURE }),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "reply": GENERIC_FAILURE_REPLY }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn panic_detail(err: Box<dyn Any + Send + 'static>) -> String {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    format!("handler panicked: {detail}")
}

/// Response for a panicked handler; plugged into `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal(panic_detail(err)).into_response()
}

/// Panic response for the history route, keeping its `{"error": ...}` shape.
pub fn history_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    AppError::HistoryUnavailable(panic_detail(err)).into_response()
}
