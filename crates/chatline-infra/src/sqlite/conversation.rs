//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `chatline-core` using sqlx with
//! split read/write pools. Each turn is one INSERT on the single writer
//! connection; listing is a full scan ordered by timestamp.

use chatline_core::repository::conversation::ConversationRepository;
use chatline_types::conversation::ConversationTurn;
use chatline_types::error::RepositoryError;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fixed-width RFC 3339 so that lexical order in SQLite equals time order.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// ConversationRepository impl
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn append(&self, turn: &ConversationTurn) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO conversations (id, user_text, bot_text, timestamp)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(&turn.user)
        .bind(&turn.bot)
        .bind(format_datetime(&turn.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ConversationTurn>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT user_text, bot_text, timestamp FROM conversations
               ORDER BY timestamp ASC, seq ASC"#,
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_sqlx_error)?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let user: String = row.try_get("user_text").map_err(map_sqlx_error)?;
            let bot: String = row.try_get("bot_text").map_err(map_sqlx_error)?;
            let timestamp: String = row.try_get("timestamp").map_err(map_sqlx_error)?;

            turns.push(ConversationTurn {
                user,
                bot,
                timestamp: parse_datetime(&timestamp)?,
            });
        }
        Ok(turns)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
