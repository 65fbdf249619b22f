//! Conversation turn and history hint types.
//!
//! A [`ConversationTurn`] is the only persisted unit of state: one user message
//! paired with the reply produced for it. [`HistoryEntry`] is the caller-supplied
//! context that enriches a prompt and is never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One user-message/bot-reply pair.
///
/// Serialized as `{"user": ..., "bot": ..., "timestamp": ...}`. The storage
/// identifier is not part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// The caller's message.
    pub user: String,
    /// The generated reply, or a fallback string when generation degraded.
    pub bot: String,
    /// Creation time, used only for ordering.
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Build a turn stamped with the current time.
    pub fn now(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Speaker of a history hint entry.
///
/// Only `"user"` maps to [`HistoryRole::User`]; every other role the client
/// sends (`"assistant"`, `"bot"`, `null`, or none at all) is the assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum HistoryRole {
    User,
    #[default]
    Assistant,
}

impl HistoryRole {
    /// Label used when rendering the entry into a prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            HistoryRole::User => "User",
            HistoryRole::Assistant => "Assistant",
        }
    }
}

impl From<Option<String>> for HistoryRole {
    fn from(role: Option<String>) -> Self {
        match role.as_deref() {
            Some("user") => HistoryRole::User,
            _ => HistoryRole::Assistant,
        }
    }
}

/// A prior message supplied by the caller to give the model context.
///
/// Decoding is lenient: a missing role means assistant and a missing or
/// `null` text is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: HistoryRole,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl HistoryEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::Assistant,
            text: text.into(),
        }
    }
}
