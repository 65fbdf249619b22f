use thiserror::Error;

/// Errors from repository operations (used by trait definitions in chatline-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Why a call to the inference backend did not yield a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("inference backend unreachable: {0}")]
    Unreachable(String),

    #[error("inference backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("inference backend response had no reply field")]
    MissingReply,
}

/// Errors surfaced by the chat service to its callers.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no message received")]
    EmptyMessage,

    #[error("persistence failure: {0}")]
    Persistence(#[from] RepositoryError),
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_inference_status_display() {
        let err = InferenceError::Status {
            status: 404,
            body: "model not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "inference backend returned HTTP 404: model not found"
        );
    }

    #[test]
    fn test_chat_error_from_repository() {
        let err: ChatError = RepositoryError::Connection.into();
        assert!(matches!(err, ChatError::Persistence(RepositoryError::Connection)));
        assert!(err.to_string().contains("database connection error"));
    }
}
