//! Custom error types for address translation

use std::fmt;
use thiserror::Error;

/// Address translation errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The request could not be sent or no response was received
    #[error("Transport error: {message}")]
    Transport {
        message: String,
    },

    /// The remote endpoint answered with a non-success status
    #[error("Remote error: {status} {status_text}")]
    Remote {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// The response did not carry `choices[0].message.content`
    #[error("Malformed response: {message}")]
    MalformedResponse {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// A spawned translation task did not complete
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification of a [`TranslationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Remote,
    MalformedResponse,
    Config,
    Internal,
    Io,
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Remote => write!(f, "remote"),
            ErrorKind::MalformedResponse => write!(f, "malformed_response"),
            ErrorKind::Config => write!(f, "config"),
            ErrorKind::Internal => write!(f, "internal"),
            ErrorKind::Io => write!(f, "io"),
            ErrorKind::Serialization => write!(f, "serialization"),
        }
    }
}

impl TranslationError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::Transport { .. } => ErrorKind::Transport,
            TranslationError::Remote { .. } => ErrorKind::Remote,
            TranslationError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            TranslationError::Config { .. } => ErrorKind::Config,
            TranslationError::Internal(_) => ErrorKind::Internal,
            TranslationError::Io(_) => ErrorKind::Io,
            TranslationError::Json(_) | TranslationError::Yaml(_) => ErrorKind::Serialization,
        }
    }

    /// HTTP status of the remote answer, if the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body attached to a remote error
    pub fn body(&self) -> Option<&str> {
        match self {
            TranslationError::Remote { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure happened while talking to the remote service
    pub fn is_remote_call_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport | ErrorKind::Remote | ErrorKind::MalformedResponse
        )
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_exposes_status_and_body() {
        let err = TranslationError::Remote {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: Some(r#"{"error":{"code":"1000"}}"#.to_string()),
        };

        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(r#"{"error":{"code":"1000"}}"#));
        assert!(err.is_remote_call_failure());
        assert_eq!(err.to_string(), "Remote error: 401 Unauthorized");
    }

    #[test]
    fn test_non_remote_errors_have_no_status() {
        let err = TranslationError::MalformedResponse {
            message: "no choices".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.is_remote_call_failure());

        let err = TranslationError::Config {
            message: "bad url".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(!err.is_remote_call_failure());
    }

    #[test]
    fn test_json_error_is_serialization() {
        let err: TranslationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
