//! Error types for SPARQL protocol operations

use std::fmt;
use thiserror::Error;

/// Why a request was interrupted rather than answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterruptReason {
    /// The store reported that the query exceeded its `timeout`
    QueryTimeout,
    /// The store answered 503
    ServiceUnavailable,
    /// No pooled connection became free within the pool wait
    PoolExhausted,
    /// A local connect or read timeout elapsed
    TransportTimeout,
}

impl fmt::Display for InterruptReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterruptReason::QueryTimeout => "query timeout",
            InterruptReason::ServiceUnavailable => "service unavailable",
            InterruptReason::PoolExhausted => "connection pool exhausted",
            InterruptReason::TransportTimeout => "transport timeout",
        })
    }
}

/// Errors from SPARQL protocol operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The endpoint rejected the credentials (401)
    #[error("Unauthorized ({status}): {detail}")]
    Unauthorized { status: u16, detail: String },

    /// The request was cut short; see [`InterruptReason`]
    #[error("Query interrupted ({reason}): {detail}")]
    Interrupted {
        reason: InterruptReason,
        detail: String,
    },

    /// The store could not parse the query or update
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// The store could not parse RDF data sent with the request
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// The store does not accept the RDF format
    #[error("Unsupported RDF format: {0}")]
    UnsupportedFormat(String),

    /// The store does not accept the query language
    #[error("Unsupported query language: {0}")]
    UnsupportedQueryLanguage(String),

    /// Any other failure response, with the raw payload
    #[error("SPARQL endpoint returned {status}: {detail}")]
    Protocol { status: u16, detail: String },

    /// The repository has no usable query endpoint
    #[error("SPARQL repository not initialized: {0}")]
    NotInitialized(String),

    /// Invalid repository configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP client error
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response whose body could not be read as results
    #[error("Result parse error: {0}")]
    ResultParse(String),
}

impl ProtocolError {
    pub fn interrupted(reason: InterruptReason, detail: impl Into<String>) -> Self {
        Self::Interrupted {
            reason,
            detail: detail.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn result_parse(msg: impl Into<String>) -> Self {
        Self::ResultParse(msg.into())
    }

    /// The request was interrupted (timeouts, 503, pool exhaustion).
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }

    /// Sending the same request again may succeed.
    ///
    /// A query that hit the store's own timeout will hit it again, so only
    /// capacity and transport interruptions count.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Interrupted { reason, .. } => *reason != InterruptReason::QueryTimeout,
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ProtocolError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProtocolError::interrupted(InterruptReason::TransportTimeout, e.to_string())
        } else {
            ProtocolError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(e: serde_json::Error) -> Self {
        ProtocolError::ResultParse(e.to_string())
    }
}

impl From<rio_turtle::TurtleError> for ProtocolError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ProtocolError::ResultParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_helpers() {
        let timeout = ProtocolError::interrupted(InterruptReason::QueryTimeout, "slow");
        assert!(timeout.is_interrupted());
        assert!(!timeout.is_retryable());

        let pool = ProtocolError::interrupted(InterruptReason::PoolExhausted, "busy");
        assert!(pool.is_interrupted());
        assert!(pool.is_retryable());

        let bad = ProtocolError::MalformedQuery("Encountered \"}\"".into());
        assert!(!bad.is_interrupted());
        assert!(!bad.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = ProtocolError::interrupted(InterruptReason::ServiceUnavailable, "503");
        assert_eq!(err.to_string(), "Query interrupted (service unavailable): 503");

        let err = ProtocolError::Protocol {
            status: 500,
            detail: "boom".into(),
        };
        assert_eq!(err.to_string(), "SPARQL endpoint returned 500: boom");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            ProtocolError::from(json_err),
            ProtocolError::ResultParse(_)
        ));
    }
}
