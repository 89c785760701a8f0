//! Error payloads returned by the store.
//!
//! Failure bodies take the form `TYPE: message`, where `TYPE` is one of a
//! fixed set of labels. Bodies that don't start with a known label are kept
//! whole as the message.

use std::fmt;

/// Known error payload labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorType {
    MalformedData,
    UnsupportedFileFormat,
    MalformedQuery,
    UnsupportedQueryLanguage,
    MalformedRequest,
    UnsupportedMediaType,
    NoSuchContext,
}

impl ErrorType {
    const ALL: [ErrorType; 7] = [
        ErrorType::MalformedData,
        ErrorType::UnsupportedFileFormat,
        ErrorType::MalformedQuery,
        ErrorType::UnsupportedQueryLanguage,
        ErrorType::MalformedRequest,
        ErrorType::UnsupportedMediaType,
        ErrorType::NoSuchContext,
    ];

    /// The label as it appears in a payload.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::MalformedData => "MALFORMED DATA",
            ErrorType::UnsupportedFileFormat => "UNSUPPORTED FILE FORMAT",
            ErrorType::MalformedQuery => "MALFORMED QUERY",
            ErrorType::UnsupportedQueryLanguage => "UNSUPPORTED QUERY LANGUAGE",
            ErrorType::MalformedRequest => "MALFORMED REQUEST",
            ErrorType::UnsupportedMediaType => "UNSUPPORTED MEDIA TYPE",
            ErrorType::NoSuchContext => "NO SUCH CONTEXT",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed error payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub error_type: Option<ErrorType>,
    pub message: String,
}

impl ErrorInfo {
    pub fn parse(body: &str) -> Self {
        if let Some((label, message)) = body.split_once(':') {
            if let Some(error_type) = ErrorType::from_label(label.trim()) {
                return Self {
                    error_type: Some(error_type),
                    message: message.trim().to_string(),
                };
            }
        }
        Self {
            error_type: None,
            message: body.trim().to_string(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_type {
            Some(error_type) => write!(f, "{error_type}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
