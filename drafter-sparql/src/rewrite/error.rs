//! Rewrite error types.

use crate::span::SourceSpan;
use std::sync::Arc;
use thiserror::Error;

/// A rewrite invariant violation.
///
/// Well-formed input never produces one of these; each variant describes a
/// tree a parser would not have built. The whole rewrite is abandoned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// Prefix used but not declared
    #[error("Undefined prefix '{prefix}' at position {}", span.start)]
    UndefinedPrefix { prefix: Arc<str>, span: SourceSpan },

    /// VALUES row binds a variable missing from the block's variable list
    #[error("VALUES row at {span} binds ?{var}, which is not a VALUES variable")]
    UnknownBindingVariable { var: Arc<str>, span: SourceSpan },

    /// VALUES row binds a variable to another variable
    #[error("VALUES row at {span} binds ?{var} to a variable")]
    VariableInBinding { var: Arc<str>, span: SourceSpan },

    /// VALUES row binds the same variable twice
    #[error("VALUES row at {span} binds ?{var} more than once")]
    DuplicateBinding { var: Arc<str>, span: SourceSpan },

    /// Query or update rewriter called with the other kind of body
    #[error("Expected a SPARQL {expected}, found {found}")]
    UnexpectedBody {
        expected: &'static str,
        found: &'static str,
        span: SourceSpan,
    },
}

impl RewriteError {
    /// Create an undefined prefix error.
    pub fn undefined_prefix(prefix: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Self::UndefinedPrefix {
            prefix: prefix.into(),
            span,
        }
    }

    /// Create an unknown binding variable error.
    pub fn unknown_binding_variable(var: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Self::UnknownBindingVariable {
            var: var.into(),
            span,
        }
    }

    /// Create a variable-in-binding error.
    pub fn variable_in_binding(var: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Self::VariableInBinding {
            var: var.into(),
            span,
        }
    }

    /// Create a duplicate binding error.
    pub fn duplicate_binding(var: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Self::DuplicateBinding {
            var: var.into(),
            span,
        }
    }

    /// Get the source span of the offending node.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UndefinedPrefix { span, .. }
            | Self::UnknownBindingVariable { span, .. }
            | Self::VariableInBinding { span, .. }
            | Self::DuplicateBinding { span, .. }
            | Self::UnexpectedBody { span, .. } => *span,
        }
    }
}

/// Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RewriteError::undefined_prefix("ex", SourceSpan::new(12, 18));
        assert_eq!(err.to_string(), "Undefined prefix 'ex' at position 12");
        assert_eq!(err.span(), SourceSpan::new(12, 18));

        let err = RewriteError::duplicate_binding("x", SourceSpan::new(3, 9));
        assert_eq!(err.to_string(), "VALUES row at 3..9 binds ?x more than once");
    }
}
