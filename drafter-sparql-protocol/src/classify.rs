//! Response classification.
//!
//! | Response | Outcome |
//! |----------|---------|
//! | 2xx, 404 | success |
//! | 500 + `SD-Error-Code: QueryEval` + "exceeded query timeout" | [`InterruptReason::QueryTimeout`] |
//! | 401 | [`ProtocolError::Unauthorized`] |
//! | 503 | [`InterruptReason::ServiceUnavailable`] |
//! | anything else | parsed as an [`ErrorInfo`] payload |

use crate::error::{InterruptReason, ProtocolError};
use crate::error_info::{ErrorInfo, ErrorType};
use reqwest::StatusCode;

/// Header carrying the store's error code.
pub const ERROR_CODE_HEADER: &str = "SD-Error-Code";
/// Error code reported for query evaluation failures, timeouts included.
pub const QUERY_EVAL_ERROR_CODE: &str = "QueryEval";
/// Body text identifying a query evaluation failure as a timeout.
pub const TIMEOUT_MESSAGE: &str = "exceeded query timeout";

/// Whether a response should be handed to the caller.
pub fn is_success(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::NOT_FOUND
}

/// Whether a failure response reports a query timeout.
pub fn is_timeout_response(status: StatusCode, error_code: Option<&str>, body: &str) -> bool {
    status == StatusCode::INTERNAL_SERVER_ERROR
        && error_code == Some(QUERY_EVAL_ERROR_CODE)
        && body.contains(TIMEOUT_MESSAGE)
}

/// Map a failure response to its error.
pub fn classify_failure(status: StatusCode, error_code: Option<&str>, body: &str) -> ProtocolError {
    if is_timeout_response(status, error_code, body) {
        return ProtocolError::interrupted(InterruptReason::QueryTimeout, body.trim());
    }
    match status {
        StatusCode::UNAUTHORIZED => ProtocolError::Unauthorized {
            status: status.as_u16(),
            detail: body.trim().to_string(),
        },
        StatusCode::SERVICE_UNAVAILABLE => {
            ProtocolError::interrupted(InterruptReason::ServiceUnavailable, body.trim())
        }
        _ => {
            let info = ErrorInfo::parse(body);
            match info.error_type {
                Some(ErrorType::MalformedData) => ProtocolError::MalformedData(info.message),
                Some(ErrorType::UnsupportedFileFormat) => {
                    ProtocolError::UnsupportedFormat(info.message)
                }
                Some(ErrorType::MalformedQuery) => ProtocolError::MalformedQuery(info.message),
                Some(ErrorType::UnsupportedQueryLanguage) => {
                    ProtocolError::UnsupportedQueryLanguage(info.message)
                }
                _ => ProtocolError::Protocol {
                    status: status.as_u16(),
                    detail: info.to_string(),
                },
            }
        }
    }
}
