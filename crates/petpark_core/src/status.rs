//! Error-kind to transport status mapping.
//!
//! # Responsibility
//! - Hold the one table that maps `ErrorKind` to a status code and reason.
//! - Build the error envelope returned to clients, and log each failure once.
//!
//! # Invariants
//! - Every `ErrorKind` has exactly one table row.
//! - Client-caused failures log the message only; internal ones log the
//!   full source chain.

use crate::service::{ErrorKind, ParkServiceError};
use log::error;
use serde::Serialize;
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

/// How much of a failure is written to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDetail {
    MessageOnly,
    SourceChain,
}

/// Transport status for one error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStatus {
    pub code: u16,
    pub reason: &'static str,
    pub log_detail: LogDetail,
}

const STATUS_TABLE: &[(ErrorKind, ErrorStatus)] = &[
    (
        ErrorKind::NotFound,
        ErrorStatus {
            code: 404,
            reason: "Not Found",
            log_detail: LogDetail::MessageOnly,
        },
    ),
    (
        ErrorKind::OwnershipMismatch,
        ErrorStatus {
            code: 409,
            reason: "Conflict",
            log_detail: LogDetail::MessageOnly,
        },
    ),
    (
        ErrorKind::DuplicateKey,
        ErrorStatus {
            code: 409,
            reason: "Conflict",
            log_detail: LogDetail::MessageOnly,
        },
    ),
    (
        ErrorKind::UnsupportedOperation,
        ErrorStatus {
            code: 405,
            reason: "Method Not Allowed",
            log_detail: LogDetail::MessageOnly,
        },
    ),
    (
        ErrorKind::Internal,
        ErrorStatus {
            code: 500,
            reason: "Internal Server Error",
            log_detail: LogDetail::SourceChain,
        },
    ),
];

const FALLBACK_STATUS: ErrorStatus = ErrorStatus {
    code: 500,
    reason: "Internal Server Error",
    log_detail: LogDetail::SourceChain,
};

/// Looks up the transport status for `kind`.
pub fn status_for(kind: ErrorKind) -> ErrorStatus {
    STATUS_TABLE
        .iter()
        .find(|(row_kind, _)| *row_kind == kind)
        .map_or(FALLBACK_STATUS, |(_, status)| *status)
}

/// Error envelope returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub message: String,
    pub status_reason: &'static str,
    pub status_code: u16,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub uri: Option<String>,
}

impl ErrorMessage {
    /// Builds the envelope for `err` and emits one `error_response` event.
    pub fn from_error(err: &ParkServiceError, uri: Option<&str>) -> Self {
        let kind = err.kind();
        let status = status_for(kind);
        let message = err.to_string();

        match status.log_detail {
            LogDetail::MessageOnly => error!(
                "event=error_response module=status status=error kind={kind:?} code={} error={message}",
                status.code
            ),
            LogDetail::SourceChain => error!(
                "event=error_response module=status status=error kind={kind:?} code={} error={}",
                status.code,
                source_chain(err)
            ),
        }

        Self {
            message,
            status_reason: status.reason,
            status_code: status.code,
            timestamp: now_epoch_ms(),
            uri: uri.map(str::to_string),
        }
    }
}

fn source_chain(err: &dyn Error) -> String {
    let mut chain = err.to_string();
    let mut cursor = err.source();
    while let Some(source) = cursor {
        chain.push_str(": ");
        chain.push_str(&source.to_string());
        cursor = source.source();
    }
    chain
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::{status_for, ErrorMessage, LogDetail, STATUS_TABLE};
    use crate::model::EntityKind;
    use crate::service::{ErrorKind, ParkServiceError};

    #[test]
    fn every_kind_has_one_row() {
        for kind in [
            ErrorKind::NotFound,
            ErrorKind::OwnershipMismatch,
            ErrorKind::DuplicateKey,
            ErrorKind::UnsupportedOperation,
            ErrorKind::Internal,
        ] {
            let rows = STATUS_TABLE.iter().filter(|(row, _)| *row == kind).count();
            assert_eq!(rows, 1, "kind {kind:?}");
        }
    }

    #[test]
    fn client_errors_map_to_expected_codes() {
        assert_eq!(status_for(ErrorKind::NotFound).code, 404);
        assert_eq!(status_for(ErrorKind::OwnershipMismatch).code, 409);
        assert_eq!(status_for(ErrorKind::DuplicateKey).code, 409);
        assert_eq!(status_for(ErrorKind::UnsupportedOperation).code, 405);
        assert_eq!(
            status_for(ErrorKind::Internal).log_detail,
            LogDetail::SourceChain
        );
    }

    #[test]
    fn envelope_carries_message_status_and_uri() {
        let err = ParkServiceError::NotFound {
            kind: EntityKind::Contributor,
            id: 42,
        };
        let envelope = ErrorMessage::from_error(&err, Some("/pet_park/contributor/42"));

        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.status_reason, "Not Found");
        assert!(envelope.message.contains("ID=42"));
        assert_eq!(envelope.uri.as_deref(), Some("/pet_park/contributor/42"));
        assert!(envelope.timestamp > 0);
    }
}
