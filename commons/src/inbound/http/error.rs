//! HTTP adapter mapping for domain failures.
//!
//! Purpose: keep the domain failure type HTTP-agnostic while giving every
//! handler the same JSON envelope and status mapping:
//!
//! - not found: `404` with the failure message;
//! - handled: the envelope's own status, message and timestamp;
//! - invalid request: `400` with the failure message;
//! - anything else: `500` with a generic message. The original is logged.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use mockable::{Clock, DefaultClock};
use tracing::error;

use crate::domain::{Error, ErrorEnvelope, ErrorKind, FailureStatus};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of unhandled failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// Status returned for `error`.
pub fn status_for(error: &Error) -> FailureStatus {
    match error {
        Error::Handled { envelope, .. } => envelope.status(),
        Error::Raised { kind, .. } => match kind {
            ErrorKind::NotFound => FailureStatus::NOT_FOUND,
            ErrorKind::InvalidRequest => FailureStatus::BAD_REQUEST,
            ErrorKind::IllegalState | ErrorKind::Internal => FailureStatus::INTERNAL_SERVER_ERROR,
        },
    }
}

/// Envelope returned to API callers for `error`.
///
/// Handled failures keep their envelope, timestamp included. Everything else
/// is stamped by `clock`. Unhandled failures are redacted to
/// [`GENERIC_FAILURE_MESSAGE`].
pub fn envelope_for(error: &Error, clock: &dyn Clock) -> ErrorEnvelope {
    if let Some(envelope) = error.envelope() {
        return envelope.clone();
    }
    let status = status_for(error);
    let message = if status == FailureStatus::INTERNAL_SERVER_ERROR {
        GENERIC_FAILURE_MESSAGE
    } else {
        error.message()
    };
    ErrorEnvelope::at(status, message, clock)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(status_for(self).as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        if self.envelope().is_none() && status_for(self).is_server_error() {
            error!(error = %self, kind = ?self.kind(), "unhandled failure reached the HTTP boundary");
        }
        HttpResponse::build(self.status_code()).json(envelope_for(self, &DefaultClock))
    }
}
