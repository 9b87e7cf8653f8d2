//! Public failure payload returned to API callers.
//!
//! Every failure leaving the HTTP boundary has the same shape:
//!
//! ```json
//! { "statusCode": 404, "message": "book 7 not found", "timestamp": "2026-05-01T10:00:00Z" }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};

/// HTTP failure status carried by an [`ErrorEnvelope`].
///
/// ## Invariants
/// - The code lies within `400..=599`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FailureStatus(u16);

/// Rejected status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("failure status must lie within 400..=599, got {code}")]
pub struct FailureStatusError {
    /// Code that was rejected.
    pub code: u16,
}

impl FailureStatus {
    /// `400 Bad Request`.
    pub const BAD_REQUEST: Self = Self(400);
    /// `404 Not Found`.
    pub const NOT_FOUND: Self = Self(404);
    /// `409 Conflict`.
    pub const CONFLICT: Self = Self(409);
    /// `500 Internal Server Error`.
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);
    /// `503 Service Unavailable`.
    pub const SERVICE_UNAVAILABLE: Self = Self(503);

    /// Validate a numeric status.
    ///
    /// # Examples
    /// ```
    /// use commons::domain::FailureStatus;
    ///
    /// assert!(FailureStatus::new(418).is_ok());
    /// assert!(FailureStatus::new(204).is_err());
    /// ```
    pub fn new(code: u16) -> Result<Self, FailureStatusError> {
        if (400..=599).contains(&code) {
            Ok(Self(code))
        } else {
            Err(FailureStatusError { code })
        }
    }

    /// Numeric status code.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Whether the status reports a server-side failure.
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500
    }
}

impl TryFrom<u16> for FailureStatus {
    type Error = FailureStatusError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<FailureStatus> for u16 {
    fn from(status: FailureStatus) -> Self {
        status.0
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standardised failure payload.
///
/// Immutable once constructed. The timestamp is read from a [`Clock`] when
/// the envelope is built, so envelopes built one after another carry
/// non-decreasing timestamps as long as the wall clock does not step back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    status_code: FailureStatus,
    message: String,
    timestamp: DateTime<Utc>,
}

impl ErrorEnvelope {
    /// Build an envelope stamped with the current wall-clock time.
    pub fn new(status: FailureStatus, message: impl Into<String>) -> Self {
        Self::at(status, message, &DefaultClock)
    }

    /// Build an envelope stamped by `clock`.
    pub fn at(status: FailureStatus, message: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::with_timestamp(status, message, clock.utc())
    }

    /// Build an envelope with an explicit timestamp.
    pub fn with_timestamp(
        status: FailureStatus,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            status_code: status,
            message: message.into(),
            timestamp,
        }
    }

    pub fn status(&self) -> FailureStatus {
        self.status_code
    }

    pub fn status_code(&self) -> u16 {
        self.status_code.as_u16()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockable::MockClock;
    use rstest::rstest;
    use serde_json::json;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    #[case(400, true)]
    #[case(404, true)]
    #[case(599, true)]
    #[case(399, false)]
    #[case(200, false)]
    #[case(600, false)]
    fn failure_status_accepts_only_client_and_server_errors(
        #[case] code: u16,
        #[case] accepted: bool,
    ) {
        assert_eq!(FailureStatus::new(code).is_ok(), accepted);
    }

    #[rstest]
    fn envelope_serialises_camel_case_with_rfc3339_timestamp() {
        let envelope = ErrorEnvelope::with_timestamp(
            FailureStatus::NOT_FOUND,
            "book 7 not found",
            fixed_instant(),
        );

        let value = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(
            value,
            json!({
                "statusCode": 404,
                "message": "book 7 not found",
                "timestamp": "2026-05-01T10:00:00Z"
            })
        );
    }

    #[rstest]
    fn envelope_rejects_success_status_on_deserialise() {
        let payload = json!({
            "statusCode": 200,
            "message": "ok",
            "timestamp": "2026-05-01T10:00:00Z"
        });
        let result = serde_json::from_value::<ErrorEnvelope>(payload);
        assert!(result.is_err());
    }

    #[rstest]
    fn envelope_reads_timestamp_from_clock() {
        let mut clock = MockClock::new();
        clock.expect_utc().times(1).return_const(fixed_instant());

        let envelope = ErrorEnvelope::at(FailureStatus::CONFLICT, "taken", &clock);

        assert_eq!(envelope.timestamp(), fixed_instant());
        assert_eq!(envelope.status_code(), 409);
    }

    #[rstest]
    fn sequential_envelopes_have_non_decreasing_timestamps() {
        let envelopes: Vec<ErrorEnvelope> = (0..32)
            .map(|n| ErrorEnvelope::new(FailureStatus::INTERNAL_SERVER_ERROR, format!("#{n}")))
            .collect();

        assert!(
            envelopes
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.timestamp() <= b.timestamp()))
        );
    }
}
