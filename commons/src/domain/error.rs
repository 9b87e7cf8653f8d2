//! Domain-level failure types.
//!
//! Failures are transport agnostic. The HTTP adapter maps them onto
//! [`ErrorEnvelope`] payloads and status codes; nothing in here knows about
//! actix.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::envelope::ErrorEnvelope;

/// Failure category raised by domain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The addressed entity does not exist.
    NotFound,
    /// An operation was attempted while the system was in an unsuitable state.
    IllegalState,
    /// An unexpected failure inside the domain or one of its collaborators.
    Internal,
}

impl ErrorKind {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::NotFound => "resource not found",
            Self::IllegalState => "illegal state",
            Self::Internal => "internal failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::IllegalState => "illegal_state",
            Self::Internal => "internal",
        };
        f.write_str(label)
    }
}

/// Domain failure.
///
/// A failure is either *raised* with a kind and message, or *handled*: it
/// already carries the envelope API callers should receive, usually because
/// an exception-handling decorator converted a lower-level failure.
///
/// # Examples
/// ```
/// use commons::domain::{Error, ErrorKind};
///
/// let err = Error::not_found("book 7 not found");
/// assert_eq!(err.kind(), Some(ErrorKind::NotFound));
/// assert_eq!(err.message(), "book 7 not found");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Failure raised directly by domain code.
    Raised {
        /// Failure category.
        kind: ErrorKind,
        /// Human-readable message.
        message: String,
    },
    /// Failure already converted into its public envelope.
    Handled {
        /// Envelope returned unchanged to API callers.
        envelope: ErrorEnvelope,
        /// Failure that was converted, if any.
        cause: Option<Box<Error>>,
    },
}

impl Error {
    /// Raise a failure of `kind`.
    ///
    /// Blank messages are replaced with a short description of the kind so
    /// the failure never renders as an empty string.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.fallback_message().to_owned()
        } else {
            message
        };
        Self::Raised { kind, message }
    }

    /// Convenience constructor for [`ErrorKind::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Convenience constructor for [`ErrorKind::IllegalState`].
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalState, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Wrap an envelope that should reach API callers as-is.
    pub fn handled(envelope: ErrorEnvelope) -> Self {
        Self::Handled {
            envelope,
            cause: None,
        }
    }

    /// Attach the failure that led to a handled envelope.
    ///
    /// Raised failures are returned unchanged.
    #[must_use]
    pub fn with_cause(self, source: Error) -> Self {
        match self {
            Self::Handled { envelope, .. } => Self::Handled {
                envelope,
                cause: Some(Box::new(source)),
            },
            raised @ Self::Raised { .. } => raised,
        }
    }

    /// Failure category, or `None` for handled failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Raised { kind, .. } => Some(*kind),
            Self::Handled { .. } => None,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Raised { message, .. } => message.as_str(),
            Self::Handled { envelope, .. } => envelope.message(),
        }
    }

    /// Envelope carried by a handled failure.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Handled { envelope, .. } => Some(envelope),
            Self::Raised { .. } => None,
        }
    }

    /// Whether this failure reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Handled {
                cause: Some(cause), ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
