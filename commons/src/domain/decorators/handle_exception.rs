//! Conversion of failures into handled envelopes.

use std::borrow::Cow;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use mockable::{Clock, DefaultClock};
use tracing::error;

use super::Operation;
use crate::domain::{Error, ErrorEnvelope, FailureStatus};

/// Message used when none is configured.
pub const DEFAULT_HANDLED_MESSAGE: &str = "An unexpected error occurred.";

/// Turns any failure of the wrapped operation into [`Error::Handled`].
///
/// The envelope carries the configured status (default 500) and message
/// (default [`DEFAULT_HANDLED_MESSAGE`]), stamped by the configured clock.
/// The original failure is logged and kept as the handled failure's source.
/// Successful results pass through untouched.
pub struct HandleException<Op> {
    inner: Op,
    status: FailureStatus,
    message: Cow<'static, str>,
    clock: Arc<dyn Clock>,
}

impl<Op> HandleException<Op> {
    pub fn new(inner: Op) -> Self {
        Self {
            inner,
            status: FailureStatus::INTERNAL_SERVER_ERROR,
            message: Cow::Borrowed(DEFAULT_HANDLED_MESSAGE),
            clock: Arc::new(DefaultClock),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: FailureStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Clock used to stamp envelopes.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl<I, Op> Operation<I> for HandleException<Op>
where
    Op: Operation<I>,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> BoxFuture<'_, Result<Self::Output, Error>> {
        let pending = self.inner.call(input);
        Box::pin(async move {
            pending.await.map_err(|cause| {
                error!(
                    error = %cause,
                    status = self.status.as_u16(),
                    "operation failed; returning handled failure"
                );
                let envelope =
                    ErrorEnvelope::at(self.status, self.message.clone(), self.clock.as_ref());
                Error::handled(envelope).with_cause(cause)
            })
        })
    }
}
