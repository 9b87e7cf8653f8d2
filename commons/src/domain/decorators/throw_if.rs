//! Predicate-driven failures.

use std::borrow::Cow;

use futures_util::future::BoxFuture;
use tracing::warn;

use super::Operation;
use crate::domain::{Error, ErrorKind};

/// Message used when none is configured.
pub const DEFAULT_THROW_IF_MESSAGE: &str = "Condition evaluated to true, throwing exception.";

/// Fails with the configured kind and message when `predicate` holds for the
/// wrapped operation's value.
///
/// The predicate only sees successful values; failures of the wrapped
/// operation pass through untouched. Defaults to
/// [`ErrorKind::IllegalState`] and [`DEFAULT_THROW_IF_MESSAGE`].
pub struct ThrowIf<Op, P> {
    inner: Op,
    predicate: P,
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl<Op, P> ThrowIf<Op, P> {
    pub fn new(inner: Op, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            kind: ErrorKind::IllegalState,
            message: Cow::Borrowed(DEFAULT_THROW_IF_MESSAGE),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl<I, Op, P> Operation<I> for ThrowIf<Op, P>
where
    Op: Operation<I>,
    P: Fn(&Op::Output) -> bool + Send + Sync,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> BoxFuture<'_, Result<Self::Output, Error>> {
        let pending = self.inner.call(input);
        Box::pin(async move {
            let value = pending.await?;
            if (self.predicate)(&value) {
                warn!(kind = %self.kind, message = %self.message, "condition met; failing operation");
                return Err(Error::new(self.kind, self.message.clone()));
            }
            Ok(value)
        })
    }
}
