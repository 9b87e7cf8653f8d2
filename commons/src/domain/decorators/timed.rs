//! Elapsed-time logging around an operation.

use std::borrow::Cow;
use std::time::Instant;

use futures_util::future::BoxFuture;
use tracing::info;

use super::Operation;
use crate::domain::Error;

/// Logs how long the wrapped operation took, in milliseconds.
///
/// The clock starts when `call` is invoked, so synchronous work done before
/// the returned future is first polled is included.
#[derive(Debug, Clone)]
pub struct Timed<Op> {
    inner: Op,
    name: Cow<'static, str>,
}

impl<Op> Timed<Op> {
    pub fn new(inner: Op, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }
}

impl<I, Op> Operation<I> for Timed<Op>
where
    Op: Operation<I>,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> BoxFuture<'_, Result<Self::Output, Error>> {
        let started = Instant::now();
        let pending = self.inner.call(input);
        Box::pin(async move {
            let outcome = pending.await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(
                operation = %self.name,
                elapsed_ms,
                succeeded = outcome.is_ok(),
                "operation timed"
            );
            outcome
        })
    }
}
