//! Entry/exit logging around an operation.

use std::borrow::Cow;
use std::fmt;

use futures_util::future::BoxFuture;
use tracing::{info, warn};

use super::Operation;
use crate::domain::Error;

/// Logs the operation name and `Debug` of its input before the call, and the
/// value or failure after it. The outcome is returned unchanged.
#[derive(Debug, Clone)]
pub struct Logged<Op> {
    inner: Op,
    name: Cow<'static, str>,
}

impl<Op> Logged<Op> {
    pub fn new(inner: Op, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<I, Op> Operation<I> for Logged<Op>
where
    Op: Operation<I>,
    Op::Output: fmt::Debug,
    I: fmt::Debug,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> BoxFuture<'_, Result<Self::Output, Error>> {
        info!(operation = %self.name, arguments = ?input, "entering operation");
        let pending = self.inner.call(input);
        Box::pin(async move {
            let outcome = pending.await;
            match &outcome {
                Ok(value) => info!(operation = %self.name, result = ?value, "exiting operation"),
                Err(err) => warn!(operation = %self.name, error = %err, "operation failed"),
            }
            outcome
        })
    }
}
