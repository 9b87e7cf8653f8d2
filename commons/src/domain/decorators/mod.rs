//! Explicit decorators for async operations.
//!
//! An [`Operation`] is an async callable `I -> Result<Output, Error>`.
//! Decorators wrap an operation and are composed by nesting, usually through
//! [`OperationExt`]:
//!
//! ```
//! use commons::domain::Error;
//! use commons::domain::decorators::{OperationExt, from_fn, Operation};
//!
//! # futures::executor::block_on(async {
//! let halve = from_fn(|n: u32| async move { Ok::<_, Error>(n / 2) })
//!     .logged("halve")
//!     .timed("halve");
//! assert_eq!(halve.call(8).await, Ok(4));
//! # });
//! ```
//!
//! The outermost layer sees the outcome last. Decorators keep no state
//! between invocations.

mod handle_exception;
mod logged;
mod throw_if;
mod timed;

use std::borrow::Cow;
use std::fmt;
use std::future::Future;

use futures_util::future::BoxFuture;

use crate::domain::{Error, ErrorKind, FailureStatus};

pub use handle_exception::{DEFAULT_HANDLED_MESSAGE, HandleException};
pub use logged::Logged;
pub use throw_if::{DEFAULT_THROW_IF_MESSAGE, ThrowIf};
pub use timed::Timed;

/// Async operation returning a domain result.
pub trait Operation<I>: Send + Sync {
    type Output: Send + 'static;

    fn call(&self, input: I) -> BoxFuture<'_, Result<Self::Output, Error>>;
}

/// Type-erased operation.
pub type BoxedOperation<I, O> = Box<dyn Operation<I, Output = O>>;

impl<I, O: Send + 'static> Operation<I> for BoxedOperation<I, O> {
    type Output = O;

    fn call(&self, input: I) -> BoxFuture<'_, Result<O, Error>> {
        (**self).call(input)
    }
}

/// Operation backed by an async closure. Build one with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnOperation<F> {
    f: F,
}

impl<F> fmt::Debug for FnOperation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperation").finish_non_exhaustive()
    }
}

/// Lift an async closure into an [`Operation`].
pub fn from_fn<F>(f: F) -> FnOperation<F> {
    FnOperation { f }
}

impl<I, O, F, Fut> Operation<I> for FnOperation<F>
where
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, Error>> + Send + 'static,
    O: Send + 'static,
{
    type Output = O;

    fn call(&self, input: I) -> BoxFuture<'_, Result<O, Error>> {
        Box::pin((self.f)(input))
    }
}

/// Combinators available on every [`Operation`].
pub trait OperationExt<I>: Operation<I> + Sized {
    /// Log arguments on entry and the outcome on exit.
    fn logged(self, name: impl Into<Cow<'static, str>>) -> Logged<Self> {
        Logged::new(self, name)
    }

    /// Log the elapsed wall-clock time.
    fn timed(self, name: impl Into<Cow<'static, str>>) -> Timed<Self> {
        Timed::new(self, name)
    }

    /// Convert failures into handled failures carrying `status` and `message`.
    fn handle_exception(
        self,
        status: FailureStatus,
        message: impl Into<Cow<'static, str>>,
    ) -> HandleException<Self> {
        HandleException::new(self)
            .with_status(status)
            .with_message(message)
    }

    /// Fail with `kind` and `message` when `predicate` holds for the result.
    fn throw_if<P>(
        self,
        predicate: P,
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> ThrowIf<Self, P>
    where
        P: Fn(&Self::Output) -> bool + Send + Sync,
    {
        ThrowIf::new(self, predicate)
            .with_kind(kind)
            .with_message(message)
    }

    fn boxed(self) -> BoxedOperation<I, Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<I, Op: Operation<I>> OperationExt<I> for Op {}

/// Which observability decorators to wrap around an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrumentation {
    pub log_calls: bool,
    pub time_calls: bool,
}

impl Default for Instrumentation {
    fn default() -> Self {
        Self {
            log_calls: true,
            time_calls: true,
        }
    }
}

impl Instrumentation {
    /// No decorators.
    pub const fn disabled() -> Self {
        Self {
            log_calls: false,
            time_calls: false,
        }
    }

    /// Wrap `operation` according to the enabled flags.
    ///
    /// Timing, when enabled, is the outer layer so it includes the cost of
    /// logging.
    pub fn apply<I, Op>(
        self,
        name: impl Into<Cow<'static, str>>,
        operation: Op,
    ) -> BoxedOperation<I, Op::Output>
    where
        Op: Operation<I> + 'static,
        I: fmt::Debug + 'static,
        Op::Output: fmt::Debug,
    {
        let name = name.into();
        match (self.log_calls, self.time_calls) {
            (true, true) => operation.logged(name.clone()).timed(name).boxed(),
            (true, false) => operation.logged(name).boxed(),
            (false, true) => operation.timed(name).boxed(),
            (false, false) => operation.boxed(),
        }
    }
}
