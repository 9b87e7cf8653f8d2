//! Domain primitives, services and decorators.
//!
//! Purpose: define the transport-agnostic building blocks (entity contract,
//! failure taxonomy, error envelope, entity service, CRUD façade and
//! operation decorators) that inbound and outbound adapters plug into.
//!
//! Public surface:
//! - `Entity`: ID-keyed record contract.
//! - `Error` / `ErrorKind`: domain failures.
//! - `ErrorEnvelope` / `FailureStatus`: the public failure payload.
//! - `EntityService` / `EntityFacade` / `Outcome`: store delegation and CRUD
//!   semantics.
//! - `decorators`: logging, timing, exception conversion and conditional
//!   throwing around async operations.

pub mod audit;
pub mod book;
pub mod decorators;
pub mod entity;
pub mod entity_service;
pub mod envelope;
pub mod error;
pub mod facade;
pub mod ports;
#[cfg(test)]
mod test_doubles;

pub use self::audit::{AuditMetadata, Audited};
pub use self::book::Book;
pub use self::entity::Entity;
pub use self::entity_service::EntityService;
pub use self::envelope::{ErrorEnvelope, FailureStatus, FailureStatusError};
pub use self::error::{Error, ErrorKind};
pub use self::facade::{EntityFacade, Outcome};

/// Result alias for domain operations.
///
/// # Examples
/// ```
/// use commons::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("nothing here"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
