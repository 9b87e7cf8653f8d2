//! Entity store adapters.
//!
//! - **memory**: process-local store keyed by entity id.
//! - **auditing**: decorator stamping [`AuditMetadata`](crate::domain::AuditMetadata)
//!   on every save before delegating to another store.

mod auditing;
mod memory;

pub use auditing::AuditingStore;
pub use memory::InMemoryEntityStore;
