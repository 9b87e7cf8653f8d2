//! Domain ports: the edges of the hexagon.
//!
//! Driven adapters (stores, caches, identity providers) implement these
//! traits. Each port exposes a strongly typed error so adapters map their
//! failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod auditor;
mod cache;
mod entity_store;

pub use auditor::{AnonymousAuditor, AuditorAware, FixedAuditor};
pub use cache::{Cache, CacheError};
pub use entity_store::{EntityStore, EntityStoreError};
