//! Outbound adapters implementing domain ports.
//!
//! - **store**: in-memory entity store and the auditing store decorator.
//! - **cache**: in-memory key/value cache.
//!
//! Adapters are thin translators between domain types and their backing
//! structures. They contain no business logic.

pub mod cache;
pub mod store;
