//! Reusable building blocks for actix-web CRUD services.
//!
//! - [`domain`]: entities, the store port, services, façades, failures and
//!   operation decorators.
//! - [`outbound`]: in-memory store, auditing store and cache adapters.
//! - [`inbound::http`]: generic CRUD handlers, error envelopes, CORS policy
//!   and documentation group endpoints.
//! - [`server`]: application assembly from [`settings`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod util;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestTrace;
