//! HTTP inbound adapter exposing REST endpoints.

pub mod books;
pub mod cors;
pub mod crud;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod schemas;

pub use error::ApiResult;
