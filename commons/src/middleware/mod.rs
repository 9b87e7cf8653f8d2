//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently
//! request identification and tracing.

pub mod trace;

pub use trace::RequestTrace;
