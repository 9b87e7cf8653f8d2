//! HTTP server configuration object and helpers.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

use crate::doc::{ApiDocs, ApiGroupError};
use crate::domain::decorators::Instrumentation;
use crate::inbound::http::cors::{CorsConfigError, CorsPolicy};
use crate::settings::Settings;

/// Auditor recorded on entities saved through the HTTP API.
pub const DEFAULT_AUDITOR: &str = "system";

/// Settings that could not be turned into a running configuration.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    Cors(#[from] CorsConfigError),
    #[error(transparent)]
    Docs(#[from] ApiGroupError),
}

/// Validated configuration for creating the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) instrumentation: Instrumentation,
    pub(crate) cors: CorsPolicy,
    pub(crate) docs: ApiDocs,
    pub(crate) auditor: String,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Validate `settings` into a server configuration.
    ///
    /// # Errors
    /// Returns [`ServerConfigError`] when the CORS policy or a documentation
    /// group definition is invalid.
    pub fn from_settings(settings: &Settings) -> Result<Self, ServerConfigError> {
        Ok(Self {
            bind_addr: settings.server.bind_address(),
            instrumentation: settings.server.instrumentation(),
            cors: CorsPolicy::from_settings(&settings.cors)?,
            docs: ApiDocs::from_settings(&settings.swagger)?,
            auditor: DEFAULT_AUDITOR.to_owned(),
            clock: Arc::new(DefaultClock),
        })
    }

    #[must_use]
    pub fn with_instrumentation(mut self, instrumentation: Instrumentation) -> Self {
        self.instrumentation = instrumentation;
        self
    }

    /// Record a different auditor on saved entities.
    #[must_use]
    pub fn with_auditor(mut self, auditor: impl Into<String>) -> Self {
        self.auditor = auditor.into();
        self
    }

    /// Stamp audit metadata from `clock` instead of the wall clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }

    #[must_use]
    pub fn docs(&self) -> &ApiDocs {
        &self.docs
    }
}
