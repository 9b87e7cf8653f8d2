//! Runtime configuration loaded via OrthoConfig.
//!
//! Each concern owns a settings struct with its own environment prefix:
//! `COMMONS_SERVER_*`, `COMMONS_CORS_*` and `COMMONS_SWAGGER_*`. List-valued
//! settings are comma separated.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::decorators::Instrumentation;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];
const WILDCARD: &str = "*";
pub(crate) const DEFAULT_TITLE: &str = "commons API";
pub(crate) const DEFAULT_DESCRIPTION: &str = "Generic CRUD endpoints built from the commons toolkit";

/// Trimmed, non-blank items of `configured`, or `default` when nothing was
/// configured.
fn list_or(configured: &[String], default: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        return default.iter().map(|item| (*item).to_owned()).collect();
    }
    configured
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load {section} settings: {message}")]
    Load {
        section: &'static str,
        message: String,
    },
}

impl SettingsError {
    fn load(section: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Load {
            section,
            message: err.to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMONS_SERVER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Wrap CRUD handlers with entry/exit logging.
    #[ortho_config(default = true)]
    pub log_calls: bool,
    /// Wrap CRUD handlers with elapsed-time logging.
    #[ortho_config(default = true)]
    pub time_calls: bool,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_address(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    pub fn instrumentation(&self) -> Instrumentation {
        Instrumentation {
            log_calls: self.log_calls,
            time_calls: self.time_calls,
        }
    }
}

/// Cross-origin resource sharing settings.
///
/// List values are comma separated in the environment. An unset list falls
/// back to its default.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMONS_CORS")]
pub struct CorsSettings {
    /// Allowed origins, or `*`.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Allowed methods, or `*`.
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    /// Allowed request headers, or `*`.
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    /// Whether credentials (cookies, authorisation headers) are allowed.
    #[ortho_config(default = true)]
    pub allow_credentials: bool,
    /// Seconds browsers may cache preflight responses.
    pub max_age: Option<usize>,
}

impl CorsSettings {
    pub fn allowed_origins(&self) -> Vec<String> {
        list_or(&self.allowed_origins, &[WILDCARD])
    }

    pub fn allowed_methods(&self) -> Vec<String> {
        list_or(&self.allowed_methods, &DEFAULT_ALLOWED_METHODS)
    }

    pub fn allowed_headers(&self) -> Vec<String> {
        list_or(&self.allowed_headers, &[WILDCARD])
    }
}

/// API documentation metadata.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMONS_SWAGGER")]
pub struct SwaggerSettings {
    #[ortho_config(default = String::from(DEFAULT_TITLE))]
    pub title: String,
    #[ortho_config(default = String::from(DEFAULT_DESCRIPTION))]
    pub description: String,
    /// Version reported in the document.
    #[ortho_config(
        default = String::from(env!("CARGO_PKG_VERSION")),
        cli_long = "api-version"
    )]
    pub version: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    /// Documentation groups.
    ///
    /// Each item is either `name` (matches every path) or `name=pattern`
    /// where `pattern` is an exact path or a prefix ending in `/**`.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl SwaggerSettings {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Trimmed, non-blank group definitions.
    pub fn groups(&self) -> Vec<String> {
        list_or(&self.groups, &[])
    }
}

/// All runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub swagger: SwaggerSettings,
}

impl Settings {
    /// Load every section from the environment and configuration files.
    ///
    /// Command-line arguments are not consulted; `program` is only used as
    /// the argument vector's first entry.
    pub fn load(program: &str) -> Result<Self, SettingsError> {
        let args = || [OsString::from(program)];
        Ok(Self {
            server: ServerSettings::load_from_iter(args())
                .map_err(|err| SettingsError::load("server", err))?,
            cors: CorsSettings::load_from_iter(args())
                .map_err(|err| SettingsError::load("cors", err))?,
            swagger: SwaggerSettings::load_from_iter(args())
                .map_err(|err| SettingsError::load("swagger", err))?,
        })
    }
}
