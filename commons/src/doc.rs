//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every documented endpoint and the schema wrappers
//! from [`crate::inbound::http::schemas`]. At runtime the document's metadata
//! (title, description, version, contact) is overridden from
//! [`SwaggerSettings`], and optional documentation groups slice the document
//! by path pattern.
//!
//! The primary document is served at `/api-docs/openapi.json` (Swagger UI at
//! `/docs/`) and exported via `cargo run --bin openapi-dump`.

use std::collections::BTreeMap;

use thiserror::Error;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::openapi::info::ContactBuilder;

use crate::inbound::http::schemas::{AuditMetadataSchema, BookSchema, ErrorEnvelopeSchema};
use crate::settings::SwaggerSettings;

const MATCH_ALL: &str = "/**";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "commons API",
        description = "Generic CRUD endpoints built from the commons toolkit",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
    ),
    components(schemas(ErrorEnvelopeSchema, BookSchema, AuditMetadataSchema)),
    tags(
        (name = "books", description = "Sample resource served by the generic CRUD handlers")
    )
)]
pub struct ApiDoc;

/// Rejected group definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiGroupError {
    #[error("documentation group name must not be empty")]
    EmptyName,
    #[error("documentation group `{name}` has invalid path pattern `{pattern}`")]
    InvalidPattern { name: String, pattern: String },
    #[error("documentation group `{0}` is defined more than once")]
    Duplicate(String),
}

/// Named slice of the API document.
///
/// The pattern is either an exact path (`/api/v1/books`) or a prefix ending
/// in `/**` (`/api/v1/books/**`), which matches the prefix itself and every
/// path below it. `/**` matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiGroup {
    name: String,
    paths_to_match: String,
}

impl ApiGroup {
    /// Validate a group.
    pub fn new(
        name: impl Into<String>,
        paths_to_match: impl Into<String>,
    ) -> Result<Self, ApiGroupError> {
        let name = name.into().trim().to_owned();
        let paths_to_match = paths_to_match.into().trim().to_owned();
        if name.is_empty() {
            return Err(ApiGroupError::EmptyName);
        }
        if !paths_to_match.starts_with('/') {
            return Err(ApiGroupError::InvalidPattern {
                name,
                pattern: paths_to_match,
            });
        }
        Ok(Self {
            name,
            paths_to_match,
        })
    }

    /// Parse `name` or `name=pattern`.
    ///
    /// # Examples
    /// ```
    /// use commons::doc::ApiGroup;
    ///
    /// let group = ApiGroup::parse("books=/api/v1/books/**").expect("valid group");
    /// assert!(group.matches("/api/v1/books/{id}"));
    /// assert!(!group.matches("/api/v1/authors"));
    /// ```
    pub fn parse(definition: &str) -> Result<Self, ApiGroupError> {
        match definition.split_once('=') {
            Some((name, pattern)) => Self::new(name, pattern),
            None => Self::new(definition, MATCH_ALL),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paths_to_match(&self) -> &str {
        &self.paths_to_match
    }

    /// Whether `path` belongs to this group.
    pub fn matches(&self, path: &str) -> bool {
        match self.paths_to_match.strip_suffix(MATCH_ALL) {
            Some("") => true,
            Some(prefix) => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            None => path == self.paths_to_match,
        }
    }

    /// Copy of `base` restricted to this group's paths.
    pub fn document(&self, base: &OpenApiDocument) -> OpenApiDocument {
        let mut document = base.clone();
        document.paths.paths.retain(|path, _| self.matches(path));
        document
    }
}

/// Build the primary document with metadata taken from `settings`.
pub fn api_doc(settings: &SwaggerSettings) -> OpenApiDocument {
    let mut document = ApiDoc::openapi();
    let info = &mut document.info;
    info.title = settings.title().to_owned();
    info.description = Some(settings.description().to_owned());
    info.version = settings.version().to_owned();
    if settings.contact_name.is_some() || settings.contact_email.is_some() {
        info.contact = Some(
            ContactBuilder::new()
                .name(settings.contact_name.clone())
                .email(settings.contact_email.clone())
                .build(),
        );
    }
    document
}

/// Primary document plus one document per configured group.
#[derive(Clone)]
pub struct ApiDocs {
    primary: OpenApiDocument,
    groups: BTreeMap<String, OpenApiDocument>,
}

impl ApiDocs {
    /// Render every document described by `settings`.
    pub fn from_settings(settings: &SwaggerSettings) -> Result<Self, ApiGroupError> {
        let primary = api_doc(settings);
        let mut groups = BTreeMap::new();
        for definition in settings.groups() {
            let group = ApiGroup::parse(&definition)?;
            if groups.contains_key(group.name()) {
                return Err(ApiGroupError::Duplicate(group.name().to_owned()));
            }
            groups.insert(group.name().to_owned(), group.document(&primary));
        }
        Ok(Self { primary, groups })
    }

    pub fn primary(&self) -> &OpenApiDocument {
        &self.primary
    }

    pub fn group(&self, name: &str) -> Option<&OpenApiDocument> {
        self.groups.get(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
