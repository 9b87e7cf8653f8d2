//! Sample resource exercised by the demo server and the test suites.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit::{AuditMetadata, Audited};
use super::entity::Entity;

/// Catalogue entry.
///
/// Clients may omit `id` on creation; a random one is assigned during
/// deserialisation. `audit` is maintained by the store and ignored on input
/// other than as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub audit: AuditMetadata<String>,
}

impl Book {
    /// Build a book with a fresh identifier and empty audit metadata.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, author)
    }

    pub fn with_id(id: Uuid, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            audit: AuditMetadata::default(),
        }
    }
}

impl Entity for Book {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Audited<String> for Book {
    fn audit(&self) -> &AuditMetadata<String> {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditMetadata<String> {
        &mut self.audit
    }
}
