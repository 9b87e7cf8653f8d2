//! Audit metadata stamped on entities when they are saved.
//!
//! Creation fields are written once, on the first save of an identifier.
//! Modification fields are rewritten on every save.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Who touched a record and when.
///
/// `U` is the auditor type, usually a user name or id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMetadata<U> {
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    created_by: Option<U>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_by: Option<U>,
}

impl<U> Default for AuditMetadata<U> {
    fn default() -> Self {
        Self {
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
        }
    }
}

impl<U: Clone> AuditMetadata<U> {
    /// Stamp a record saved for the first time.
    pub fn record_creation(&mut self, at: DateTime<Utc>, by: Option<U>) {
        self.created_at = Some(at);
        self.created_by.clone_from(&by);
        self.updated_at = Some(at);
        self.updated_by = by;
    }

    /// Stamp a record that replaces `previous`.
    ///
    /// Creation fields are carried over from `previous` so clients cannot
    /// rewrite them through an update payload.
    pub fn record_modification(
        &mut self,
        previous: &AuditMetadata<U>,
        at: DateTime<Utc>,
        by: Option<U>,
    ) {
        self.created_at = previous.created_at;
        self.created_by.clone_from(&previous.created_by);
        self.updated_at = Some(at);
        self.updated_by = by;
    }
}

impl<U> AuditMetadata<U> {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn created_by(&self) -> Option<&U> {
        self.created_by.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn updated_by(&self) -> Option<&U> {
        self.updated_by.as_ref()
    }
}

/// Entity carrying [`AuditMetadata`].
pub trait Audited<U>: Entity {
    fn audit(&self) -> &AuditMetadata<U>;

    fn audit_mut(&mut self) -> &mut AuditMetadata<U>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    fn creation_sets_both_field_pairs(created: DateTime<Utc>) {
        let mut audit = AuditMetadata::default();
        audit.record_creation(created, Some("ada".to_owned()));

        assert_eq!(audit.created_at(), Some(created));
        assert_eq!(audit.updated_at(), Some(created));
        assert_eq!(audit.created_by().map(String::as_str), Some("ada"));
        assert_eq!(audit.updated_by().map(String::as_str), Some("ada"));
    }

    #[rstest]
    fn modification_preserves_creation_fields(created: DateTime<Utc>) {
        let mut previous = AuditMetadata::default();
        previous.record_creation(created, Some("ada".to_owned()));
        let later = created + Duration::minutes(5);

        let mut incoming = AuditMetadata::default();
        incoming.record_creation(later + Duration::days(1), Some("mallory".to_owned()));
        incoming.record_modification(&previous, later, Some("grace".to_owned()));

        assert_eq!(incoming.created_at(), Some(created));
        assert_eq!(incoming.created_by().map(String::as_str), Some("ada"));
        assert_eq!(incoming.updated_at(), Some(later));
        assert_eq!(incoming.updated_by().map(String::as_str), Some("grace"));
    }

    #[rstest]
    fn missing_fields_deserialise_as_empty() {
        let audit: AuditMetadata<String> =
            serde_json::from_str("{}").expect("deserialise empty audit");
        assert_eq!(audit, AuditMetadata::default());
    }
}
