//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure and register under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorEnvelope`].
///
/// Standard failure payload returned by every endpoint.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// HTTP status code, 400..=599.
    #[schema(example = 404, minimum = 400, maximum = 599)]
    status_code: u16,
    /// Human-readable failure description.
    #[schema(example = "book 3fa85f64-5717-4562-b3fc-2c963f66afa6 not found")]
    message: String,
    /// RFC 3339 UTC instant the failure was recorded.
    #[schema(value_type = String, format = DateTime, example = "2026-05-01T10:00:00Z")]
    timestamp: String,
}

/// OpenAPI schema for [`crate::domain::AuditMetadata`].
#[derive(ToSchema)]
#[schema(as = AuditMetadata)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AuditMetadataSchema {
    #[schema(value_type = Option<String>, format = DateTime)]
    created_at: Option<String>,
    #[schema(example = "system")]
    created_by: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    updated_at: Option<String>,
    #[schema(example = "system")]
    updated_by: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Book`].
#[derive(ToSchema)]
#[schema(as = Book)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookSchema {
    /// Identifier; generated when omitted on creation.
    #[schema(value_type = Option<String>, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: Option<String>,
    #[schema(example = "Dune")]
    title: String,
    #[schema(example = "Frank Herbert")]
    author: String,
    /// Maintained by the server; ignored on input.
    #[schema(read_only)]
    audit: Option<AuditMetadataSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_envelope_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<ErrorEnvelopeSchema>();
        assert_eq!(ErrorEnvelopeSchema::name(), "ErrorEnvelope");
        for field in ["statusCode", "message", "timestamp"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn book_schema_registers_under_domain_name() {
        let schema_json = schema_to_json::<BookSchema>();
        assert_eq!(BookSchema::name(), "Book");
        assert!(schema_json.contains("title"));
        assert!(schema_json.contains("audit"));
    }

    #[test]
    fn audit_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<AuditMetadataSchema>();
        assert!(schema_json.contains("createdAt"));
        assert!(schema_json.contains("updatedBy"));
    }
}
