//! Documentation group endpoints.
//!
//! ```text
//! GET /api-docs/groups           -> ["books", ...]
//! GET /api-docs/groups/{group}   -> OpenAPI document for that group
//! ```

use actix_web::{HttpResponse, get, web};

use crate::doc::ApiDocs;
use crate::domain::Error;

use super::ApiResult;

#[get("/api-docs/groups")]
pub async fn list_groups(docs: web::Data<ApiDocs>) -> web::Json<Vec<String>> {
    web::Json(docs.group_names().map(str::to_owned).collect())
}

/// Serve one group document.
///
/// Accepts `books` and `books.json` alike.
#[get("/api-docs/groups/{group}")]
pub async fn group_document(
    docs: web::Data<ApiDocs>,
    group: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let requested = group.into_inner();
    let name = requested.strip_suffix(".json").unwrap_or(&requested);
    docs.group(name)
        .map(|document| HttpResponse::Ok().json(document))
        .ok_or_else(|| Error::not_found(format!("documentation group {name} is not configured")))
}
