//! Extractor configuration turning malformed input into `400` envelopes.
//!
//! Actix rejects unparsable JSON bodies and path segments with its own
//! plain-text responses. These configs route both through the domain
//! [`Error`] so callers always receive the standard envelope.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::domain::Error;

use super::ApiResult;

/// JSON body config mapping deserialisation failures to invalid requests.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "rejected request body");
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}

/// Path config mapping unparsable identifiers to invalid requests.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "rejected path parameters");
        Error::invalid_request(format!("invalid path parameter: {err}")).into()
    })
}

/// Fallback service answering unknown routes with a `404` envelope.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
