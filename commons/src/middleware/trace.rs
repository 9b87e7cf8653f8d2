//! Request tracing middleware.
//!
//! Every request gets a UUID request id. The id is stored in the request
//! extensions (handlers extract it as [`RequestId`]), recorded on an
//! `http_request` tracing span wrapping the whole request, and echoed in a
//! `request-id` response header. Completion is logged with the status and
//! elapsed milliseconds.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::domain::Error;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Per-request identifier.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, get};
/// use commons::middleware::trace::RequestId;
///
/// #[get("/whoami")]
/// async fn whoami(request_id: RequestId) -> HttpResponse {
///     HttpResponse::Ok().body(request_id.to_string())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl FromRequest for RequestId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<RequestId>()
                .copied()
                .ok_or_else(|| Error::internal("request id requested outside RequestTrace")),
        )
    }
}

/// Middleware assigning a [`RequestId`] and tracing span to each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use commons::middleware::RequestTrace;
///
/// let app = App::new().wrap(RequestTrace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestTrace`].
pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = RequestId::generate();
        let span = info_span!(
            "http_request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.path()
        );
        req.extensions_mut().insert(request_id);
        let started = Instant::now();
        let fut = {
            let _entered = span.enter();
            self.service.call(req)
        };

        Box::pin(
            async move {
                let elapsed_ms =
                    || u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                let mut res = match fut.await {
                    Ok(res) => res,
                    Err(err) => {
                        warn!(error = %err, elapsed_ms = elapsed_ms(), "request failed");
                        return Err(err);
                    }
                };
                info!(
                    status = res.status().as_u16(),
                    elapsed_ms = elapsed_ms(),
                    "request completed"
                );
                match HeaderValue::from_str(&request_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode request id header");
                    }
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::ApiResult;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    fn header_id(res: &ServiceResponse) -> RequestId {
        res.headers()
            .get(REQUEST_ID_HEADER)
            .expect("request id header")
            .to_str()
            .expect("header is ascii")
            .parse()
            .expect("header is a uuid")
    }

    #[rstest]
    fn request_id_round_trips_through_strings() {
        let id = RequestId(Uuid::nil());
        let parsed: RequestId = id.to_string().parse().expect("parse uuid");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[actix_web::test]
    async fn adds_request_id_header() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert!(res.status().is_success());
        header_id(&res);
    }

    #[rstest]
    #[actix_web::test]
    async fn handlers_see_the_header_request_id() {
        let app = actix_test::init_service(App::new().wrap(RequestTrace).route(
            "/",
            web::get().to(|id: RequestId| async move { HttpResponse::Ok().body(id.to_string()) }),
        ))
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        let expected = header_id(&res);
        let body = actix_test::read_body(res).await;

        assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), expected.to_string());
    }

    #[rstest]
    #[actix_web::test]
    async fn error_responses_carry_request_id() {
        let app = actix_test::init_service(App::new().wrap(RequestTrace).route(
            "/",
            web::get().to(|| async { ApiResult::<HttpResponse>::Err(Error::not_found("nope")) }),
        ))
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert_eq!(res.status().as_u16(), 404);
        header_id(&res);
    }

    #[rstest]
    #[actix_web::test]
    async fn request_ids_differ_between_requests() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let first =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        let second =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert_ne!(header_id(&first), header_id(&second));
    }

    #[rstest]
    #[actix_web::test]
    async fn extracting_without_middleware_is_an_error() {
        let req = actix_test::TestRequest::default().to_http_request();
        let result = RequestId::extract(&req).await;
        assert!(result.is_err());
    }
}
