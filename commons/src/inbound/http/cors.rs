//! CORS policy built from [`CorsSettings`].
//!
//! Settings are validated up front so a typo in a method or header name
//! fails at startup instead of surfacing as a confusing preflight rejection.

use std::str::FromStr;

use actix_cors::Cors;
use actix_web::http::header::HeaderName;
use actix_web::http::{Method, Uri};
use thiserror::Error;

use crate::settings::CorsSettings;

const WILDCARD: &str = "*";

/// Rejected CORS settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorsConfigError {
    #[error("invalid CORS origin `{0}`")]
    InvalidOrigin(String),
    #[error("invalid CORS method `{0}`")]
    InvalidMethod(String),
    #[error("invalid CORS header `{0}`")]
    InvalidHeader(String),
    #[error("no CORS {0} configured")]
    Empty(&'static str),
}

/// Either every value or an explicit allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allowed<T> {
    Any,
    Some(Vec<T>),
}

impl<T> Allowed<T> {
    fn parse(
        items: Vec<String>,
        what: &'static str,
        parse: impl Fn(String) -> Result<T, CorsConfigError>,
    ) -> Result<Self, CorsConfigError> {
        if items.iter().any(|item| item == WILDCARD) {
            return Ok(Self::Any);
        }
        if items.is_empty() {
            return Err(CorsConfigError::Empty(what));
        }
        items.into_iter().map(parse).collect::<Result<_, _>>().map(Self::Some)
    }
}

/// Validated CORS policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    origins: Allowed<String>,
    methods: Allowed<Method>,
    headers: Allowed<HeaderName>,
    allow_credentials: bool,
    max_age: Option<usize>,
}

impl CorsPolicy {
    /// Validate `settings`.
    pub fn from_settings(settings: &CorsSettings) -> Result<Self, CorsConfigError> {
        let origins = Allowed::parse(settings.allowed_origins(), "origins", parse_origin)?;
        let methods = Allowed::parse(settings.allowed_methods(), "methods", |method| {
            Method::from_str(&method.to_ascii_uppercase())
                .map_err(|_| CorsConfigError::InvalidMethod(method))
        })?;
        let headers = Allowed::parse(settings.allowed_headers(), "headers", |header| {
            HeaderName::from_str(&header).map_err(|_| CorsConfigError::InvalidHeader(header))
        })?;
        Ok(Self {
            origins,
            methods,
            headers,
            allow_credentials: settings.allow_credentials,
            max_age: settings.max_age,
        })
    }

    pub fn origins(&self) -> &Allowed<String> {
        &self.origins
    }

    pub fn methods(&self) -> &Allowed<Method> {
        &self.methods
    }

    pub fn headers(&self) -> &Allowed<HeaderName> {
        &self.headers
    }

    /// Build the actix middleware. Call once per worker.
    pub fn middleware(&self) -> Cors {
        let cors = match &self.origins {
            Allowed::Any => Cors::default().allow_any_origin(),
            Allowed::Some(origins) => origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
        };
        let cors = match &self.methods {
            Allowed::Any => cors.allow_any_method(),
            Allowed::Some(methods) => cors.allowed_methods(methods.iter().map(Method::as_str)),
        };
        let cors = match &self.headers {
            Allowed::Any => cors.allow_any_header(),
            Allowed::Some(headers) => cors.allowed_headers(headers.iter().map(HeaderName::as_str)),
        };
        let cors = if self.allow_credentials {
            cors.supports_credentials()
        } else {
            cors
        };
        cors.max_age(self.max_age)
    }
}

/// Accept `origin` only when it parses as an absolute URI with a host, the
/// same check `Cors::allowed_origin` applies lazily.
fn parse_origin(origin: String) -> Result<String, CorsConfigError> {
    match Uri::try_from(origin.as_str()) {
        Ok(uri) if uri.scheme().is_some() && uri.host().is_some() => Ok(origin),
        _ => Err(CorsConfigError::InvalidOrigin(origin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> CorsSettings {
        crate::test_support::default_settings().cors
    }

    #[rstest]
    fn defaults_allow_everything_with_standard_methods(settings: CorsSettings) {
        let policy = CorsPolicy::from_settings(&settings).expect("valid policy");

        assert_eq!(policy.origins(), &Allowed::Any);
        assert_eq!(policy.headers(), &Allowed::Any);
        assert_eq!(
            policy.methods(),
            &Allowed::Some(vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS
            ])
        );
    }

    #[rstest]
    fn lowercase_methods_are_normalised(mut settings: CorsSettings) {
        settings.allowed_methods = vec!["get".to_owned(), " patch".to_owned()];

        let policy = CorsPolicy::from_settings(&settings).expect("valid policy");

        assert_eq!(
            policy.methods(),
            &Allowed::Some(vec![Method::GET, Method::PATCH])
        );
    }

    #[rstest]
    #[case(&["https://ok.example", "bad\norigin"], &[], CorsConfigError::InvalidOrigin("bad\norigin".to_owned()))]
    #[case(&["foo bar"], &[], CorsConfigError::InvalidOrigin("foo bar".to_owned()))]
    #[case(&["app.example"], &[], CorsConfigError::InvalidOrigin("app.example".to_owned()))]
    #[case(&[], &["x-ok", "bad header"], CorsConfigError::InvalidHeader("bad header".to_owned()))]
    fn invalid_values_are_rejected(
        mut settings: CorsSettings,
        #[case] origins: &[&str],
        #[case] headers: &[&str],
        #[case] expected: CorsConfigError,
    ) {
        settings.allowed_origins = origins.iter().map(|origin| (*origin).to_owned()).collect();
        settings.allowed_headers = headers.iter().map(|header| (*header).to_owned()).collect();

        assert_eq!(CorsPolicy::from_settings(&settings), Err(expected));
    }

    #[rstest]
    fn empty_lists_are_rejected(mut settings: CorsSettings) {
        settings.allowed_methods = vec![" ".to_owned(), String::new()];

        assert_eq!(
            CorsPolicy::from_settings(&settings),
            Err(CorsConfigError::Empty("methods"))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_from_listed_origin_is_allowed(mut settings: CorsSettings) {
        settings.allowed_origins = vec!["https://app.example".to_owned()];
        let policy = CorsPolicy::from_settings(&settings).expect("valid policy");
        let app = actix_test::init_service(
            App::new()
                .wrap(policy.middleware())
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let request = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://app.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("https://app.example")
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|value| value.to_str().ok()),
            Some("true")
        );
    }
}
