//! Server construction and middleware wiring.

mod config;

pub use config::{DEFAULT_AUDITOR, ServerConfig, ServerConfigError};

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDocs;
use crate::domain::ports::FixedAuditor;
use crate::domain::{Book, EntityFacade, EntityService};
use crate::inbound::http::books;
use crate::inbound::http::cors::CorsPolicy;
use crate::inbound::http::crud::CrudController;
use crate::inbound::http::docs::{group_document, list_groups};
use crate::inbound::http::extractors::{json_config, path_config, route_not_found};
use crate::middleware::RequestTrace;
use crate::outbound::store::{AuditingStore, InMemoryEntityStore};

/// State shared by every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub books: web::Data<CrudController<Book>>,
    pub docs: web::Data<ApiDocs>,
    pub cors: CorsPolicy,
}

impl AppDependencies {
    /// Build the book controller over an audited in-memory store.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = AuditingStore::<Book, String>::new(
            Arc::new(InMemoryEntityStore::<Book>::new()),
            Arc::new(FixedAuditor::new(config.auditor.clone())),
            Arc::clone(&config.clock),
        );
        let facade = EntityFacade::new(EntityService::new(Arc::new(store)));
        Self {
            books: web::Data::new(CrudController::new(
                "book",
                facade,
                config.instrumentation,
            )),
            docs: web::Data::new(config.docs.clone()),
            cors: config.cors.clone(),
        }
    }
}

/// Assemble the application.
///
/// Routes:
/// - `/api/v1/books` CRUD endpoints
/// - `/api-docs/openapi.json` and Swagger UI under `/docs/`
/// - `/api-docs/groups` and `/api-docs/groups/{group}`
///
/// Anything else answers with a `404` envelope.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies { books, docs, cors } = deps;
    let primary = docs.primary().clone();

    App::new()
        .app_data(books)
        .app_data(docs)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(cors.middleware())
        .wrap(RequestTrace)
        .service(web::scope("/api/v1").configure(books::configure))
        .service(list_groups)
        .service(group_document)
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", primary))
        .default_service(web::route().to(route_not_found))
}

/// Construct an Actix HTTP server from a validated configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let deps = AppDependencies::from_config(&config);
    let (host, port) = config.bind_addr();
    info!(%host, port, "binding http server");

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind((host, port))?
        .run();
    Ok(server)
}
