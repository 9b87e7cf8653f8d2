//! Documented CRUD endpoints for the sample [`Book`] resource.
//!
//! ```text
//! POST   /api/v1/books        {"title":"Dune","author":"Frank Herbert"}
//! GET    /api/v1/books
//! GET    /api/v1/books/{id}
//! PUT    /api/v1/books/{id}   {"id":"…","title":"Dune","author":"Frank Herbert"}
//! DELETE /api/v1/books/{id}
//! ```
//!
//! The handlers delegate to the generic [`CrudController`]; they exist so the
//! routes carry OpenAPI annotations.

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::domain::Book;

use super::ApiResult;
use super::crud::CrudController;
use super::schemas::{BookSchema, ErrorEnvelopeSchema};

/// Store a new book.
#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = BookSchema,
    responses(
        (status = 201, description = "Book stored", body = BookSchema),
        (status = 400, description = "Malformed body", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("")]
pub async fn create_book(
    controller: web::Data<CrudController<Book>>,
    payload: web::Json<Book>,
) -> ApiResult<HttpResponse> {
    controller.create(payload.into_inner()).await
}

/// List every stored book.
#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "All books", body = [BookSchema]),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("")]
pub async fn list_books(controller: web::Data<CrudController<Book>>) -> ApiResult<HttpResponse> {
    controller.list().await
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    params(("id" = Uuid, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book found", body = BookSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "No such book", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/{id}")]
pub async fn get_book(
    controller: web::Data<CrudController<Book>>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    controller.get_by_id(id.into_inner()).await
}

/// Replace an existing book.
///
/// The payload's `id` must match the path.
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    params(("id" = Uuid, Path, description = "Book identifier")),
    request_body = BookSchema,
    responses(
        (status = 200, description = "Book replaced", body = BookSchema),
        (status = 400, description = "Malformed body or mismatched id", body = ErrorEnvelopeSchema),
        (status = 404, description = "No such book", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/{id}")]
pub async fn update_book(
    controller: web::Data<CrudController<Book>>,
    id: web::Path<Uuid>,
    payload: web::Json<Book>,
) -> ApiResult<HttpResponse> {
    controller
        .update(id.into_inner(), payload.into_inner())
        .await
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    params(("id" = Uuid, Path, description = "Book identifier")),
    responses(
        (status = 204, description = "Book removed"),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "No such book", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/{id}")]
pub async fn delete_book(
    controller: web::Data<CrudController<Book>>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    controller.delete(id.into_inner()).await
}

/// Register the book handlers on a `/books` scope.
///
/// The caller provides the controller as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/books")
            .service(create_book)
            .service(list_books)
            .service(get_book)
            .service(update_book)
            .service(delete_book),
    );
}
