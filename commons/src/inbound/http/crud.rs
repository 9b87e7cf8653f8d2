//! Generic CRUD handlers for any [`Entity`].
//!
//! ```text
//! POST   {path}        create  -> 201 + entity
//! GET    {path}        list    -> 200 + entities
//! GET    {path}/{id}   read    -> 200 + entity | 404 envelope
//! PUT    {path}/{id}   update  -> 200 + entity | 404 envelope
//! DELETE {path}/{id}   delete  -> 204          | 404 envelope
//! ```
//!
//! Handlers delegate to an [`EntityFacade`] through a [`CrudController`],
//! which wraps every façade call in the configured logging and timing
//! decorators.

use std::borrow::Cow;

use actix_web::{HttpResponse, Scope, web};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::decorators::{Instrumentation, Operation, from_fn};
use crate::domain::{Entity, EntityFacade, Error, Outcome};

use super::ApiResult;
use super::extractors::{json_config, path_config};

/// Shared handler state for one resource.
pub struct CrudController<T: Entity> {
    resource: Cow<'static, str>,
    facade: EntityFacade<T>,
    instrumentation: Instrumentation,
}

impl<T> CrudController<T>
where
    T: Entity + Serialize,
{
    /// `resource` names the entity in log events and not-found messages.
    pub fn new(
        resource: impl Into<Cow<'static, str>>,
        facade: EntityFacade<T>,
        instrumentation: Instrumentation,
    ) -> Self {
        Self {
            resource: resource.into(),
            facade,
            instrumentation,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    fn operation_name(&self, action: &str) -> String {
        format!("{}.{action}", self.resource)
    }

    fn missing(&self, id: &T::Id) -> Error {
        Error::not_found(format!("{} {id} not found", self.resource))
    }

    fn respond<V: Serialize>(
        outcome: Outcome<V>,
        missing: impl FnOnce() -> Error,
    ) -> ApiResult<HttpResponse> {
        match outcome {
            Outcome::Created(value) => Ok(HttpResponse::Created().json(value)),
            Outcome::Ok(value) => Ok(HttpResponse::Ok().json(value)),
            Outcome::NoContent => Ok(HttpResponse::NoContent().finish()),
            Outcome::NotFound => Err(missing()),
        }
    }

    pub async fn create(&self, entity: T) -> ApiResult<HttpResponse> {
        let facade = self.facade.clone();
        let operation = from_fn(move |entity: T| {
            let facade = facade.clone();
            async move { facade.create(entity).await }
        });
        let outcome = self
            .instrumentation
            .apply(self.operation_name("create"), operation)
            .call(entity)
            .await?;
        Self::respond(outcome, || Error::internal("create reported a missing entity"))
    }

    pub async fn list(&self) -> ApiResult<HttpResponse> {
        let facade = self.facade.clone();
        let operation = from_fn(move |_: ()| {
            let facade = facade.clone();
            async move { facade.list().await }
        });
        let outcome = self
            .instrumentation
            .apply(self.operation_name("list"), operation)
            .call(())
            .await?;
        Self::respond(outcome, || Error::internal("list reported a missing entity"))
    }

    pub async fn get_by_id(&self, id: T::Id) -> ApiResult<HttpResponse> {
        let facade = self.facade.clone();
        let operation = from_fn(move |id: T::Id| {
            let facade = facade.clone();
            async move { facade.get_by_id(id).await }
        });
        let outcome = self
            .instrumentation
            .apply(self.operation_name("get_by_id"), operation)
            .call(id.clone())
            .await?;
        Self::respond(outcome, || self.missing(&id))
    }

    pub async fn update(&self, id: T::Id, entity: T) -> ApiResult<HttpResponse> {
        let facade = self.facade.clone();
        let operation = from_fn(move |(id, entity): (T::Id, T)| {
            let facade = facade.clone();
            async move { facade.update(id, entity).await }
        });
        let outcome = self
            .instrumentation
            .apply(self.operation_name("update"), operation)
            .call((id.clone(), entity))
            .await?;
        Self::respond(outcome, || self.missing(&id))
    }

    pub async fn delete(&self, id: T::Id) -> ApiResult<HttpResponse> {
        let facade = self.facade.clone();
        let operation = from_fn(move |id: T::Id| {
            let facade = facade.clone();
            async move { facade.delete(id).await }
        });
        let outcome = self
            .instrumentation
            .apply(self.operation_name("delete"), operation)
            .call(id.clone())
            .await?;
        Self::respond(outcome, || self.missing(&id))
    }
}

/// `POST {path}`
pub async fn create<T>(
    controller: web::Data<CrudController<T>>,
    payload: web::Json<T>,
) -> ApiResult<HttpResponse>
where
    T: Entity + Serialize + DeserializeOwned,
{
    controller.create(payload.into_inner()).await
}

/// `GET {path}`
pub async fn list<T>(controller: web::Data<CrudController<T>>) -> ApiResult<HttpResponse>
where
    T: Entity + Serialize,
{
    controller.list().await
}

/// `GET {path}/{id}`
pub async fn get_by_id<T>(
    controller: web::Data<CrudController<T>>,
    id: web::Path<T::Id>,
) -> ApiResult<HttpResponse>
where
    T: Entity + Serialize,
    T::Id: DeserializeOwned,
{
    controller.get_by_id(id.into_inner()).await
}

/// `PUT {path}/{id}`
pub async fn update<T>(
    controller: web::Data<CrudController<T>>,
    id: web::Path<T::Id>,
    payload: web::Json<T>,
) -> ApiResult<HttpResponse>
where
    T: Entity + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
{
    controller.update(id.into_inner(), payload.into_inner()).await
}

/// `DELETE {path}/{id}`
pub async fn delete<T>(
    controller: web::Data<CrudController<T>>,
    id: web::Path<T::Id>,
) -> ApiResult<HttpResponse>
where
    T: Entity + Serialize,
    T::Id: DeserializeOwned,
{
    controller.delete(id.into_inner()).await
}

/// Mount the five CRUD routes for `T` under `path`.
///
/// The scope carries its own controller and extractor configuration, so it
/// can be added to any `App` as-is.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use commons::domain::decorators::Instrumentation;
/// use commons::domain::{Book, EntityFacade, EntityService};
/// use commons::inbound::http::crud::{CrudController, crud_scope};
/// use commons::outbound::store::InMemoryEntityStore;
///
/// let facade = EntityFacade::new(EntityService::new(Arc::new(
///     InMemoryEntityStore::<Book>::new(),
/// )));
/// let controller = CrudController::new("book", facade, Instrumentation::default());
/// let app = App::new().service(crud_scope("/books", controller));
/// ```
pub fn crud_scope<T>(path: &str, controller: CrudController<T>) -> Scope
where
    T: Entity + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
{
    web::scope(path)
        .app_data(web::Data::new(controller))
        .app_data(json_config())
        .app_data(path_config())
        .route("", web::post().to(create::<T>))
        .route("", web::get().to(list::<T>))
        .route("/{id}", web::get().to(get_by_id::<T>))
        .route("/{id}", web::put().to(update::<T>))
        .route("/{id}", web::delete().to(delete::<T>))
}
