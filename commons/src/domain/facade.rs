//! Generic CRUD semantics over an [`EntityService`].
//!
//! The façade decides *which* outcome an operation has (created, found,
//! missing, gone) without knowing how that outcome is rendered. The HTTP
//! adapter turns [`Outcome`] into status codes and bodies.

use tracing::debug;

use crate::domain::{Entity, EntityService, Error};

/// Result of a CRUD operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A new record was stored.
    Created(T),
    /// The operation succeeded and yields a value.
    Ok(T),
    /// The operation succeeded without a value.
    NoContent,
    /// The addressed record does not exist.
    NotFound,
}

impl<T> Outcome<T> {
    /// Value carried by `Created` or `Ok`.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Created(value) | Self::Ok(value) => Some(value),
            Self::NoContent | Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// CRUD façade for entities of type `T`.
///
/// `update` and `delete` check existence before touching the store, so an
/// unknown identifier never reaches `save` or `delete_by_id`.
pub struct EntityFacade<T: Entity> {
    service: EntityService<T>,
}

impl<T: Entity> Clone for EntityFacade<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T: Entity> EntityFacade<T> {
    pub fn new(service: EntityService<T>) -> Self {
        Self { service }
    }

    /// Underlying entity service.
    pub fn service(&self) -> &EntityService<T> {
        &self.service
    }

    /// Store `entity` and report it as created.
    pub async fn create(&self, entity: T) -> Result<Outcome<T>, Error> {
        let saved = self.service.save(entity).await?;
        Ok(Outcome::Created(saved))
    }

    pub async fn list(&self) -> Result<Outcome<Vec<T>>, Error> {
        let entities = self.service.find_all().await?;
        Ok(Outcome::Ok(entities))
    }

    pub async fn get_by_id(&self, id: T::Id) -> Result<Outcome<T>, Error> {
        match self.service.find_by_id(&id).await? {
            Some(entity) => Ok(Outcome::Ok(entity)),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Replace the entity stored under `id`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidRequest`](crate::domain::ErrorKind::InvalidRequest)
    /// when the payload identifies a different entity than `id`.
    pub async fn update(&self, id: T::Id, entity: T) -> Result<Outcome<T>, Error> {
        if !self.service.exists_by_id(&id).await? {
            debug!(%id, "update skipped: entity missing");
            return Ok(Outcome::NotFound);
        }
        if entity.id() != &id {
            return Err(Error::invalid_request(format!(
                "payload id {} does not match path id {id}",
                entity.id()
            )));
        }
        let saved = self.service.save(entity).await?;
        Ok(Outcome::Ok(saved))
    }

    pub async fn delete(&self, id: T::Id) -> Result<Outcome<()>, Error> {
        if !self.service.exists_by_id(&id).await? {
            debug!(%id, "delete skipped: entity missing");
            return Ok(Outcome::NotFound);
        }
        self.service.delete_by_id(&id).await?;
        Ok(Outcome::NoContent)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::test_doubles::MockBookStore;
    use crate::domain::{Book, ErrorKind};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn book() -> Book {
        Book::new("The Left Hand of Darkness", "Ursula K. Le Guin")
    }

    fn facade(store: MockBookStore) -> EntityFacade<Book> {
        EntityFacade::new(EntityService::new(Arc::new(store)))
    }

    #[rstest]
    #[tokio::test]
    async fn create_reports_created(book: Book) {
        let mut store = MockBookStore::new();
        store.expect_save().times(1).returning(Ok);

        let outcome = facade(store).create(book.clone()).await.expect("create");

        assert_eq!(outcome, Outcome::Created(book));
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_everything(book: Book) {
        let stored = vec![book];
        let returned = stored.clone();
        let mut store = MockBookStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(move || Ok(returned.clone()));

        let outcome = facade(store).list().await.expect("list");

        assert_eq!(outcome, Outcome::Ok(stored));
    }

    #[rstest]
    #[tokio::test]
    async fn get_by_id_reports_missing_entities() {
        let mut store = MockBookStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));

        let outcome = facade(store)
            .get_by_id(Uuid::new_v4())
            .await
            .expect("lookup");

        assert!(outcome.is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_entity_never_saves(book: Book) {
        let mut store = MockBookStore::new();
        store
            .expect_exists_by_id()
            .with(eq(book.id))
            .times(1)
            .returning(|_| Ok(false));
        store.expect_save().never();

        let outcome = facade(store)
            .update(book.id, book.clone())
            .await
            .expect("update");

        assert_eq!(outcome, Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn update_saves_existing_entity(book: Book) {
        let mut store = MockBookStore::new();
        store.expect_exists_by_id().times(1).returning(|_| Ok(true));
        store.expect_save().times(1).returning(Ok);

        let outcome = facade(store)
            .update(book.id, book.clone())
            .await
            .expect("update");

        assert_eq!(outcome, Outcome::Ok(book));
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_mismatched_ids(book: Book) {
        let mut store = MockBookStore::new();
        store.expect_exists_by_id().times(1).returning(|_| Ok(true));
        store.expect_save().never();

        let err = facade(store)
            .update(Uuid::new_v4(), book)
            .await
            .expect_err("mismatched ids");

        assert_eq!(err.kind(), Some(ErrorKind::InvalidRequest));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_missing_entity_never_deletes() {
        let mut store = MockBookStore::new();
        store.expect_exists_by_id().times(1).returning(|_| Ok(false));
        store.expect_delete_by_id().never();
        store.expect_delete().never();

        let outcome = facade(store)
            .delete(Uuid::new_v4())
            .await
            .expect("delete");

        assert_eq!(outcome, Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_existing_entity_reports_no_content(book: Book) {
        let mut store = MockBookStore::new();
        store.expect_exists_by_id().times(1).returning(|_| Ok(true));
        store
            .expect_delete_by_id()
            .with(eq(book.id))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = facade(store).delete(book.id).await.expect("delete");

        assert_eq!(outcome, Outcome::NoContent);
    }

    #[rstest]
    #[tokio::test]
    async fn store_failures_propagate() {
        let mut store = MockBookStore::new();
        store
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Err(crate::domain::ports::EntityStoreError::backend("offline")));

        let err = facade(store)
            .delete(Uuid::new_v4())
            .await
            .expect_err("backend failure");

        assert_eq!(err.kind(), Some(ErrorKind::Internal));
    }
}
