//! Delegating service over an [`EntityStore`].
//!
//! The service adds no semantics of its own: it forwards every call to the
//! store and translates store failures into domain [`Error`]s.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::ports::{EntityStore, EntityStoreError};
use crate::domain::{Entity, Error};

/// Entity service backed by a store port.
pub struct EntityService<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
}

impl<T: Entity> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> EntityService<T> {
    /// Create a service delegating to `store`.
    pub fn new(store: Arc<dyn EntityStore<T>>) -> Self {
        Self { store }
    }

    fn map_store_error(err: EntityStoreError) -> Error {
        match err {
            EntityStoreError::NotFound { id } => Error::not_found(format!("entity {id} not found")),
            EntityStoreError::Backend { message } => {
                error!(%message, "entity store failure");
                Error::internal(format!("entity store failure: {message}"))
            }
        }
    }

    pub async fn save(&self, entity: T) -> Result<T, Error> {
        debug!(id = %entity.id(), "saving entity");
        self.store.save(entity).await.map_err(Self::map_store_error)
    }

    pub async fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, Error> {
        debug!(count = entities.len(), "saving entities");
        self.store
            .save_all(entities)
            .await
            .map_err(Self::map_store_error)
    }

    pub async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, Error> {
        debug!(%id, "finding entity");
        self.store.find_by_id(id).await.map_err(Self::map_store_error)
    }

    pub async fn exists_by_id(&self, id: &T::Id) -> Result<bool, Error> {
        self.store
            .exists_by_id(id)
            .await
            .map_err(Self::map_store_error)
    }

    pub async fn find_all(&self) -> Result<Vec<T>, Error> {
        debug!("listing entities");
        self.store.find_all().await.map_err(Self::map_store_error)
    }

    /// Entities stored under any of `ids`; missing ids are omitted.
    pub async fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, Error> {
        debug!(requested = ids.len(), "finding entities by id");
        self.store
            .find_all_by_id(ids)
            .await
            .map_err(Self::map_store_error)
    }

    pub async fn count(&self) -> Result<u64, Error> {
        self.store.count().await.map_err(Self::map_store_error)
    }

    /// Remove the entity stored under `id`.
    ///
    /// Returns [`ErrorKind::NotFound`](crate::domain::ErrorKind::NotFound)
    /// when nothing is stored there.
    pub async fn delete_by_id(&self, id: &T::Id) -> Result<(), Error> {
        debug!(%id, "deleting entity");
        self.store
            .delete_by_id(id)
            .await
            .map_err(Self::map_store_error)
    }

    pub async fn delete(&self, entity: &T) -> Result<(), Error> {
        debug!(id = %entity.id(), "deleting entity");
        self.store.delete(entity).await.map_err(Self::map_store_error)
    }

    pub async fn delete_many(&self, entities: &[T]) -> Result<(), Error> {
        debug!(count = entities.len(), "deleting entities");
        self.store
            .delete_many(entities)
            .await
            .map_err(Self::map_store_error)
    }

    pub async fn delete_all(&self) -> Result<(), Error> {
        debug!("deleting all entities");
        self.store.delete_all().await.map_err(Self::map_store_error)
    }
}
