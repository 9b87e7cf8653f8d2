//! Persistence port for ID-keyed entities.
//!
//! The store behaves as a set keyed by [`Entity::Id`]: `exists_by_id(id)` is
//! true iff a prior `save` established `id` and no later delete removed it.
//! Concurrency control is the adapter's business.

use async_trait::async_trait;

use crate::domain::Entity;

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum EntityStoreError {
        /// No entity is stored under the identifier.
        NotFound { id: String } => "entity {id} not found",
        /// The backing store failed or is unusable.
        Backend { message: String } => "entity store backend failed: {message}",
    }
}

/// Port for storing and retrieving entities of type `T`.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert or replace an entity, returning the stored value.
    async fn save(&self, entity: T) -> Result<T, EntityStoreError>;

    /// Insert or replace several entities.
    async fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, EntityStoreError>;

    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, EntityStoreError>;

    async fn exists_by_id(&self, id: &T::Id) -> Result<bool, EntityStoreError>;

    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, EntityStoreError>;

    /// Entities stored under any of `ids`.
    ///
    /// Missing identifiers are silently omitted and a repeated identifier
    /// yields its entity once. Callers must not rely on the order of the
    /// returned entities.
    async fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, EntityStoreError>;

    async fn count(&self) -> Result<u64, EntityStoreError>;

    /// Remove the entity stored under `id`.
    ///
    /// Fails with [`EntityStoreError::NotFound`] when nothing is stored there.
    async fn delete_by_id(&self, id: &T::Id) -> Result<(), EntityStoreError>;

    /// Remove `entity` by its identifier. Absent entities are ignored.
    async fn delete(&self, entity: &T) -> Result<(), EntityStoreError>;

    /// Remove each of `entities`. Absent entities are ignored.
    async fn delete_many(&self, entities: &[T]) -> Result<(), EntityStoreError>;

    /// Remove everything.
    async fn delete_all(&self) -> Result<(), EntityStoreError>;
}
