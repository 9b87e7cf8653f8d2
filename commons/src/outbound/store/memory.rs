//! In-memory entity store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::Entity;
use crate::domain::ports::{EntityStore, EntityStoreError};

/// Entity store backed by a `BTreeMap`.
///
/// Enumeration follows identifier order. Each operation takes the lock for
/// its own duration only, so concurrent callers observe every save and
/// delete atomically.
pub struct InMemoryEntityStore<T: Entity> {
    entities: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: Entity> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Entity> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entities`.
    ///
    /// Later entities replace earlier ones sharing an identifier.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let map = entities
            .into_iter()
            .map(|entity| (entity.id().clone(), entity))
            .collect();
        Self {
            entities: RwLock::new(map),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<T::Id, T>>, EntityStoreError> {
        self.entities
            .read()
            .map_err(|_| EntityStoreError::backend("in-memory entity store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<T::Id, T>>, EntityStoreError> {
        self.entities
            .write()
            .map_err(|_| EntityStoreError::backend("in-memory entity store lock poisoned"))
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryEntityStore<T> {
    async fn save(&self, entity: T) -> Result<T, EntityStoreError> {
        self.write()?.insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }

    async fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, EntityStoreError> {
        let mut map = self.write()?;
        for entity in &entities {
            map.insert(entity.id().clone(), entity.clone());
        }
        Ok(entities)
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, EntityStoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &T::Id) -> Result<bool, EntityStoreError> {
        Ok(self.read()?.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<T>, EntityStoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, EntityStoreError> {
        let map = self.read()?;
        let unique: BTreeSet<&T::Id> = ids.iter().collect();
        Ok(unique
            .into_iter()
            .filter_map(|id| map.get(id).cloned())
            .collect())
    }

    async fn count(&self) -> Result<u64, EntityStoreError> {
        let len = self.read()?.len();
        u64::try_from(len).map_err(|_| EntityStoreError::backend("entity count exceeds u64"))
    }

    async fn delete_by_id(&self, id: &T::Id) -> Result<(), EntityStoreError> {
        match self.write()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(EntityStoreError::not_found(id.to_string())),
        }
    }

    async fn delete(&self, entity: &T) -> Result<(), EntityStoreError> {
        self.write()?.remove(entity.id());
        Ok(())
    }

    async fn delete_many(&self, entities: &[T]) -> Result<(), EntityStoreError> {
        let mut map = self.write()?;
        for entity in entities {
            map.remove(entity.id());
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), EntityStoreError> {
        self.write()?.clear();
        Ok(())
    }
}
