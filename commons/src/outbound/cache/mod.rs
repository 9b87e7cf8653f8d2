//! In-memory cache adapter.
//!
//! Implements the [`Cache`] port over a `HashMap` guarded by a `RwLock`.
//! Entries never expire; callers evict with `remove` or `clear`. The lock is
//! never held across an `.await`, and a poisoned lock surfaces as
//! [`CacheError::Backend`].

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{Cache, CacheError};

/// Process-local cache.
#[derive(Debug)]
pub struct InMemoryCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for InMemoryCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> InMemoryCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<K, V>>, CacheError> {
        self.entries
            .read()
            .map_err(|_| CacheError::backend("in-memory cache lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<K, V>>, CacheError> {
        self.entries
            .write()
            .map_err(|_| CacheError::backend("in-memory cache lock poisoned"))
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for InMemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn save(&self, key: K, value: V) -> Result<V, CacheError> {
        self.write()?.insert(key, value.clone());
        Ok(value)
    }

    async fn get(&self, key: &K) -> Result<Option<V>, CacheError> {
        Ok(self.read()?.get(key).cloned())
    }

    async fn remove(&self, key: &K) -> Result<(), CacheError> {
        self.write()?.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.write()?.clear();
        Ok(())
    }

    async fn contains(&self, key: &K) -> Result<bool, CacheError> {
        Ok(self.read()?.contains_key(key))
    }
}
