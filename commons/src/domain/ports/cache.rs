//! Key/value cache port.

use std::hash::Hash;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by cache adapters.
    pub enum CacheError {
        /// The backing cache failed or is unusable.
        Backend { message: String } => "cache backend failed: {message}",
    }
}

/// Port for caching values of type `V` under keys of type `K`.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Store `value` under `key`, replacing any previous value.
    async fn save(&self, key: K, value: V) -> Result<V, CacheError>;

    async fn get(&self, key: &K) -> Result<Option<V>, CacheError>;

    /// Drop the value stored under `key`, if any.
    async fn remove(&self, key: &K) -> Result<(), CacheError>;

    async fn clear(&self) -> Result<(), CacheError>;

    async fn contains(&self, key: &K) -> Result<bool, CacheError>;
}
