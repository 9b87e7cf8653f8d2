//! Store decorator maintaining audit metadata.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::Audited;
use crate::domain::ports::{AuditorAware, EntityStore, EntityStoreError};

/// Stamps [`AuditMetadata`](crate::domain::AuditMetadata) on every save.
///
/// First saves of an identifier record creation and modification fields.
/// Later saves copy the creation fields from the stored record and refresh
/// the modification fields. All other operations are forwarded untouched.
pub struct AuditingStore<T, U> {
    inner: Arc<dyn EntityStore<T>>,
    auditor: Arc<dyn AuditorAware<U>>,
    clock: Arc<dyn Clock>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, U> AuditingStore<T, U>
where
    T: Audited<U>,
    U: Clone + Send + Sync + 'static,
{
    pub fn new(
        inner: Arc<dyn EntityStore<T>>,
        auditor: Arc<dyn AuditorAware<U>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner,
            auditor,
            clock,
            _entity: PhantomData,
        }
    }

    async fn stamp(&self, entity: &mut T) -> Result<(), EntityStoreError> {
        let now = self.clock.utc();
        let auditor = self.auditor.current_auditor();
        let previous = self.inner.find_by_id(entity.id()).await?;
        match previous {
            Some(previous) => {
                debug!(id = %entity.id(), "stamping modification");
                entity
                    .audit_mut()
                    .record_modification(previous.audit(), now, auditor);
            }
            None => {
                debug!(id = %entity.id(), "stamping creation");
                entity.audit_mut().record_creation(now, auditor);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<T, U> EntityStore<T> for AuditingStore<T, U>
where
    T: Audited<U>,
    U: Clone + Send + Sync + 'static,
{
    async fn save(&self, mut entity: T) -> Result<T, EntityStoreError> {
        self.stamp(&mut entity).await?;
        self.inner.save(entity).await
    }

    async fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, EntityStoreError> {
        let mut stamped = Vec::with_capacity(entities.len());
        for mut entity in entities {
            self.stamp(&mut entity).await?;
            stamped.push(entity);
        }
        self.inner.save_all(stamped).await
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, EntityStoreError> {
        self.inner.find_by_id(id).await
    }

    async fn exists_by_id(&self, id: &T::Id) -> Result<bool, EntityStoreError> {
        self.inner.exists_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<T>, EntityStoreError> {
        self.inner.find_all().await
    }

    async fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, EntityStoreError> {
        self.inner.find_all_by_id(ids).await
    }

    async fn count(&self) -> Result<u64, EntityStoreError> {
        self.inner.count().await
    }

    async fn delete_by_id(&self, id: &T::Id) -> Result<(), EntityStoreError> {
        self.inner.delete_by_id(id).await
    }

    async fn delete(&self, entity: &T) -> Result<(), EntityStoreError> {
        self.inner.delete(entity).await
    }

    async fn delete_many(&self, entities: &[T]) -> Result<(), EntityStoreError> {
        self.inner.delete_many(entities).await
    }

    async fn delete_all(&self) -> Result<(), EntityStoreError> {
        self.inner.delete_all().await
    }
}
