//! Test doubles shared by domain unit tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::Book;
use crate::domain::ports::{EntityStore, EntityStoreError};

mock! {
    pub BookStore {}

    #[async_trait]
    impl EntityStore<Book> for BookStore {
        async fn save(&self, entity: Book) -> Result<Book, EntityStoreError>;
        async fn save_all(&self, entities: Vec<Book>) -> Result<Vec<Book>, EntityStoreError>;
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<Book>, EntityStoreError>;
        async fn exists_by_id(&self, id: &Uuid) -> Result<bool, EntityStoreError>;
        async fn find_all(&self) -> Result<Vec<Book>, EntityStoreError>;
        async fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Book>, EntityStoreError>;
        async fn count(&self) -> Result<u64, EntityStoreError>;
        async fn delete_by_id(&self, id: &Uuid) -> Result<(), EntityStoreError>;
        async fn delete(&self, entity: &Book) -> Result<(), EntityStoreError>;
        async fn delete_many(&self, entities: &[Book]) -> Result<(), EntityStoreError>;
        async fn delete_all(&self) -> Result<(), EntityStoreError>;
    }
}
