use crate::domain::model::{Person, StoredPerson};
use crate::utils::error::StoreError;
use async_trait::async_trait;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The single person collection in the document store.
///
/// Implementations own durability and ordering; callers hold no copy of the
/// data between requests.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Writes exactly one new document.
    async fn insert(&self, person: Person) -> StoreResult<StoredPerson>;

    /// Returns every document in the store's native order.
    async fn find_all(&self) -> StoreResult<Vec<StoredPerson>>;

    fn backend(&self) -> &'static str;
}
