use crate::domain::model::{Person, PersonInput, StoredPerson};
use crate::domain::ports::{PersonStore, StoreResult};
use std::sync::Arc;

/// Mediates between requests and the person collection.
///
/// Holds nothing but the injected store handle, so cloning is cheap and every
/// request sees the same collection.
#[derive(Clone)]
pub struct PersonDirectory {
    store: Arc<dyn PersonStore>,
}

impl PersonDirectory {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Creates one document per call and echoes the raw input on success.
    pub async fn append(&self, input: PersonInput) -> StoreResult<PersonInput> {
        let person = Person::cast(&input)?;
        let stored = self.store.insert(person).await?;
        tracing::debug!(
            "Created person {} via {}",
            stored.id().unwrap_or("?"),
            self.store.backend()
        );
        Ok(input)
    }

    pub async fn list_all(&self) -> StoreResult<Vec<StoredPerson>> {
        let people = self.store.find_all().await?;
        tracing::debug!("Listed {} people via {}", people.len(), self.store.backend());
        Ok(people)
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryPersonStore;
    use crate::utils::error::StoreError;
    use async_trait::async_trait;
    use serde_json::json;

    struct UnreachableStore;

    #[async_trait]
    impl PersonStore for UnreachableStore {
        async fn insert(&self, _person: Person) -> StoreResult<StoredPerson> {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        }

        async fn find_all(&self) -> StoreResult<Vec<StoredPerson>> {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        }

        fn backend(&self) -> &'static str {
            "unreachable"
        }
    }

    fn input(value: serde_json::Value) -> PersonInput {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_append_echoes_input_and_persists() {
        let store = MemoryPersonStore::new();
        let directory = PersonDirectory::new(Arc::new(store.clone()));

        let echoed = directory
            .append(input(json!({"name": "Ada", "age": "36"})))
            .await
            .unwrap();

        // 回傳原始輸入，不是轉型後的值
        assert_eq!(echoed.age, Some(json!("36")));

        let all = directory.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), Some("Ada"));
        assert_eq!(all[0].age(), Some(&json!(36)));
    }

    #[tokio::test]
    async fn test_append_is_not_idempotent() {
        let directory = PersonDirectory::new(Arc::new(MemoryPersonStore::new()));
        let before = directory.list_all().await.unwrap().len();

        for _ in 0..2 {
            directory
                .append(input(json!({"name": "Ada", "age": 36})))
                .await
                .unwrap();
        }

        let all = directory.list_all().await.unwrap();
        assert_eq!(all.len(), before + 2);
        assert_ne!(all[0].id(), all[1].id());
    }

    #[tokio::test]
    async fn test_cast_failure_writes_nothing() {
        let store = MemoryPersonStore::new();
        let directory = PersonDirectory::new(Arc::new(store.clone()));

        let err = directory
            .append(input(json!({"name": "Ada", "age": "abc"})))
            .await
            .unwrap_err();

        assert!(err.is_rejection());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let directory = PersonDirectory::new(Arc::new(UnreachableStore));

        let err = directory.append(PersonInput::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));

        let err = directory.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }
}
