use crate::domain::model::{Person, StoredPerson};
use crate::domain::ports::{PersonStore, StoreResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Process-local person collection. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersonStore {
    documents: Arc<RwLock<Vec<StoredPerson>>>,
    counter: Arc<AtomicU64>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 產生 24 位十六進位 id：秒數時間戳 + 遞增計數
    fn next_id(&self) -> String {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{:08x}{:016x}", seconds as u32, count)
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn insert(&self, person: Person) -> StoreResult<StoredPerson> {
        let stored = StoredPerson::new(self.next_id(), person);
        self.documents.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> StoreResult<Vec<StoredPerson>> {
        Ok(self.documents.read().await.clone())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
