//! Session registry — one live `ResumeStore` per builder session.
//!
//! Purely in-memory: a session exists from create until delete or process
//! exit. There is no persistence and no TTL sweeper.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::resume_store::ResumeStore;

pub type SharedStore = Arc<Mutex<ResumeStore>>;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, SharedStore>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a blank resume and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let store = Arc::new(Mutex::new(ResumeStore::new()));
        self.inner.lock().await.insert(id, store);
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<SharedStore, AppError> {
        self.inner
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Discards the session and everything it holds.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.lock().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_remove_lifecycle() {
        let registry = SessionRegistry::new();
        let id = registry.create().await;
        assert_eq!(registry.count().await, 1);

        let store = registry.get(id).await.unwrap();
        assert_eq!(store.lock().await.revision(), 0);

        assert!(registry.remove(id).await);
        assert!(!registry.remove(id).await);
        assert!(registry.get(id).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let registry = SessionRegistry::new();
        let err = registry.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let registry = SessionRegistry::new();
        let a = registry.create().await;
        let b = registry.create().await;

        let store_a = registry.get(a).await.unwrap();
        store_a
            .lock()
            .await
            .update_professional_summary("A".to_string(), vec![]);

        let store_b = registry.get(b).await.unwrap();
        assert!(store_b.lock().await.data().professional_summary.content.is_empty());
    }
}
