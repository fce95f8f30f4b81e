//! Remote per-account document storage.

use crate::error::StoreResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Abstract remote document store, one JSON document per account email.
///
/// Implementations must provide merge semantics: a partial update may not
/// erase fields the patch does not mention.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the document for `email`, or `None` if absent.
    async fn fetch(&self, email: &str) -> StoreResult<Option<Value>>;

    /// Merges `patch` into the document for `email`, creating it if absent.
    /// Top-level fields named by the patch are replaced; all others are
    /// preserved.
    async fn upsert_merge(&self, email: &str, patch: Value) -> StoreResult<()>;
}

/// Merges `patch` into `doc` field-by-field at the top level.
///
/// Non-object inputs degrade to replacement, matching document stores that
/// only merge map-shaped values.
pub fn merge_document(doc: &mut Value, patch: Value) {
    match (doc, patch) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (doc, patch) => *doc = patch,
    }
}

/// In-memory remote store for tests and offline development.
#[derive(Debug, Default)]
pub struct MemoryRemoteStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryRemoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document directly, bypassing merge semantics. Test setup only.
    pub async fn seed(&self, email: &str, doc: Value) {
        self.documents.write().await.insert(email.to_string(), doc);
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn fetch(&self, email: &str) -> StoreResult<Option<Value>> {
        Ok(self.documents.read().await.get(email).cloned())
    }

    async fn upsert_merge(&self, email: &str, patch: Value) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(email) {
            Some(doc) => merge_document(doc, patch),
            None => {
                let mut doc = Value::Object(serde_json::Map::new());
                merge_document(&mut doc, patch);
                documents.insert(email.to_string(), doc);
            }
        }
        Ok(())
    }
}
