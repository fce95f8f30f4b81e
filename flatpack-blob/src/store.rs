//! In-memory blob store and single-owner blob references.

use crate::error::{BlobError, BlobResult};
use flatpack_types::BlobId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared in-memory store for staged download content.
///
/// Cloning the store clones the handle, not the content; all clones see the
/// same staged blobs.
#[derive(Debug, Clone, Default)]
pub struct BlobStore {
    inner: Arc<Mutex<HashMap<BlobId, Vec<u8>>>>,
}

impl BlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages bytes and returns the owning reference.
    #[must_use]
    pub fn stage(&self, bytes: Vec<u8>) -> BlobRef {
        let id = BlobId::new();
        self.lock().insert(id, bytes);
        BlobRef {
            id,
            store: self.clone(),
            released: false,
        }
    }

    /// Returns the number of blobs currently staged.
    #[must_use]
    pub fn staged_count(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no blobs are staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn read(&self, id: BlobId) -> BlobResult<Vec<u8>> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(BlobError::NotStaged(id))
    }

    fn remove(&self, id: BlobId) {
        self.lock().remove(&id);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BlobId, Vec<u8>>> {
        // The map stays coherent even if a holder panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Single-owner handle to one staged blob.
///
/// Not cloneable: whichever component holds the reference last is the one
/// that releases it. [`BlobRef::revoke`] consumes the handle at hand-off;
/// dropping an unrevoked handle releases the blob as well, so early returns
/// and error paths cannot leak staged bytes.
#[derive(Debug)]
pub struct BlobRef {
    id: BlobId,
    store: BlobStore,
    released: bool,
}

impl BlobRef {
    /// Returns the blob's identifier.
    #[must_use]
    pub fn id(&self) -> BlobId {
        self.id
    }

    /// Fetches a copy of the staged bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::NotStaged`] if the blob has been released.
    pub fn bytes(&self) -> BlobResult<Vec<u8>> {
        self.store.read(self.id)
    }

    /// Revokes the reference, releasing the staged bytes.
    pub fn revoke(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.store.remove(self.id);
        }
    }
}

impl Drop for BlobRef {
    fn drop(&mut self) {
        self.release();
    }
}
