//! Error types for the blob store.

use flatpack_types::BlobId;
use thiserror::Error;

/// Result type for blob operations.
pub type BlobResult<T> = Result<T, BlobError>;

/// Errors that can occur when reading staged blobs.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The blob is no longer staged (already revoked).
    #[error("blob not staged: {0}")]
    NotStaged(BlobId),
}
