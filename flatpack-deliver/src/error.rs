//! Error types for packaging and delivery.

use thiserror::Error;

/// Result type for delivery operations.
pub type DeliverResult<T> = Result<T, DeliverError>;

/// Errors that can occur while packaging or handing off outputs.
#[derive(Debug, Error)]
pub enum DeliverError {
    /// No results to deliver.
    #[error("nothing to deliver")]
    EmptyBatch,

    /// I/O error while writing archive content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP encoding error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A staged blob could not be read back.
    #[error("blob error: {0}")]
    Blob(#[from] flatpack_blob::BlobError),

    /// The download hand-off failed.
    #[error("download hand-off failed: {0}")]
    Sink(String),
}
