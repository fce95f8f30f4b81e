//! Error types for the session façade.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by the façade. Each wraps the originating layer; nothing
/// here is fatal to the process.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Verification or device registration failed.
    #[error("license error: {0}")]
    License(#[from] flatpack_license::LicenseError),

    /// A file in the batch failed to convert.
    #[error("conversion error: {0}")]
    Convert(#[from] flatpack_convert::ConvertError),

    /// Packaging or download hand-off failed.
    #[error("delivery error: {0}")]
    Deliver(#[from] flatpack_deliver::DeliverError),

    /// Local persistence failed.
    #[error("store error: {0}")]
    Store(#[from] flatpack_store::StoreError),
}
