//! Error types for the licensing module.

use thiserror::Error;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Email or verification code missing from the request.
    #[error("email and verification code are both required")]
    MissingInput,

    /// Submitted code does not match the derived code.
    #[error("verification code does not match")]
    CodeMismatch,

    /// Device limit exceeded.
    #[error("device limit exceeded (max {0} devices)")]
    DeviceLimitExceeded(u32),

    /// Store error while reading or writing account state.
    #[error("store error: {0}")]
    Store(#[from] flatpack_store::StoreError),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
