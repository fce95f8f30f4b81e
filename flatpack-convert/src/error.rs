//! Error types for the conversion engine.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A raster buffer does not match its declared dimensions.
    #[error(
        "invalid raster buffer: {width}x{height} needs {expected} bytes, got {actual}"
    )]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// PNG encoding failed.
    #[error("raster encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// A file could not be converted; aborts the batch it belongs to.
    #[error("could not convert {file}: {reason}")]
    ConversionFailure { file: String, reason: String },
}

impl ConvertError {
    /// Wraps any conversion-stage error as a per-file failure.
    pub(crate) fn for_file(file: &str, source: impl std::fmt::Display) -> Self {
        Self::ConversionFailure {
            file: file.to_string(),
            reason: source.to_string(),
        }
    }
}
