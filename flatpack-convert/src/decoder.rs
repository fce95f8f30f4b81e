//! The layered-image decoding capability.

use crate::raster::RasterImage;
use async_trait::async_trait;
use thiserror::Error;

/// Opaque failure from the decoding capability.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    /// Wraps a decoder-specific failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Decodes a proprietary layered-image file into its flattened raster
/// composite.
///
/// Implementations may be stateful and non-reentrant (`&mut self`); the
/// engine serializes all calls, so an implementation never sees two decodes
/// in flight.
#[async_trait]
pub trait LayeredDecoder: Send {
    /// Decodes one file's bytes into the flattened composite.
    async fn decode(&mut self, bytes: &[u8]) -> Result<RasterImage, DecodeError>;
}
