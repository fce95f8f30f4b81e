//! Shared decoder stubs for conversion tests.

#![allow(dead_code)]

use async_trait::async_trait;
use flatpack_convert::{DecodeError, LayeredDecoder, RasterImage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Decodes every input to a 1x1 opaque pixel.
pub struct StubDecoder;

#[async_trait]
impl LayeredDecoder for StubDecoder {
    async fn decode(&mut self, _bytes: &[u8]) -> Result<RasterImage, DecodeError> {
        RasterImage::from_rgba8(1, 1, vec![200, 40, 40, 255])
            .map_err(|e| DecodeError::new(e.to_string()))
    }
}

/// Fails for inputs whose content is `b"bad"`, decodes the rest like
/// [`StubDecoder`]. The call counter is shared so tests can assert how far
/// a batch got before aborting.
pub struct FaultyDecoder {
    calls: Arc<AtomicUsize>,
}

impl FaultyDecoder {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl LayeredDecoder for FaultyDecoder {
    async fn decode(&mut self, bytes: &[u8]) -> Result<RasterImage, DecodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if bytes == b"bad" {
            return Err(DecodeError::new("corrupt layer table"));
        }
        RasterImage::from_rgba8(1, 1, vec![0, 0, 0, 255])
            .map_err(|e| DecodeError::new(e.to_string()))
    }
}
