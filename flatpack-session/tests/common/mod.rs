//! Shared fixtures for workbench tests.

#![allow(dead_code)]

use async_trait::async_trait;
use flatpack_blob::BlobStore;
use flatpack_convert::{ConversionEngine, DecodeError, LayeredDecoder, RasterImage};
use flatpack_deliver::{DeliverResult, DownloadSink, PackagingService, ZipArchiver};
use flatpack_license::DeviceRegistry;
use flatpack_session::Workbench;
use flatpack_store::{EntitlementState, MemoryLocalStore, MemoryRemoteStore};
use flatpack_types::InputFile;
use std::sync::{Arc, Mutex};

/// Decodes every input to a 1x1 opaque pixel; fails for content `b"bad"`.
pub struct StubDecoder;

#[async_trait]
impl LayeredDecoder for StubDecoder {
    async fn decode(&mut self, bytes: &[u8]) -> Result<RasterImage, DecodeError> {
        if bytes == b"bad" {
            return Err(DecodeError::new("corrupt layer table"));
        }
        RasterImage::from_rgba8(1, 1, vec![10, 20, 30, 255])
            .map_err(|e| DecodeError::new(e.to_string()))
    }
}

/// Records every offered file.
#[derive(Default)]
pub struct RecordingSink {
    offers: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offered_names(&self) -> Vec<String> {
        self.offers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl DownloadSink for RecordingSink {
    async fn offer(&self, name: &str, bytes: &[u8]) -> DeliverResult<()> {
        self.offers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Everything a workbench test needs to reach into.
pub struct Fixture {
    pub workbench: Workbench,
    pub blobs: BlobStore,
    pub local: Arc<MemoryLocalStore>,
    pub remote: Arc<MemoryRemoteStore>,
}

/// Builds a workbench over in-memory stores and the stub decoder.
pub async fn fixture() -> Fixture {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    fixture_with_local(MemoryLocalStore::new()).await
}

/// Same, but with a pre-seeded local store.
pub async fn fixture_entitled(email: &str) -> Fixture {
    fixture_with_local(MemoryLocalStore::seeded(EntitlementState::entitled(email))).await
}

async fn fixture_with_local(local: MemoryLocalStore) -> Fixture {
    let blobs = BlobStore::new();
    let local = Arc::new(local);
    let remote = Arc::new(MemoryRemoteStore::new());

    let engine = ConversionEngine::new(Box::new(StubDecoder), blobs.clone());
    let packaging = PackagingService::new(Arc::new(ZipArchiver), blobs.clone());
    let registry = DeviceRegistry::new(remote.clone());

    let workbench = Workbench::open(engine, packaging, local.clone(), registry)
        .await
        .unwrap();

    Fixture {
        workbench,
        blobs,
        local,
        remote,
    }
}

/// A trivially valid input file.
pub fn psd(name: &str) -> InputFile {
    InputFile::new(name, vec![1, 2, 3])
}

/// An input the stub decoder rejects.
pub fn broken(name: &str) -> InputFile {
    InputFile::new(name, b"bad".to_vec())
}
