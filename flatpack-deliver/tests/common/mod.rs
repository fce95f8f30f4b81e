//! Shared sink stubs for delivery tests.

#![allow(dead_code)]

use async_trait::async_trait;
use flatpack_deliver::{DeliverError, DeliverResult, DownloadSink};
use std::sync::Mutex;

/// Records every offered file for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    offers: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers(&self) -> Vec<(String, Vec<u8>)> {
        self.offers.lock().unwrap_or_else(|e| e.into_inner()).clone()
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

/// Rejects every offer.
pub struct FailingSink;

#[async_trait]
impl DownloadSink for FailingSink {
    async fn offer(&self, _name: &str, _bytes: &[u8]) -> DeliverResult<()> {
        Err(DeliverError::Sink("user cancelled".to_string()))
    }
}
