//! Turns a batch of conversion results into exactly one deliverable.

use crate::archive::Archiver;
use crate::error::{DeliverError, DeliverResult};
use crate::sink::DownloadSink;
use flatpack_blob::BlobStore;
use flatpack_convert::ConversionResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed name for the combined archive deliverable.
pub const ARCHIVE_NAME: &str = "converted_images.zip";

/// What was handed to the download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// One file, offered directly under its output name.
    Single { name: String },
    /// One combined archive.
    Archive { name: String },
    /// Degraded mode: each file offered independently.
    Individual { names: Vec<String> },
}

/// Packages conversion results and hands them to the download sink.
///
/// Owns every [`ConversionResult`] it is given: staged blobs are released
/// here on all paths, so callers must not retain references into a batch
/// after calling [`PackagingService::deliver`].
pub struct PackagingService {
    archiver: Option<Arc<dyn Archiver>>,
    blobs: BlobStore,
}

impl PackagingService {
    /// Creates a service that archives multi-file batches.
    pub fn new(archiver: Arc<dyn Archiver>, blobs: BlobStore) -> Self {
        Self {
            archiver: Some(archiver),
            blobs,
        }
    }

    /// Creates a service without an archive capability; multi-file batches
    /// are delivered per-file.
    pub fn without_archiver(blobs: BlobStore) -> Self {
        Self {
            archiver: None,
            blobs,
        }
    }

    /// Delivers a result set as one deliverable.
    ///
    /// # Errors
    ///
    /// Returns [`DeliverError::EmptyBatch`] for an empty result set, and
    /// propagates blob, archive, and sink failures. Staged blobs are
    /// released even when an error is returned.
    pub async fn deliver(
        &self,
        mut results: Vec<ConversionResult>,
        sink: &dyn DownloadSink,
    ) -> DeliverResult<Delivery> {
        if results.is_empty() {
            return Err(DeliverError::EmptyBatch);
        }

        if results.len() == 1 {
            let result = results.remove(0);
            return self.deliver_single(result, sink).await;
        }

        match &self.archiver {
            Some(archiver) => self.deliver_archive(results, archiver.as_ref(), sink).await,
            None => {
                warn!(
                    files = results.len(),
                    "archive capability unavailable, delivering files individually"
                );
                self.deliver_each(results, sink).await
            }
        }
    }

    async fn deliver_single(
        &self,
        result: ConversionResult,
        sink: &dyn DownloadSink,
    ) -> DeliverResult<Delivery> {
        let bytes = result.blob.bytes()?;
        sink.offer(&result.output_name, &bytes).await?;
        debug!(file = %result.output_name, "delivered single file");

        let name = result.output_name;
        result.blob.revoke();
        Ok(Delivery::Single { name })
    }

    async fn deliver_archive(
        &self,
        results: Vec<ConversionResult>,
        archiver: &dyn Archiver,
        sink: &dyn DownloadSink,
    ) -> DeliverResult<Delivery> {
        let mut archive = archiver.new_archive();
        for result in &results {
            let bytes = result.blob.bytes()?;
            archive.add_entry(&result.output_name, &bytes)?;
        }
        let archive_bytes = archive.finalize()?;
        debug!(
            files = results.len(),
            bytes = archive_bytes.len(),
            "archive finalized"
        );

        // The archive goes through the same revocable-reference contract
        // as the per-file outputs.
        let archive_blob = self.blobs.stage(archive_bytes);
        let offered = archive_blob.bytes()?;
        sink.offer(ARCHIVE_NAME, &offered).await?;
        archive_blob.revoke();

        for result in results {
            result.blob.revoke();
        }
        Ok(Delivery::Archive {
            name: ARCHIVE_NAME.to_string(),
        })
    }

    async fn deliver_each(
        &self,
        results: Vec<ConversionResult>,
        sink: &dyn DownloadSink,
    ) -> DeliverResult<Delivery> {
        let mut names = Vec::with_capacity(results.len());
        for result in results {
            let bytes = result.blob.bytes()?;
            sink.offer(&result.output_name, &bytes).await?;
            names.push(result.output_name.clone());
            result.blob.revoke();
        }
        Ok(Delivery::Individual { names })
    }
}
