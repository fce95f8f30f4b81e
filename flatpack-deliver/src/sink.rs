//! The download hand-off capability.

use crate::error::DeliverResult;
use async_trait::async_trait;

/// Offers finished byte content to the user for download.
///
/// Implemented by whatever front end drives the pipeline; the packaging
/// service only guarantees that staged blobs are released after the offer
/// returns.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Offers one named file's bytes for download.
    async fn offer(&self, name: &str, bytes: &[u8]) -> DeliverResult<()>;
}
