//! The conversion engine: decode, encode, and stage one file at a time.

use crate::decoder::LayeredDecoder;
use crate::error::{ConvertError, ConvertResult};
use flatpack_blob::{BlobRef, BlobStore};
use flatpack_types::{Batch, InputFile};
use tokio::sync::Mutex;
use tracing::{debug, warn};

const SOURCE_EXT: &str = ".psd";
const TARGET_EXT: &str = ".png";

/// Derives the output file name from a source name.
///
/// A trailing `.psd` is replaced with `.png`, matching the extension
/// case-insensitively while leaving the base name's case alone
/// (`LAYOUT.PSD` → `LAYOUT.png`). Names without the recognized extension
/// are used unmodified.
#[must_use]
pub fn output_name(source: &str) -> String {
    let split = source.len().checked_sub(SOURCE_EXT.len());
    if let Some(at) = split
        && source.is_char_boundary(at)
    {
        let (stem, ext) = source.split_at(at);
        if ext.eq_ignore_ascii_case(SOURCE_EXT) {
            return format!("{stem}{TARGET_EXT}");
        }
    }
    source.to_string()
}

/// One converted file, with its output staged as an ephemeral blob.
///
/// Not cloneable: the blob reference inside is single-owner and is released
/// exactly once, by whichever component holds the result last.
#[derive(Debug)]
pub struct ConversionResult {
    /// Name of the source file as submitted.
    pub source_name: String,
    /// Derived output file name.
    pub output_name: String,
    /// Staged PNG bytes.
    pub blob: BlobRef,
}

/// Converts layered-image files to staged PNG outputs.
///
/// The decoder is held behind a mutex because the capability may be
/// stateful; batches are processed strictly sequentially regardless.
pub struct ConversionEngine {
    decoder: Mutex<Box<dyn LayeredDecoder>>,
    blobs: BlobStore,
}

impl ConversionEngine {
    /// Creates an engine over a decoder and the shared blob store.
    pub fn new(decoder: Box<dyn LayeredDecoder>, blobs: BlobStore) -> Self {
        Self {
            decoder: Mutex::new(decoder),
            blobs,
        }
    }

    /// The blob store conversion outputs are staged in.
    #[must_use]
    pub fn blob_store(&self) -> &BlobStore {
        &self.blobs
    }

    /// Converts one file: decode, encode to PNG, stage the bytes.
    ///
    /// # Errors
    ///
    /// Decoder and encoder failures surface as
    /// [`ConvertError::ConversionFailure`] naming the offending file.
    pub async fn convert(&self, file: &InputFile) -> ConvertResult<ConversionResult> {
        let raster = {
            let mut decoder = self.decoder.lock().await;
            decoder.decode(&file.bytes).await
        }
        .map_err(|e| ConvertError::for_file(&file.name, e))?;

        let png = raster
            .to_png()
            .map_err(|e| ConvertError::for_file(&file.name, e))?;

        debug!(file = %file.name, bytes = png.len(), "converted");
        Ok(ConversionResult {
            source_name: file.name.clone(),
            output_name: output_name(&file.name),
            blob: self.blobs.stage(png),
        })
    }

    /// Converts a whole batch in submission order.
    ///
    /// The first failure aborts the remaining files and returns the error;
    /// results staged before the failure are dropped here, which releases
    /// their blobs, so the caller never sees a partial batch.
    pub async fn convert_batch(&self, batch: Batch) -> ConvertResult<Vec<ConversionResult>> {
        let mut results = Vec::with_capacity(batch.len());
        for file in batch {
            match self.convert(&file).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(
                        file = %file.name,
                        completed = results.len(),
                        "batch aborted"
                    );
                    return Err(e);
                }
            }
        }
        Ok(results)
    }
}
