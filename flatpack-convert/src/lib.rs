//! Batch conversion of layered-image files to flat PNG rasters.
//!
//! The decoder for the proprietary layered format is consumed as an opaque,
//! possibly non-reentrant capability ([`LayeredDecoder`]); the engine
//! serializes calls to it and owns the decode → encode → stage pipeline.
//! Intake caps free-tier batches before they ever reach the engine.
//!
//! Files in one batch are converted strictly in submission order, and the
//! first failure aborts the batch: no partial result set is returned, and
//! any outputs already staged are released on the way out.

pub mod intake;

mod decoder;
mod engine;
mod error;
mod raster;

pub use decoder::{DecodeError, LayeredDecoder};
pub use engine::{output_name, ConversionEngine, ConversionResult};
pub use error::{ConvertError, ConvertResult};
pub use raster::RasterImage;
