//! Core type definitions for Flatpack.
//!
//! This crate defines the fundamental types shared across the conversion
//! pipeline and the licensing path:
//! - Device and blob identifiers (UUID v4)
//! - Submitted input files and ordered batches
//!
//! Capability traits (stores, decoder, archiver) and the components that use
//! them live in their own crates; nothing here performs I/O.

mod file;
mod ids;

pub use file::{Batch, InputFile};
pub use ids::{BlobId, DeviceId};
