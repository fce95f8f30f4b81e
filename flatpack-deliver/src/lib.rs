//! Packaging and delivery of converted outputs.
//!
//! A batch of conversion results becomes exactly one deliverable: the single
//! result's file directly, or a zip archive of all of them. The archive
//! encoder is an optional capability: when the service is built without
//! one, multi-file batches degrade to per-file delivery instead of failing.
//!
//! Every staged blob that enters this crate is released exactly once, on
//! success and on every failure path: hand-off consumes the references, and
//! anything still held when an error unwinds is released on drop.

mod archive;
mod error;
mod service;
mod sink;

pub use archive::{ArchiveHandle, Archiver, ZipArchiver};
pub use error::{DeliverError, DeliverResult};
pub use service::{Delivery, PackagingService, ARCHIVE_NAME};
pub use sink::DownloadSink;
