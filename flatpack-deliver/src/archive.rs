//! The archive-encoding capability and its zip-backed implementation.

use crate::error::DeliverResult;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Creates archive encoders on demand.
pub trait Archiver: Send + Sync {
    /// Starts a fresh, empty archive.
    fn new_archive(&self) -> Box<dyn ArchiveHandle>;
}

/// One archive under construction.
pub trait ArchiveHandle: Send {
    /// Adds a named entry. Inserting a name that already exists overwrites
    /// that entry's content in place (last write wins).
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> DeliverResult<()>;

    /// Finalizes the archive into one byte blob.
    fn finalize(self: Box<Self>) -> DeliverResult<Vec<u8>>;
}

/// Zip-backed archiver (Deflate compression, encoded in memory).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn new_archive(&self) -> Box<dyn ArchiveHandle> {
        Box::new(ZipArchiveHandle {
            entries: Vec::new(),
        })
    }
}

/// Buffers entries so duplicate names overwrite instead of producing two
/// zip records, then writes everything on finalize.
struct ZipArchiveHandle {
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveHandle for ZipArchiveHandle {
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> DeliverResult<()> {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = bytes.to_vec(),
            None => self.entries.push((name.to_string(), bytes.to_vec())),
        }
        Ok(())
    }

    fn finalize(self: Box<Self>) -> DeliverResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, bytes) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(bytes)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}
