//! Submitted input files and ordered batches.

/// A single layered-image file submitted for conversion.
///
/// Immutable once submitted: intake owns it until it is handed to the
/// conversion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// The file name as submitted (including extension).
    pub name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Creates a new input file.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// An ordered sequence of input files, created fresh per conversion request.
///
/// The capacity limit is enforced by intake before a batch is handed to the
/// engine; the batch itself only preserves submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    files: Vec<InputFile>,
}

impl Batch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of files in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the batch holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over the files in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &InputFile> {
        self.files.iter()
    }

    /// Consumes the batch, yielding the files in submission order.
    #[must_use]
    pub fn into_files(self) -> Vec<InputFile> {
        self.files
    }
}

impl From<Vec<InputFile>> for Batch {
    fn from(files: Vec<InputFile>) -> Self {
        Self { files }
    }
}

impl IntoIterator for Batch {
    type Item = InputFile;
    type IntoIter = std::vec::IntoIter<InputFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
