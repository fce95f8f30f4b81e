//! Batch intake: size-caps a submitted file set before conversion.

use flatpack_types::{Batch, InputFile};
use tracing::debug;

/// Maximum files per batch for a non-entitled session.
pub const FREE_BATCH_LIMIT: usize = 5;

/// Outcome of accepting a submitted file set.
#[derive(Debug)]
pub struct Acceptance {
    /// The files that will be converted, in submission order.
    pub accepted: Batch,
    /// True when the free-tier cap cut the submission down.
    pub truncated: bool,
}

/// Accepts a submitted file set under the session's entitlement.
///
/// Non-entitled submissions keep the first [`FREE_BATCH_LIMIT`] files in
/// submission order; entitled submissions pass through unbounded. An empty
/// submission yields an empty batch; converting nothing is a no-op, not an
/// error.
#[must_use]
pub fn accept(mut files: Vec<InputFile>, entitled: bool) -> Acceptance {
    let truncated = !entitled && files.len() > FREE_BATCH_LIMIT;
    if truncated {
        debug!(
            submitted = files.len(),
            kept = FREE_BATCH_LIMIT,
            "free-tier batch truncated"
        );
        files.truncate(FREE_BATCH_LIMIT);
    }
    Acceptance {
        accepted: Batch::from(files),
        truncated,
    }
}
