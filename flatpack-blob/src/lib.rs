//! Ephemeral blob storage for staged conversion outputs.
//!
//! Converted bytes are staged in a shared in-memory [`BlobStore`] and handed
//! around as single-owner [`BlobRef`] handles. A handle is revoked exactly
//! once: either explicitly via [`BlobRef::revoke`] at the point of hand-off,
//! or on drop for every other exit path. Revocation frees the staged bytes;
//! there is no persistence and no garbage-collection dependency.

mod error;
mod store;

pub use error::{BlobError, BlobResult};
pub use store::{BlobRef, BlobStore};
