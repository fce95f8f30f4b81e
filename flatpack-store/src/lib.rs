//! Persistence capabilities for Flatpack.
//!
//! Two stores back the licensing path:
//! - [`LocalStore`] keeps the machine-local entitlement flag and email,
//!   the way browser extension storage held `isPro`/`userEmail`.
//! - [`RemoteStore`] keeps one JSON document per account email with the
//!   registered device list. Documents are only ever mutated through
//!   [`RemoteStore::upsert_merge`], which merges top-level fields and
//!   preserves everything the patch does not name, so concurrent writers of
//!   unrelated fields cannot clobber each other.
//!
//! In-memory implementations exist for tests and offline use; the JSON-file
//! [`SettingsFileStore`] is the production local backend, and an HTTP
//! remote backend is available behind the `online` feature.

mod device;
mod entitlement;
mod error;
#[cfg(feature = "online")]
mod http;
mod local;
mod remote;

pub use device::DeviceRecord;
pub use entitlement::EntitlementState;
pub use error::{StoreError, StoreResult};
#[cfg(feature = "online")]
pub use http::{HttpRemoteStore, RemoteStoreConfig};
pub use local::{LocalStore, MemoryLocalStore, SettingsFileStore};
pub use remote::{merge_document, MemoryRemoteStore, RemoteStore};
