//! Offline license verification and device registration for Flatpack.
//!
//! This crate handles:
//! - Deterministic verification-code derivation from an account email
//! - Code checking for the unlock flow
//! - Per-account device registration with a hard device cap
//!
//! # Design Principles
//!
//! - **Offline verification**: codes are derived and checked locally; the
//!   remote store is only touched to record a device registration
//! - **Novelty gate, not access control**: the 8-hex-character code space is
//!   32 bits and the salt ships with the client. That is deliberate; the
//!   code exists to gate casual use, and no server-side or cryptographic
//!   protection is claimed
//! - **Merge-only remote writes**: the account document is always updated
//!   through a field merge so fields owned by other systems survive

mod codec;
mod error;
mod registry;

pub use codec::{derive_code, verify_code, CODE_LEN};
pub use error::{LicenseError, LicenseResult};
pub use registry::{DeviceRegistry, DEVICE_LIMIT};
