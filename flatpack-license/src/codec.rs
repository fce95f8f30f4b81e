//! Verification-code derivation and checking.
//!
//! A code is a pure function of the account email and a fixed salt:
//! SHA-256 over the UTF-8 bytes of `email + SALT`, rendered as lowercase
//! hex, truncated to the first eight characters, uppercased. The same email
//! always yields the same code, across calls and across installs.

use sha2::{Digest, Sha256};

/// Length of a verification code in characters.
pub const CODE_LEN: usize = 8;

/// Fixed shared salt. Ships with the client; the resulting 32-bit code
/// space is documented as a novelty gate, not access control.
const SALT: &str = "wiber_secret_salt_2024";

/// Derives the verification code for an email.
#[must_use]
pub fn derive_code(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(SALT.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..CODE_LEN].to_uppercase()
}

/// Checks a submitted code against the derived code for `email`.
///
/// The comparison is exact: derived codes are canonically uppercase, so a
/// lowercase submission does not verify.
#[must_use]
pub fn verify_code(email: &str, submitted: &str) -> bool {
    submitted == derive_code(email)
}
