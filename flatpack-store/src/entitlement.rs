//! The machine-local entitlement document.

use serde::{Deserialize, Serialize};

/// Locally persisted entitlement state.
///
/// Written once on successful verification and read once at startup to seed
/// the session flag. A fresh install deserializes to the free tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementState {
    /// Whether this install is entitled (unlocked).
    #[serde(default)]
    pub is_pro: bool,
    /// The email the entitlement was verified against, if any.
    #[serde(default)]
    pub user_email: Option<String>,
}

impl EntitlementState {
    /// An entitled state for the given email.
    pub fn entitled(email: impl Into<String>) -> Self {
        Self {
            is_pro: true,
            user_email: Some(email.into()),
        }
    }
}
