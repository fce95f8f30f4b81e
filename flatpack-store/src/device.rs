//! The per-account device document kept in the remote store.

use chrono::{DateTime, Utc};
use flatpack_types::DeviceId;
use serde::{Deserialize, Serialize};

/// Typed view over one account's remote document.
///
/// The wire shape is a JSON object with `is_pro`, `devices`, and
/// `last_login` fields; unknown fields on the stored document are owned by
/// other systems and survive because writes go through
/// [`crate::RemoteStore::upsert_merge`], never a wholesale replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Whether the account is entitled.
    #[serde(default)]
    pub is_pro: bool,
    /// Device installations registered to the account.
    #[serde(default)]
    pub devices: Vec<DeviceId>,
    /// Timestamp of the most recent successful verification.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl DeviceRecord {
    /// Parses the typed view out of a stored JSON document.
    ///
    /// Fields the document lacks fall back to their defaults; an absent
    /// document is equivalent to `DeviceRecord::default()`.
    pub fn from_document(doc: serde_json::Value) -> crate::StoreResult<Self> {
        Ok(serde_json::from_value(doc)?)
    }
}
