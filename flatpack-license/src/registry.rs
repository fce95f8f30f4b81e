//! Device registration against the remote account document.

use crate::error::{LicenseError, LicenseResult};
use chrono::Utc;
use flatpack_store::{DeviceRecord, RemoteStore};
use flatpack_types::DeviceId;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Maximum number of device installations per entitled account.
pub const DEVICE_LIMIT: u32 = 2;

/// Enforces the device quota and records registrations.
pub struct DeviceRegistry {
    remote: Arc<dyn RemoteStore>,
}

impl DeviceRegistry {
    /// Creates a registry over the given remote store.
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self { remote }
    }

    /// Registers a new device for `email`.
    ///
    /// Fetches the account document (absent counts as zero devices), rejects
    /// with [`LicenseError::DeviceLimitExceeded`] when the quota is already
    /// full (without touching the stored record), and otherwise appends a
    /// fresh device id and merge-upserts `is_pro`, the device list, and the
    /// login timestamp. Every successful call consumes one quota slot, so a
    /// failed call must not be retried blindly without checking whether the
    /// upsert committed.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::DeviceLimitExceeded`] at quota, or a store
    /// error from the fetch/upsert.
    pub async fn register_device(&self, email: &str) -> LicenseResult<DeviceId> {
        let record = match self.remote.fetch(email).await? {
            Some(doc) => DeviceRecord::from_document(doc)?,
            None => DeviceRecord::default(),
        };

        if record.devices.len() as u32 >= DEVICE_LIMIT {
            warn!(email, devices = record.devices.len(), "device limit reached");
            return Err(LicenseError::DeviceLimitExceeded(DEVICE_LIMIT));
        }

        let device_id = DeviceId::new();
        let mut devices = record.devices;
        devices.push(device_id);

        let patch = json!({
            "is_pro": true,
            "devices": devices,
            "last_login": Utc::now(),
        });
        self.remote.upsert_merge(email, patch).await?;

        info!(email, %device_id, total = devices.len(), "device registered");
        Ok(device_id)
    }
}
