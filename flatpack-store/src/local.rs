//! Local entitlement storage.

use crate::entitlement::EntitlementState;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Abstract machine-local key-value storage for the entitlement document.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Loads the persisted entitlement state; a missing document yields the
    /// free-tier default.
    async fn load(&self) -> StoreResult<EntitlementState>;

    /// Persists the entitlement state.
    async fn save(&self, state: &EntitlementState) -> StoreResult<()>;
}

/// In-memory local store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    state: Mutex<EntitlementState>,
}

impl MemoryLocalStore {
    /// Creates an empty (free-tier) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given state.
    #[must_use]
    pub fn seeded(state: EntitlementState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

#[async_trait]
impl LocalStore for MemoryLocalStore {
    async fn load(&self) -> StoreResult<EntitlementState> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.clone())
    }

    async fn save(&self, state: &EntitlementState) -> StoreResult<()> {
        let mut slot = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *slot = state.clone();
        Ok(())
    }
}

/// JSON-file local store, the production backend.
///
/// The file is created on first save; parent directories are created as
/// needed. A missing file loads as the free-tier default.
#[derive(Debug, Clone)]
pub struct SettingsFileStore {
    path: PathBuf,
}

impl SettingsFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional per-user settings path
    /// (`<config dir>/flatpack/settings.json`), if a config dir exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flatpack").join("settings.json"))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LocalStore for SettingsFileStore {
    async fn load(&self) -> StoreResult<EntitlementState> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(EntitlementState::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, state: &EntitlementState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(state)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
