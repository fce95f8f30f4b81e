//! The top-level façade driven by a front end or CLI.

use crate::error::SessionResult;
use crate::state::SessionState;
use flatpack_convert::{intake, ConversionEngine};
use flatpack_deliver::{Delivery, DownloadSink, PackagingService};
use flatpack_license::{verify_code, DeviceRegistry, LicenseError};
use flatpack_store::{EntitlementState, LocalStore};
use flatpack_types::{Batch, DeviceId, InputFile};
use std::sync::Arc;
use tracing::info;

/// Wires intake, conversion, packaging, and verification over one session.
pub struct Workbench {
    session: SessionState,
    engine: ConversionEngine,
    packaging: PackagingService,
    local: Arc<dyn LocalStore>,
    registry: DeviceRegistry,
}

impl Workbench {
    /// Opens a workbench, seeding the session's entitlement flag from the
    /// locally persisted state.
    pub async fn open(
        engine: ConversionEngine,
        packaging: PackagingService,
        local: Arc<dyn LocalStore>,
        registry: DeviceRegistry,
    ) -> SessionResult<Self> {
        let persisted = local.load().await?;
        let mut session = SessionState::new();
        session.restore(&persisted);

        Ok(Self {
            session,
            engine,
            packaging,
            local,
            registry,
        })
    }

    /// The current session state.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Stages a submitted file set for conversion, applying the free-tier
    /// cap when the session is not entitled. Returns whether the submission
    /// was truncated.
    pub fn stage_files(&mut self, files: Vec<InputFile>) -> bool {
        let acceptance = intake::accept(files, self.session.is_pro());
        let truncated = acceptance.truncated;
        self.session.set_staged(acceptance.accepted);
        truncated
    }

    /// Converts and delivers the staged batch.
    ///
    /// Nothing staged is a no-op (`Ok(None)`), not an error. The staged
    /// batch is consumed up front, so it is cleared whether the run
    /// succeeds or fails; staged outputs are released on every path.
    pub async fn convert_staged(
        &mut self,
        sink: &dyn DownloadSink,
    ) -> SessionResult<Option<Delivery>> {
        if self.session.staged().is_empty() {
            return Ok(None);
        }
        let batch = self.session.take_staged();
        let delivery = self.run_batch(batch, sink).await?;
        Ok(Some(delivery))
    }

    async fn run_batch(&self, batch: Batch, sink: &dyn DownloadSink) -> SessionResult<Delivery> {
        let results = self.engine.convert_batch(batch).await?;
        let delivery = self.packaging.deliver(results, sink).await?;
        info!(?delivery, "batch delivered");
        Ok(delivery)
    }

    /// Runs the verification flow for a submitted email/code pair.
    ///
    /// Both inputs are trimmed and must be non-empty; a wrong code leaves
    /// the session untouched. On a match the session is marked entitled and
    /// persisted locally *before* the device is registered, matching the
    /// shipped behavior: a [`LicenseError::DeviceLimitExceeded`] from
    /// registration therefore leaves this install entitled while the remote
    /// record is unchanged. Flipping that precedence is an open product
    /// decision; it is deliberately not resolved here.
    pub async fn verify(&mut self, email: &str, code: &str) -> SessionResult<DeviceId> {
        let email = email.trim();
        let code = code.trim();
        if email.is_empty() || code.is_empty() {
            return Err(LicenseError::MissingInput.into());
        }
        if !verify_code(email, code) {
            return Err(LicenseError::CodeMismatch.into());
        }

        self.session.set_entitled(email);
        self.local.save(&EntitlementState::entitled(email)).await?;

        let device_id = self.registry.register_device(email).await?;
        info!(email, %device_id, "entitlement verified");
        Ok(device_id)
    }
}
