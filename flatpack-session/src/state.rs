//! The shared mutable session context.

use flatpack_types::Batch;

/// Entitlement flag, verified email, and the staged batch for one session.
///
/// A pure holder: intake and the engine read it, the verification flow
/// writes it, and nothing here validates anything. Tests construct a fresh
/// instance per case.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    is_pro: bool,
    email: Option<String>,
    staged: Batch,
}

impl SessionState {
    /// Creates a fresh free-tier session with nothing staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session is entitled.
    #[must_use]
    pub fn is_pro(&self) -> bool {
        self.is_pro
    }

    /// The verified email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Marks the session entitled for the given email.
    pub fn set_entitled(&mut self, email: impl Into<String>) {
        self.is_pro = true;
        self.email = Some(email.into());
    }

    /// The currently staged batch.
    #[must_use]
    pub fn staged(&self) -> &Batch {
        &self.staged
    }

    /// Replaces the staged batch.
    pub fn set_staged(&mut self, batch: Batch) {
        self.staged = batch;
    }

    /// Takes the staged batch, leaving the session with nothing staged.
    #[must_use]
    pub fn take_staged(&mut self) -> Batch {
        std::mem::take(&mut self.staged)
    }

    /// Seeds the entitlement flag from persisted state at startup.
    pub(crate) fn restore(&mut self, persisted: &flatpack_store::EntitlementState) {
        self.is_pro = persisted.is_pro;
        self.email = persisted.user_email.clone();
    }
}
