//! Session state and the top-level Flatpack façade.
//!
//! [`SessionState`] is the shared mutable context: the entitlement flag, the
//! verified email, and the currently staged batch. It makes no decisions of
//! its own.
//!
//! [`Workbench`] wires the pipeline together (intake consults the session's
//! entitlement, the engine converts the staged batch, packaging produces the
//! deliverable) and runs the verification flow that flips the entitlement
//! flag. One request is in flight at a time; two batches never interleave
//! against the same session.

mod error;
mod state;
mod workbench;

pub use error::{SessionError, SessionResult};
pub use state::SessionState;
pub use workbench::Workbench;
