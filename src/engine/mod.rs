//! Step engine: validated, forward-only progression through a guided workflow.
//!
//! # Key Concepts
//!
//! - **Actionable steps**: steps the user may navigate to. A step becomes
//!   actionable once all of its required triggers are satisfied.
//! - **Entering a step completes it**: `set_current_step` both moves the user
//!   and marks the step done, which speculatively opens the next step.
//! - **Reconciliation**: every trigger mutation re-scans the steps up to just
//!   past the current one, so triggers satisfied late still open their step.

mod config;
mod handle;
mod rejection;
mod step_engine;

pub use config::{ConfigError, EngineConfig, MAX_RECONCILE_LOOKAHEAD};
pub use handle::TriggerHandle;
pub use rejection::TransitionRejected;
pub use step_engine::StepEngine;
