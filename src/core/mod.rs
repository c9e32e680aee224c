//! Core value types of the step engine.
//!
//! This module contains the plain data the engine operates on:
//! - Trigger definitions and their validators
//! - Step progress (current, completed and actionable steps)
//! - The history of step entries

mod history;
mod progress;
mod trigger;

pub use history::{StepEntry, StepHistory};
pub use progress::StepProgress;
pub use trigger::{Trigger, TriggerId, TriggerOptions, Validator};

/// Zero-based position of a step in a guided workflow.
pub type StepIndex = usize;
