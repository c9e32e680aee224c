//! Reasons a step is not ready to be entered.

use crate::core::{StepIndex, TriggerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What left a required trigger unsatisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnsatisfiedBy {
    /// The activation flag is off and no validator is attached
    InactiveFlag,

    /// The attached validator returned `false`
    FailingValidator,
}

/// A required trigger that blocks a step
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessViolation {
    #[error("Trigger '{trigger}' for step {step} is not satisfied ({reason:?})")]
    Unsatisfied {
        step: StepIndex,
        trigger: TriggerId,
        reason: UnsatisfiedBy,
    },
}

impl ReadinessViolation {
    pub fn trigger(&self) -> &TriggerId {
        match self {
            Self::Unsatisfied { trigger, .. } => trigger,
        }
    }
}
