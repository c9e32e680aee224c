//! Reasons a step transition was refused.

use crate::core::StepIndex;
use crate::readiness::ReadinessViolation;
use thiserror::Error;

/// A refused `set_current_step` call.
///
/// Rejections are ordinary outcomes, not faults: the engine state is left
/// untouched and the view decides what to show.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionRejected {
    #[error("Cannot move backward from step {current} to step {requested}")]
    Backward {
        current: StepIndex,
        requested: StepIndex,
    },

    #[error("Step {requested} is not actionable yet")]
    NotActionable { requested: StepIndex },

    #[error("Step {requested} has {} unsatisfied required trigger(s)", .violations.len())]
    NotTriggered {
        requested: StepIndex,
        violations: Vec<ReadinessViolation>,
    },
}

impl TransitionRejected {
    /// The step that was requested.
    pub fn requested(&self) -> StepIndex {
        match self {
            Self::Backward { requested, .. }
            | Self::NotActionable { requested }
            | Self::NotTriggered { requested, .. } => *requested,
        }
    }
}
