//! Step progression state for one guided session.

use super::StepIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where the user stands in a guided workflow.
///
/// Only the engine mutates progress; collaborators read it through
/// [`StepEngine`](crate::engine::StepEngine) accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    /// Step the user is positioned at
    pub current_step: StepIndex,
    /// Steps entered at least once
    pub completed_steps: BTreeSet<StepIndex>,
    /// Steps the user may navigate to
    pub actionable_steps: BTreeSet<StepIndex>,
}

impl StepProgress {
    /// Progress at the start of a session: positioned at step 0, which is
    /// both completed and actionable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::core::StepProgress;
    ///
    /// let progress = StepProgress::initial();
    /// assert_eq!(progress.current_step, 0);
    /// assert!(progress.completed_steps.contains(&0));
    /// assert!(progress.actionable_steps.contains(&0));
    /// ```
    pub fn initial() -> Self {
        Self {
            current_step: 0,
            completed_steps: BTreeSet::from([0]),
            actionable_steps: BTreeSet::from([0]),
        }
    }

    pub fn is_completed(&self, step: StepIndex) -> bool {
        self.completed_steps.contains(&step)
    }

    pub fn is_actionable(&self, step: StepIndex) -> bool {
        self.actionable_steps.contains(&step)
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::initial()
    }
}
