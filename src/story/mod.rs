//! Story definitions: the labelled steps of a guided business process.
//!
//! The engine only knows step indices. A [`Story`] gives those indices
//! human-readable labels and fixes the completion convention: the index one
//! past the last business step is the "completed" step.

use crate::core::StepIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod catalog;
pub mod session;

pub use catalog::{story_for_route, Route};
pub use session::GuidedSession;

/// Label of the implicit final step appended to every story.
pub const COMPLETION_STEP_LABEL: &str = "User Journey Completed";

/// An ordered list of step labels under a title.
///
/// # Example
///
/// ```rust
/// use waypoint::story::{Story, COMPLETION_STEP_LABEL};
///
/// let story = Story::new("Eligibility Screening Process", ["Load applicant data", "Review transcripts"]);
/// assert_eq!(story.completion_index(), 2);
///
/// let guided = story.with_completion_step();
/// assert_eq!(guided.label(2), Some(COMPLETION_STEP_LABEL));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub steps: Vec<String>,
}

impl Story {
    pub fn new<I, S>(title: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the last step is already the completion step.
    pub fn has_completion_step(&self) -> bool {
        self.steps
            .last()
            .is_some_and(|label| label == COMPLETION_STEP_LABEL)
    }

    /// Copy of this story with the completion step appended if missing.
    pub fn with_completion_step(&self) -> Self {
        let mut story = self.clone();
        if !story.has_completion_step() {
            story.steps.push(COMPLETION_STEP_LABEL.to_string());
        }
        story
    }

    /// Number of business steps, excluding any completion step.
    pub fn business_step_count(&self) -> usize {
        if self.has_completion_step() {
            self.steps.len() - 1
        } else {
            self.steps.len()
        }
    }

    /// Step index that means "journey completed".
    pub fn completion_index(&self) -> StepIndex {
        self.business_step_count()
    }

    /// Label of `step`, counting the completion step.
    pub fn label(&self, step: StepIndex) -> Option<&str> {
        if step == self.completion_index() {
            return Some(COMPLETION_STEP_LABEL);
        }
        self.steps
            .get(step)
            .filter(|_| step < self.business_step_count())
            .map(String::as_str)
    }
}

/// How far along a story the user is, for progress displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryProgress {
    pub current_step: StepIndex,
    /// Number of business steps
    pub total: usize,
    pub is_completed: bool,
    /// Share of business steps done, from 0 to 100
    pub percent: f64,
}

impl StoryProgress {
    /// # Example
    ///
    /// ```rust
    /// use waypoint::story::{Story, StoryProgress};
    ///
    /// let story = Story::new("Demo", ["a", "b", "c", "d"]);
    /// let progress = StoryProgress::of(&story, 1);
    /// assert_eq!(progress.percent, 25.0);
    /// assert_eq!(progress.to_string(), "Step 2 of 4");
    /// ```
    pub fn of(story: &Story, current_step: StepIndex) -> Self {
        let total = story.business_step_count();
        let percent = if total == 0 {
            0.0
        } else {
            (current_step as f64 / total as f64 * 100.0).min(100.0)
        };

        Self {
            current_step,
            total,
            is_completed: current_step >= story.completion_index(),
            percent,
        }
    }

    /// Short form used in compact guides, e.g. `2/4`.
    pub fn compact(&self) -> String {
        if self.is_completed {
            "Completed".to_string()
        } else {
            format!("{}/{}", self.current_step + 1, self.total)
        }
    }
}

impl fmt::Display for StoryProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_completed {
            f.write_str("Completed")
        } else {
            write!(f, "Step {} of {}", self.current_step + 1, self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligibility() -> Story {
        Story::new(
            "Eligibility Screening Process",
            [
                "Load applicant data",
                "Review transcripts",
                "Mark eligibility status",
            ],
        )
    }

    #[test]
    fn completion_step_is_appended_once() {
        let guided = eligibility().with_completion_step();
        assert_eq!(guided.steps.len(), 4);
        assert!(guided.has_completion_step());

        let again = guided.with_completion_step();
        assert_eq!(again.steps.len(), 4);
    }

    #[test]
    fn completion_index_ignores_completion_label() {
        assert_eq!(eligibility().completion_index(), 3);
        assert_eq!(eligibility().with_completion_step().completion_index(), 3);
    }

    #[test]
    fn labels_cover_business_and_completion_steps() {
        let story = eligibility();
        assert_eq!(story.label(0), Some("Load applicant data"));
        assert_eq!(story.label(3), Some(COMPLETION_STEP_LABEL));
        assert_eq!(story.label(4), None);
    }

    #[test]
    fn progress_reports_steps_and_percent() {
        let story = eligibility();
        let start = StoryProgress::of(&story, 0);
        assert_eq!(start.percent, 0.0);
        assert!(!start.is_completed);
        assert_eq!(start.to_string(), "Step 1 of 3");
        assert_eq!(start.compact(), "1/3");

        let done = StoryProgress::of(&story, 3);
        assert!(done.is_completed);
        assert_eq!(done.percent, 100.0);
        assert_eq!(done.to_string(), "Completed");
    }

    #[test]
    fn empty_story_is_immediately_complete() {
        let story = Story::new("Empty", Vec::<String>::new());
        let progress = StoryProgress::of(&story, 0);
        assert!(progress.is_completed);
        assert_eq!(progress.percent, 0.0);
    }
}
