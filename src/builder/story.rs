//! Builder for story definitions.

use crate::builder::error::BuildError;
use crate::story::{Story, COMPLETION_STEP_LABEL};

/// Builder for [`Story`] values with validation.
#[derive(Clone, Debug, Default)]
pub struct StoryBuilder {
    title: Option<String>,
    steps: Vec<String>,
}

impl StoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the story title (required).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append one step label.
    pub fn step(mut self, label: impl Into<String>) -> Self {
        self.steps.push(label.into());
        self
    }

    /// Append several step labels.
    pub fn steps<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Build the story.
    ///
    /// A trailing completion step is accepted but does not count as a
    /// business step, so a story needs at least one step before it.
    pub fn build(self) -> Result<Story, BuildError> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(BuildError::MissingTitle)?;

        if let Some(index) = self.steps.iter().position(|label| label.trim().is_empty()) {
            return Err(BuildError::BlankStep { index });
        }

        let story = Story {
            title,
            steps: self.steps,
        };

        if story.business_step_count() == 0 {
            return Err(BuildError::NoSteps);
        }

        Ok(story)
    }
}
