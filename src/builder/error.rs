//! Build errors for story builders.

use thiserror::Error;

/// Errors that can occur when building stories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Story title not specified. Call .title(text) before .build()")]
    MissingTitle,

    #[error("No steps defined. Add at least one step")]
    NoSteps,

    #[error("Step {index} has a blank label")]
    BlankStep { index: usize },
}
