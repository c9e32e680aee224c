//! Builder API for engines and stories.
//!
//! This module provides fluent builders and a macro for creating engines and
//! story definitions with minimal boilerplate.

pub mod engine;
pub mod error;
pub mod macros;
pub mod story;

pub use engine::StepEngineBuilder;
pub use error::BuildError;
pub use story::StoryBuilder;

use crate::engine::StepEngine;
use crate::story::Story;

/// Build an engine whose first business step is gated by a single trigger.
///
/// Most stories open with a "load data" action; this registers that trigger
/// under `trigger_id` for step 1.
///
/// # Example
///
/// ```
/// use waypoint::builder::gated_engine;
///
/// let mut engine = gated_engine("load-data");
/// assert!(!engine.set_current_step(1));
///
/// engine.activate_trigger(1, &"load-data".into());
/// assert!(engine.set_current_step(1));
/// ```
pub fn gated_engine(trigger_id: &str) -> StepEngine {
    StepEngineBuilder::new()
        .trigger(1, trigger_id, Default::default())
        .build()
}

/// Build a story from a title and labels, validating both.
///
/// # Example
///
/// ```
/// use waypoint::builder::simple_story;
///
/// let story = simple_story("User Management Workflow", ["Load users", "Add user"]).unwrap();
/// assert_eq!(story.completion_index(), 2);
/// ```
pub fn simple_story<I, S>(title: &str, steps: I) -> Result<Story, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StoryBuilder::new().title(title).steps(steps).build()
}
