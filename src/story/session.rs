//! Route-scoped guided sessions.

use super::{story_for_route, Story, StoryProgress};
use crate::engine::StepEngine;
use tracing::{debug, info};

/// One engine plus the page and story it is guiding.
///
/// Navigating to a different route resets the engine so that no progress or
/// trigger state leaks from one workflow into the next.
///
/// # Example
///
/// ```rust
/// use waypoint::story::GuidedSession;
///
/// let mut session = GuidedSession::default();
/// session.navigate("/eligibility");
/// assert_eq!(session.current_label(), Some("Load applicant data"));
///
/// session.engine_mut().mark_step_complete(0);
/// assert!(session.engine_mut().set_current_step(1));
/// assert_eq!(session.progress().unwrap().to_string(), "Step 2 of 3");
/// ```
#[derive(Debug, Default)]
pub struct GuidedSession {
    engine: StepEngine,
    route: Option<String>,
    story: Option<Story>,
}

impl GuidedSession {
    pub fn new(engine: StepEngine) -> Self {
        Self {
            engine,
            route: None,
            story: None,
        }
    }

    /// Move to `path`, looking up its story in the built-in catalog.
    ///
    /// Returns whether the route changed (and the engine was reset).
    pub fn navigate(&mut self, path: &str) -> bool {
        let story = story_for_route(path);
        self.enter(path, story)
    }

    /// Move to `path` with an explicitly supplied story.
    pub fn navigate_with_story(&mut self, path: &str, story: Story) -> bool {
        self.enter(path, Some(story))
    }

    fn enter(&mut self, path: &str, story: Option<Story>) -> bool {
        if self.route.as_deref() == Some(path) {
            debug!(path, "Route unchanged, keeping progress");
            return false;
        }

        self.engine.reset_steps();
        info!(
            path,
            story = story.as_ref().map(|s| s.title.as_str()),
            "Entered guided route"
        );
        self.route = Some(path.to_string());
        self.story = story;
        true
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StepEngine {
        &mut self.engine
    }

    /// Progress through the active story, if the route has one.
    pub fn progress(&self) -> Option<StoryProgress> {
        self.story
            .as_ref()
            .map(|story| StoryProgress::of(story, self.engine.current_step()))
    }

    /// Label of the step the user is on.
    pub fn current_label(&self) -> Option<&str> {
        self.story.as_ref()?.label(self.engine.current_step())
    }

    /// Whether the user has reached the story's completion step.
    pub fn is_complete(&self) -> bool {
        self.story
            .as_ref()
            .is_some_and(|story| self.engine.current_step() >= story.completion_index())
    }
}
