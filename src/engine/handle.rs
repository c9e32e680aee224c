//! Handles that let a UI element drive its own trigger.

use crate::core::{StepIndex, TriggerId};
use crate::engine::StepEngine;

/// A registered trigger, identified by step and id.
///
/// A UI element obtains a handle when it mounts (via
/// [`StepEngine::register`]) and uses it to activate, deactivate and finally
/// unregister its trigger. Handles do not borrow the engine, and calls made
/// through a handle whose trigger is gone are ignored.
///
/// # Example
///
/// ```rust
/// use waypoint::engine::StepEngine;
/// use waypoint::core::TriggerOptions;
///
/// let mut engine = StepEngine::new();
/// let button = engine.register(1, TriggerOptions::default());
///
/// button.activate(&mut engine);
/// assert!(engine.set_current_step(1));
///
/// button.unregister(&mut engine);
/// button.deactivate(&mut engine); // no-op
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TriggerHandle {
    step: StepIndex,
    id: TriggerId,
}

impl TriggerHandle {
    pub fn new(step: StepIndex, id: TriggerId) -> Self {
        Self { step, id }
    }

    pub fn step(&self) -> StepIndex {
        self.step
    }

    pub fn id(&self) -> &TriggerId {
        &self.id
    }

    pub fn activate(&self, engine: &mut StepEngine) {
        engine.activate_trigger(self.step, &self.id);
    }

    pub fn deactivate(&self, engine: &mut StepEngine) {
        engine.deactivate_trigger(self.step, &self.id);
    }

    pub fn unregister(&self, engine: &mut StepEngine) {
        engine.unregister_trigger(self.step, &self.id);
    }

    /// Whether the trigger is registered and its flag is on.
    pub fn is_active(&self, engine: &StepEngine) -> bool {
        engine
            .trigger(self.step, &self.id)
            .is_some_and(|trigger| trigger.active)
    }

    /// Whether the trigger is still registered.
    pub fn is_registered(&self, engine: &StepEngine) -> bool {
        engine.trigger(self.step, &self.id).is_some()
    }
}
