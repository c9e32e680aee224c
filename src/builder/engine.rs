//! Builder for constructing step engines.

use crate::core::{StepIndex, TriggerId, TriggerOptions};
use crate::engine::{EngineConfig, StepEngine, MAX_RECONCILE_LOOKAHEAD};

/// Builder for [`StepEngine`] with a fluent API.
///
/// Triggers added here are registered in order when the engine is built,
/// exactly as if the view had registered them on mount.
#[derive(Debug, Default)]
pub struct StepEngineBuilder {
    config: EngineConfig,
    triggers: Vec<(StepIndex, TriggerId, TriggerOptions)>,
}

impl StepEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how far past the current step reconciliation scans, up to
    /// [`MAX_RECONCILE_LOOKAHEAD`].
    pub fn reconcile_lookahead(mut self, lookahead: usize) -> Self {
        self.config.reconcile_lookahead = lookahead.min(MAX_RECONCILE_LOOKAHEAD);
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Pre-register a trigger.
    pub fn trigger(
        mut self,
        step: StepIndex,
        id: impl Into<TriggerId>,
        options: TriggerOptions,
    ) -> Self {
        self.triggers.push((step, id.into(), options));
        self
    }

    pub fn build(self) -> StepEngine {
        let mut engine = StepEngine::with_config(self.config);
        for (step, id, options) in self.triggers {
            engine.register_trigger(step, id, options);
        }
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_matches_new_engine() {
        let engine = StepEngineBuilder::new().build();
        assert_eq!(engine.config(), &EngineConfig::default());
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn config_setters_apply() {
        let engine = StepEngineBuilder::new()
            .reconcile_lookahead(4)
            .record_history(false)
            .build();

        assert_eq!(engine.config().reconcile_lookahead, 4);
        assert!(!engine.config().record_history);
    }

    #[test]
    fn oversized_lookahead_is_capped() {
        let engine = StepEngineBuilder::new()
            .reconcile_lookahead(usize::MAX)
            .build();
        assert_eq!(engine.config().reconcile_lookahead, MAX_RECONCILE_LOOKAHEAD);
        assert!(engine.config().validate().is_ok());
    }

    #[test]
    fn pre_registered_triggers_gate_steps() {
        let mut engine = StepEngineBuilder::new()
            .trigger(1, "load", TriggerOptions::default())
            .trigger(2, "review", TriggerOptions::new().optional())
            .build();

        assert_eq!(engine.all_triggers().count(), 2);
        assert!(!engine.is_step_triggered(1));
        assert!(engine.is_step_triggered(2));

        engine.activate_trigger(1, &"load".into());
        assert!(engine.set_current_step(1));
    }
}
