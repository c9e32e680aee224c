//! The step engine: ordered, trigger-gated progression through a workflow.

use crate::core::{
    StepEntry, StepHistory, StepIndex, StepProgress, Trigger, TriggerId, TriggerOptions,
};
use crate::engine::config::EngineConfig;
use crate::engine::handle::TriggerHandle;
use crate::engine::rejection::TransitionRejected;
use crate::readiness::{check_step, Readiness, ReadinessViolation};
use crate::snapshot::EngineSnapshot;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

type StepTriggers = BTreeMap<TriggerId, Trigger>;

/// Tracks progress through one guided session.
///
/// The engine exclusively owns the session's progress and trigger map; views
/// hold it (or a reference to it) and drive it through the operations below.
/// No operation panics or fails on bad input: refused transitions return
/// `false`, and mutations that name an unknown trigger are no-ops.
///
/// # Example
///
/// ```rust
/// use waypoint::engine::StepEngine;
/// use waypoint::core::TriggerOptions;
///
/// let mut engine = StepEngine::new();
/// engine.register_trigger(1, "load-data".into(), TriggerOptions::default());
///
/// assert!(!engine.set_current_step(1));
///
/// engine.activate_trigger(1, &"load-data".into());
/// assert!(engine.is_step_actionable(1));
/// assert!(engine.set_current_step(1));
/// assert_eq!(engine.current_step(), 1);
/// ```
#[derive(Debug)]
pub struct StepEngine {
    config: EngineConfig,
    progress: StepProgress,
    triggers: BTreeMap<StepIndex, StepTriggers>,
    history: StepHistory,
}

impl Default for StepEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            progress: StepProgress::initial(),
            triggers: BTreeMap::new(),
            history: StepHistory::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_step(&self) -> StepIndex {
        self.progress.current_step
    }

    pub fn completed_steps(&self) -> &BTreeSet<StepIndex> {
        &self.progress.completed_steps
    }

    pub fn actionable_steps(&self) -> &BTreeSet<StepIndex> {
        &self.progress.actionable_steps
    }

    pub fn progress(&self) -> &StepProgress {
        &self.progress
    }

    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    /// Triggers registered for a step, ordered by id.
    pub fn triggers_for(&self, step: StepIndex) -> impl Iterator<Item = &Trigger> {
        self.triggers
            .get(&step)
            .into_iter()
            .flat_map(|triggers| triggers.values())
    }

    pub fn trigger(&self, step: StepIndex, id: &TriggerId) -> Option<&Trigger> {
        self.triggers.get(&step)?.get(id)
    }

    /// Every registered trigger with its step, ordered by step then id.
    pub fn all_triggers(&self) -> impl Iterator<Item = (StepIndex, &Trigger)> {
        self.triggers
            .iter()
            .flat_map(|(step, triggers)| triggers.values().map(move |t| (*step, t)))
    }

    /// Register a trigger gating `step`.
    ///
    /// The trigger starts inactive. Registering an id that already exists for
    /// the step replaces the previous record.
    pub fn register_trigger(&mut self, step: StepIndex, id: TriggerId, options: TriggerOptions) {
        debug!(
            step,
            trigger = %id,
            required = options.required,
            validated = options.validator.is_some(),
            "Registering trigger"
        );
        let trigger = Trigger::new(id.clone(), options);
        self.triggers.entry(step).or_default().insert(id, trigger);
        self.reconcile();
    }

    /// Register a trigger under a generated id and return a handle to it.
    pub fn register(&mut self, step: StepIndex, options: TriggerOptions) -> TriggerHandle {
        let handle = TriggerHandle::new(step, TriggerId::generate());
        self.register_trigger(step, handle.id().clone(), options);
        handle
    }

    /// Register a trigger and activate it immediately.
    pub fn register_auto_activated(
        &mut self,
        step: StepIndex,
        options: TriggerOptions,
    ) -> TriggerHandle {
        let handle = self.register(step, options);
        handle.activate(self);
        handle
    }

    /// Remove a trigger. Unknown steps or ids are ignored.
    pub fn unregister_trigger(&mut self, step: StepIndex, id: &TriggerId) {
        let Some(triggers) = self.triggers.get_mut(&step) else {
            trace!(step, trigger = %id, "Unregister on unknown step ignored");
            return;
        };

        if triggers.remove(id).is_none() {
            trace!(step, trigger = %id, "Unregister on unknown trigger ignored");
            return;
        }

        if triggers.is_empty() {
            self.triggers.remove(&step);
        }

        debug!(step, trigger = %id, "Unregistered trigger");
        self.reconcile();
    }

    pub fn activate_trigger(&mut self, step: StepIndex, id: &TriggerId) {
        self.set_trigger_active(step, id, true);
    }

    pub fn deactivate_trigger(&mut self, step: StepIndex, id: &TriggerId) {
        self.set_trigger_active(step, id, false);
    }

    fn set_trigger_active(&mut self, step: StepIndex, id: &TriggerId, active: bool) {
        let Some(trigger) = self
            .triggers
            .get_mut(&step)
            .and_then(|triggers| triggers.get_mut(id))
        else {
            trace!(step, trigger = %id, active, "Activation change on unknown trigger ignored");
            return;
        };

        trigger.active = active;
        debug!(step, trigger = %id, active, "Trigger activation changed");
        self.reconcile();
    }

    /// Whether every required trigger of `step` is satisfied.
    ///
    /// A step without triggers is vacuously triggered. Validators are
    /// evaluated on every call.
    pub fn is_step_triggered(&self, step: StepIndex) -> bool {
        self.triggers.get(&step).is_none_or(|triggers| {
            triggers
                .values()
                .filter(|trigger| trigger.required)
                .all(Trigger::is_satisfied)
        })
    }

    /// Readiness of `step`, listing every unsatisfied required trigger.
    pub fn readiness(&self, step: StepIndex) -> Readiness {
        check_step(step, self.triggers_for(step))
    }

    /// Required triggers currently keeping `step` closed.
    pub fn blocking_triggers(&self, step: StepIndex) -> Vec<ReadinessViolation> {
        match self.readiness(step) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Make `step` actionable if it is triggered.
    ///
    /// Returns whether the step is now actionable; state is unchanged when it
    /// is not triggered.
    pub fn mark_step_actionable(&mut self, step: StepIndex) -> bool {
        if !self.is_step_triggered(step) {
            return false;
        }

        if self.progress.actionable_steps.insert(step) {
            debug!(step, "Step became actionable");
        }
        true
    }

    pub fn is_step_actionable(&self, step: StepIndex) -> bool {
        self.progress.is_actionable(step)
    }

    /// Mark `step` completed and try to open the step after it.
    pub fn mark_step_complete(&mut self, step: StepIndex) {
        self.progress.completed_steps.insert(step);
        if let Some(next) = step.checked_add(1) {
            self.mark_step_actionable(next);
        }
    }

    /// Move to `step`, returning whether the move was accepted.
    ///
    /// See [`try_set_current_step`](Self::try_set_current_step) for the rules.
    pub fn set_current_step(&mut self, step: StepIndex) -> bool {
        self.try_set_current_step(step).is_ok()
    }

    /// Move to `step`, explaining a refusal.
    ///
    /// The checks run in order and the first failure aborts with no state
    /// change:
    /// 1. no backward movement,
    /// 2. the step is actionable,
    /// 3. the step is still triggered right now.
    ///
    /// Entering a step also completes it, which in turn tries to open the
    /// next step. Re-entering the current step is allowed.
    pub fn try_set_current_step(&mut self, step: StepIndex) -> Result<StepIndex, TransitionRejected> {
        let current = self.progress.current_step;

        let rejection = if step < current {
            Some(TransitionRejected::Backward {
                current,
                requested: step,
            })
        } else if !self.is_step_actionable(step) {
            Some(TransitionRejected::NotActionable { requested: step })
        } else if let Validation::Failure(errors) = self.readiness(step) {
            Some(TransitionRejected::NotTriggered {
                requested: step,
                violations: errors.iter().cloned().collect(),
            })
        } else {
            None
        };

        if let Some(rejection) = rejection {
            warn!(current, requested = step, "Step transition rejected: {}", rejection);
            return Err(rejection);
        }

        let opened_before = self.progress.actionable_steps.len();
        self.progress.current_step = step;
        self.mark_step_complete(step);
        debug!(from = current, to = step, "Entered step");

        // A refresh that opened nothing is not worth a history entry.
        let changed = step != current || self.progress.actionable_steps.len() != opened_before;
        if self.config.record_history && changed {
            self.history.push(StepEntry {
                from: current,
                to: step,
                timestamp: Utc::now(),
            });
        }

        Ok(step)
    }

    /// Discard all progress, triggers and history.
    pub fn reset_steps(&mut self) {
        debug!(
            current = self.progress.current_step,
            triggers = self.triggers.values().map(BTreeMap::len).sum::<usize>(),
            "Resetting steps"
        );
        self.progress = StepProgress::initial();
        self.triggers.clear();
        self.history = StepHistory::new();
    }

    /// Open any step that has become triggered, from the current step up to
    /// `current + lookahead`, plus gated steps behind the current one.
    ///
    /// Runs after every trigger mutation. Call it directly when state read by
    /// a validator changes outside the engine. Never moves the current step.
    /// The lookahead is capped at
    /// [`MAX_RECONCILE_LOOKAHEAD`](crate::engine::MAX_RECONCILE_LOOKAHEAD), so one pass
    /// touches at most that many ungated steps.
    pub fn reconcile(&mut self) {
        let current = self.progress.current_step;
        let last = current.saturating_add(self.config.effective_lookahead());

        let behind: Vec<StepIndex> = self.triggers.range(..current).map(|(step, _)| *step).collect();
        for step in behind.into_iter().chain(current..=last) {
            if !self.is_step_actionable(step) && self.mark_step_actionable(step) {
                trace!(step, "Reconciliation opened step");
            }
        }
    }

    /// Capture a serializable view of the engine for diagnostics.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(self)
    }
}
