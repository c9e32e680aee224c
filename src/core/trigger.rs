//! Triggers: named preconditions that gate entry into a step.
//!
//! A trigger is satisfied either by an explicit activation flag or, when a
//! [`Validator`] is attached, by the validator's current return value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier of a trigger, unique among the triggers of one step.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    ///
    /// Used by trigger handles whose owner does not care about naming.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TriggerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TriggerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Zero-argument predicate deciding whether a trigger is satisfied.
///
/// Validators are re-evaluated on every readiness query and never cached, so
/// they must be cheap and free of side effects.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Validator;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let form_valid = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&form_valid);
/// let validator = Validator::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!validator.check());
/// form_valid.store(true, Ordering::SeqCst);
/// assert!(validator.check());
/// ```
#[derive(Clone)]
pub struct Validator {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Validator {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Validator {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Options supplied when registering a trigger.
///
/// Triggers are required by default.
#[derive(Clone, Debug)]
pub struct TriggerOptions {
    pub required: bool,
    pub validator: Option<Validator>,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            required: true,
            validator: None,
        }
    }
}

impl TriggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the trigger as optional; it will not affect step readiness.
    pub fn optional(self) -> Self {
        self.required(false)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a validator that replaces the activation flag as the source of truth.
    pub fn validate_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Validator::new(predicate));
        self
    }
}

/// A registered trigger.
#[derive(Clone, Debug)]
pub struct Trigger {
    pub id: TriggerId,
    pub required: bool,
    pub validator: Option<Validator>,
    pub active: bool,
}

impl Trigger {
    /// Create an inactive trigger from registration options.
    pub fn new(id: TriggerId, options: TriggerOptions) -> Self {
        Self {
            id,
            required: options.required,
            validator: options.validator,
            active: false,
        }
    }

    /// Whether the trigger currently counts as satisfied.
    ///
    /// A validator, when present, wins over the activation flag.
    pub fn is_satisfied(&self) -> bool {
        match &self.validator {
            Some(validator) => validator.check(),
            None => self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn options_default_to_required_without_validator() {
        let options = TriggerOptions::default();
        assert!(options.required);
        assert!(options.validator.is_none());
    }

    #[test]
    fn optional_clears_required() {
        let options = TriggerOptions::new().optional();
        assert!(!options.required);
    }

    #[test]
    fn new_trigger_is_inactive() {
        let trigger = Trigger::new("t1".into(), TriggerOptions::default());
        assert!(!trigger.active);
        assert!(!trigger.is_satisfied());
    }

    #[test]
    fn flag_drives_satisfaction_without_validator() {
        let mut trigger = Trigger::new("t1".into(), TriggerOptions::default());
        trigger.active = true;
        assert!(trigger.is_satisfied());
    }

    #[test]
    fn validator_overrides_flag() {
        let mut trigger =
            Trigger::new("t1".into(), TriggerOptions::new().validate_with(|| false));
        trigger.active = true;
        assert!(!trigger.is_satisfied());

        let trigger = Trigger::new("t2".into(), TriggerOptions::new().validate_with(|| true));
        assert!(trigger.is_satisfied());
    }

    #[test]
    fn validator_is_evaluated_on_every_check() {
        let state = Arc::new(AtomicBool::new(false));
        let observed = Arc::clone(&state);
        let trigger = Trigger::new(
            "form".into(),
            TriggerOptions::new().validate_with(move || observed.load(Ordering::SeqCst)),
        );

        assert!(!trigger.is_satisfied());
        state.store(true, Ordering::SeqCst);
        assert!(trigger.is_satisfied());
        state.store(false, Ordering::SeqCst);
        assert!(!trigger.is_satisfied());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(TriggerId::generate(), TriggerId::generate());
    }

    #[test]
    fn trigger_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TriggerId::from("submit")).unwrap();
        assert_eq!(json, "\"submit\"");
    }
}
