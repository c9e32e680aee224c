//! Read-only snapshots of engine state for developer inspection.
//!
//! A snapshot records progress, history and the observable state of every
//! trigger. Validators cannot be serialized, so snapshots carry their result
//! at capture time; engines are never rebuilt from a snapshot.

use crate::core::{StepHistory, StepIndex, StepProgress, TriggerId};
use crate::engine::StepEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Observable state of one trigger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerSnapshot {
    pub step: StepIndex,
    pub id: TriggerId,
    pub required: bool,
    pub active: bool,
    pub has_validator: bool,
    /// Result of `is_satisfied` when the snapshot was taken
    pub satisfied: bool,
}

/// Serializable view of a [`StepEngine`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub progress: StepProgress,

    pub history: StepHistory,

    /// Triggers ordered by step, then id
    pub triggers: Vec<TriggerSnapshot>,
}

impl EngineSnapshot {
    pub fn capture(engine: &StepEngine) -> Self {
        let triggers = engine
            .all_triggers()
            .map(|(step, trigger)| TriggerSnapshot {
                step,
                id: trigger.id.clone(),
                required: trigger.required,
                active: trigger.active,
                has_validator: trigger.validator.is_some(),
                satisfied: trigger.is_satisfied(),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            progress: engine.progress().clone(),
            history: engine.history().clone(),
            triggers,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        Ok(snapshot)
    }

    /// Triggers registered for `step`.
    pub fn triggers_for(&self, step: StepIndex) -> impl Iterator<Item = &TriggerSnapshot> {
        self.triggers.iter().filter(move |t| t.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TriggerOptions;

    fn sample_engine() -> StepEngine {
        let mut engine = StepEngine::new();
        engine.register_trigger(1, "load".into(), TriggerOptions::default());
        engine.register_trigger(1, "form".into(), TriggerOptions::new().validate_with(|| true));
        engine.activate_trigger(1, &"load".into());
        assert!(engine.set_current_step(1));
        engine
    }

    #[test]
    fn capture_reflects_engine_state() {
        let engine = sample_engine();
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.progress.current_step, 1);
        assert_eq!(snapshot.history.path(), vec![0, 1]);
        assert_eq!(snapshot.triggers.len(), 2);

        let form = snapshot
            .triggers_for(1)
            .find(|t| t.id.as_str() == "form")
            .unwrap();
        assert!(form.has_validator);
        assert!(!form.active);
        assert!(form.satisfied);
    }

    #[test]
    fn json_export_reads_back() {
        let snapshot = sample_engine().snapshot();
        let json = snapshot.to_json().unwrap();
        let restored = EngineSnapshot::from_json(&json).unwrap();

        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.progress, snapshot.progress);
        assert_eq!(restored.triggers, snapshot.triggers);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut snapshot = StepEngine::new().snapshot();
        snapshot.version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();

        let result = EngineSnapshot::from_json(&json);
        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = EngineSnapshot::from_json("not json");
        assert!(matches!(result, Err(SnapshotError::Deserialization(_))));
    }
}
