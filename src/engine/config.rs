//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reconcile_lookahead {value} exceeds the maximum of {max}")]
    LookaheadOutOfRange { value: usize, max: usize },
}

/// Largest lookahead reconciliation will scan.
pub const MAX_RECONCILE_LOOKAHEAD: usize = 64;

/// Tunables for a [`StepEngine`](super::StepEngine).
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use waypoint::engine::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "reconcile_lookahead": 2 }"#).unwrap();
/// assert_eq!(config.reconcile_lookahead, 2);
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How far past the current step reconciliation looks for newly
    /// triggered steps. The scanned window is `current..=current + lookahead`.
    /// Values above [`MAX_RECONCILE_LOOKAHEAD`] are rejected by
    /// [`from_json`](Self::from_json) and clamped by the engine.
    pub reconcile_lookahead: usize,

    /// Whether step entries are appended to the engine's history.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reconcile_lookahead: 1,
            record_history: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reconcile_lookahead > MAX_RECONCILE_LOOKAHEAD {
            return Err(ConfigError::LookaheadOutOfRange {
                value: self.reconcile_lookahead,
                max: MAX_RECONCILE_LOOKAHEAD,
            });
        }
        Ok(())
    }

    /// Lookahead actually used by reconciliation.
    pub fn effective_lookahead(&self) -> usize {
        self.reconcile_lookahead.min(MAX_RECONCILE_LOOKAHEAD)
    }
}
