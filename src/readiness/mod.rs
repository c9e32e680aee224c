//! Readiness checks explaining why a step can or cannot be entered.
//!
//! The engine's boolean `is_step_triggered` answers "may the user go there?".
//! This module answers "what is still missing?" by using Stillwater's
//! `Validation` type to collect every unsatisfied required trigger in one pass
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use waypoint::engine::StepEngine;
//! use waypoint::core::TriggerOptions;
//!
//! let mut engine = StepEngine::new();
//! engine.register_trigger(1, "load".into(), TriggerOptions::default());
//! engine.register_trigger(1, "review".into(), TriggerOptions::default());
//!
//! let blocking = engine.blocking_triggers(1);
//! assert_eq!(blocking.len(), 2);
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_step, check_trigger, Readiness};
pub use violations::{ReadinessViolation, UnsatisfiedBy};
