//! Waypoint: a step and trigger engine for guided business workflows
//!
//! Waypoint tracks a user's progress through a linear, multi-step process
//! (a "story") such as eligibility screening or reviewer assignment. Each
//! step may be gated by triggers: named preconditions that UI elements
//! register, activate and deactivate. The engine only lets the user move
//! forward, and only into steps whose required triggers are satisfied.
//!
//! # Core Concepts
//!
//! - **Steps**: zero-based indices; entering a step completes it
//! - **Triggers**: flags or validator predicates gating a step
//! - **Reconciliation**: late-satisfied triggers still open their step
//! - **Stories**: labelled step lists with an implicit completion step
//!
//! # Example
//!
//! ```rust
//! use waypoint::core::TriggerOptions;
//! use waypoint::engine::StepEngine;
//!
//! let mut engine = StepEngine::new();
//! let load_button = engine.register(1, TriggerOptions::default());
//!
//! // Step 1 stays closed until the button is clicked.
//! assert!(!engine.set_current_step(1));
//!
//! load_button.activate(&mut engine);
//! assert!(engine.set_current_step(1));
//!
//! // No going back.
//! assert!(!engine.set_current_step(0));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod readiness;
pub mod snapshot;
pub mod story;

// Re-export commonly used types
pub use crate::builder::{StepEngineBuilder, StoryBuilder};
pub use crate::core::{StepIndex, Trigger, TriggerId, TriggerOptions, Validator};
pub use crate::engine::{StepEngine, TransitionRejected, TriggerHandle};
pub use crate::story::{GuidedSession, Story, StoryProgress};
