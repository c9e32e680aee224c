//! End-to-end walkthroughs of guided workflows.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use waypoint::core::{TriggerId, TriggerOptions};
use waypoint::engine::{StepEngine, TransitionRejected};
use waypoint::readiness::{ReadinessViolation, UnsatisfiedBy};
use waypoint::story::{GuidedSession, COMPLETION_STEP_LABEL};

#[test]
fn fresh_engine_refuses_unopened_step() {
    let mut engine = StepEngine::new();

    assert!(engine.is_step_actionable(0));
    assert!(!engine.is_step_actionable(1));
    assert!(!engine.set_current_step(1));
    assert_eq!(engine.current_step(), 0);
}

#[test]
fn activated_trigger_opens_next_step() {
    let mut engine = StepEngine::new();
    let t1 = TriggerId::from("t1");
    engine.register_trigger(1, t1.clone(), TriggerOptions::default());
    engine.activate_trigger(1, &t1);

    assert!(engine.set_current_step(0));
    assert!(engine.is_step_actionable(1));
    assert!(engine.set_current_step(1));
    assert_eq!(engine.current_step(), 1);
}

#[test]
fn rejected_validator_keeps_step_closed() {
    let mut engine = StepEngine::new();
    engine.register_trigger(2, "t2".into(), TriggerOptions::new().validate_with(|| false));

    assert!(!engine.mark_step_actionable(2));
    assert!(!engine.is_step_actionable(2));
    assert_eq!(
        engine.blocking_triggers(2),
        vec![ReadinessViolation::Unsatisfied {
            step: 2,
            trigger: "t2".into(),
            reason: UnsatisfiedBy::FailingValidator,
        }]
    );
}

#[test]
fn mixed_triggers_require_all_required_ones() {
    let mut engine = StepEngine::new();
    engine.register_trigger(3, "inactive".into(), TriggerOptions::default());
    engine.register_trigger(3, "active".into(), TriggerOptions::default());
    engine.activate_trigger(3, &"active".into());

    assert!(!engine.is_step_triggered(3));
    engine.activate_trigger(3, &"inactive".into());
    assert!(engine.is_step_triggered(3));
}

#[test]
fn distant_step_fails_membership_check_first() {
    let mut engine = StepEngine::new();

    assert_eq!(
        engine.try_set_current_step(5),
        Err(TransitionRejected::NotActionable { requested: 5 })
    );
    assert_eq!(engine.current_step(), 0);
    assert_eq!(engine.actionable_steps().len(), 1);
}

#[test]
fn backward_navigation_is_refused() {
    let mut engine = StepEngine::new();
    engine.mark_step_complete(0);
    assert!(engine.set_current_step(1));
    assert!(engine.set_current_step(2));

    assert!(engine.is_step_actionable(1));
    assert!(!engine.set_current_step(1));
    assert_eq!(engine.current_step(), 2);
}

#[test]
fn late_validation_is_picked_up_by_reconciliation() {
    let form_valid = Arc::new(AtomicBool::new(false));
    let observed = Arc::clone(&form_valid);

    let mut engine = StepEngine::new();
    engine.register_trigger(
        1,
        "form".into(),
        TriggerOptions::new().validate_with(move || observed.load(Ordering::SeqCst)),
    );
    let click = engine.register(1, TriggerOptions::new().optional());

    form_valid.store(true, Ordering::SeqCst);
    assert!(!engine.is_step_actionable(1));

    // Any trigger mutation reconciles, even on an optional trigger.
    click.activate(&mut engine);
    assert!(engine.is_step_actionable(1));
    assert_eq!(engine.current_step(), 0);
}

#[test]
fn eligibility_screening_walkthrough() {
    let mut session = GuidedSession::default();
    session.navigate("/eligibility");
    assert_eq!(session.current_label(), Some("Load applicant data"));

    let load = session
        .engine_mut()
        .register(1, TriggerOptions::default());
    let selected = Arc::new(AtomicBool::new(false));
    let selected_check = Arc::clone(&selected);
    session.engine_mut().register_trigger(
        2,
        "applicant-selected".into(),
        TriggerOptions::new().validate_with(move || selected_check.load(Ordering::SeqCst)),
    );
    let decide = session
        .engine_mut()
        .register(3, TriggerOptions::default());

    // Load applicant data.
    load.activate(session.engine_mut());
    assert!(session.engine_mut().set_current_step(1));
    assert_eq!(session.current_label(), Some("Review transcripts"));

    // Cannot skip ahead before picking an applicant.
    assert!(!session.engine_mut().set_current_step(2));
    selected.store(true, Ordering::SeqCst);
    session.engine_mut().reconcile();
    assert!(session.engine_mut().set_current_step(2));

    // Mark eligibility status to finish.
    decide.activate(session.engine_mut());
    assert!(session.engine_mut().set_current_step(3));

    assert!(session.is_complete());
    assert_eq!(session.current_label(), Some(COMPLETION_STEP_LABEL));
    assert_eq!(session.progress().unwrap().to_string(), "Completed");
    assert_eq!(session.engine().history().path(), vec![0, 1, 2, 3]);

    // Switching workflows discards everything.
    session.navigate("/reviewer-assignment");
    assert_eq!(session.engine().current_step(), 0);
    assert!(!decide.is_registered(session.engine()));
    assert_eq!(session.progress().unwrap().to_string(), "Step 1 of 5");
}

#[test]
fn snapshot_exports_session_state_as_json() {
    let mut engine = StepEngine::new();
    let handle = engine.register_auto_activated(1, TriggerOptions::default());
    assert!(engine.set_current_step(1));

    let json = engine.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["progress"]["current_step"], 1);
    assert_eq!(value["triggers"][0]["id"], handle.id().as_str());
    assert_eq!(value["triggers"][0]["active"], true);
}
