//! Walks through the eligibility screening story the way a page would,
//! logging every engine decision.
//!
//! Run with `RUST_LOG=waypoint=debug` to see trigger and step events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use waypoint::core::TriggerOptions;
use waypoint::story::GuidedSession;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waypoint=debug")),
        )
        .init();

    let mut session = GuidedSession::default();
    session.navigate("/eligibility");

    // Mount: the "Load Applicant Data" button and the eligibility form register.
    let load_button = session.engine_mut().register(1, TriggerOptions::default());
    let transcripts_reviewed = Arc::new(AtomicBool::new(false));
    let reviewed = Arc::clone(&transcripts_reviewed);
    session.engine_mut().register_trigger(
        2,
        "transcripts-reviewed".into(),
        TriggerOptions::new().validate_with(move || reviewed.load(Ordering::SeqCst)),
    );
    let decision = session.engine_mut().register(3, TriggerOptions::default());

    report(&session);

    // Jumping ahead is refused.
    session.engine_mut().set_current_step(2);

    load_button.activate(session.engine_mut());
    session.engine_mut().set_current_step(1);
    report(&session);

    for violation in session.engine().blocking_triggers(2) {
        println!("  still waiting on: {violation}");
    }

    transcripts_reviewed.store(true, Ordering::SeqCst);
    session.engine_mut().reconcile();
    session.engine_mut().set_current_step(2);
    report(&session);

    decision.activate(session.engine_mut());
    session.engine_mut().set_current_step(3);
    report(&session);

    match session.engine().snapshot().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("snapshot failed: {e}"),
    }
}

fn report(session: &GuidedSession) {
    if let Some(progress) = session.progress() {
        println!(
            "{} [{:.0}%]: {}",
            progress,
            progress.percent,
            session.current_label().unwrap_or("-")
        );
    }
}
