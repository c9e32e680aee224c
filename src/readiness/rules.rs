//! Readiness evaluation for a single step using Validation.

use crate::core::{StepIndex, Trigger};
use crate::readiness::violations::{ReadinessViolation, UnsatisfiedBy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a readiness check: success, or every blocking trigger.
pub type Readiness = Validation<(), NonEmptyVec<ReadinessViolation>>;

/// Check one trigger against its step.
///
/// Optional triggers always pass.
pub fn check_trigger(step: StepIndex, trigger: &Trigger) -> Readiness {
    if !trigger.required || trigger.is_satisfied() {
        return Validation::success(());
    }

    let reason = if trigger.validator.is_some() {
        UnsatisfiedBy::FailingValidator
    } else {
        UnsatisfiedBy::InactiveFlag
    };

    Validation::fail(ReadinessViolation::Unsatisfied {
        step,
        trigger: trigger.id.clone(),
        reason,
    })
}

/// Check every trigger registered for a step, accumulating ALL violations.
///
/// A step with no triggers is vacuously ready.
pub fn check_step<'a, I>(step: StepIndex, triggers: I) -> Readiness
where
    I: IntoIterator<Item = &'a Trigger>,
{
    let checks: Vec<Readiness> = triggers
        .into_iter()
        .map(|trigger| check_trigger(step, trigger))
        .collect();

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}
