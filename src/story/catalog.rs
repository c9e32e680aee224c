//! Built-in stories of the grant-review prototype and the routes that host them.

use super::Story;
use serde::{Deserialize, Serialize};

/// Pages that carry a guided story.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Eligibility,
    ReviewerAssignment,
    MultiActorWorkflow,
    Users,
    ChangeRequest,
    ChangeApproval,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Eligibility,
        Route::ReviewerAssignment,
        Route::MultiActorWorkflow,
        Route::Users,
        Route::ChangeRequest,
        Route::ChangeApproval,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Eligibility => "/eligibility",
            Self::ReviewerAssignment => "/reviewer-assignment",
            Self::MultiActorWorkflow => "/multi-actor-workflow",
            Self::Users => "/users",
            Self::ChangeRequest => "/change-request",
            Self::ChangeApproval => "/change-approval",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn story(&self) -> Story {
        match self {
            Self::Eligibility => eligibility(),
            Self::ReviewerAssignment => reviewer_assignment(),
            Self::MultiActorWorkflow => multi_actor_approval(),
            Self::Users => user_management(),
            Self::ChangeRequest => change_request(),
            Self::ChangeApproval => change_approval(),
        }
    }
}

/// Story shown on the page at `path`, if that page has one.
pub fn story_for_route(path: &str) -> Option<Story> {
    Route::from_path(path).map(|route| route.story())
}

pub fn eligibility() -> Story {
    crate::story!("Eligibility Screening Process" => [
        "Load applicant data",
        "Review transcripts",
        "Mark eligibility status",
    ])
}

pub fn reviewer_assignment() -> Story {
    crate::story!("Reviewer Assignment Process" => [
        "Load application and reviewer data",
        "Filter applications by field of study",
        "Select an applicant from the filtered list",
        "Choose a reviewer with matching expertise",
        "Confirm assignment and send notification",
    ])
}

pub fn multi_actor_approval() -> Story {
    crate::story!("Multi-Actor Approval Workflow" => [
        "Login as an applicant",
        "Initiate a change request",
        "Logout and login as a program officer",
        "Review and approve the change request",
        "Verify changes are reflected across the system",
    ])
}

pub fn user_management() -> Story {
    crate::story!("User Management Workflow" => [
        "Load and review user data from the system",
        "Add a new user with appropriate role",
        "Edit existing user information as needed",
        "Delete users that are no longer required",
    ])
}

pub fn change_request() -> Story {
    crate::story!("Change Request Workflow" => [
        "Fill out change request form",
        "Submit change request for approval",
        "View approval status",
        "Implement approved changes",
    ])
}

pub fn change_approval() -> Story {
    crate::story!("Change Approval Workflow" => [
        "Review incoming change requests",
        "Evaluate request details and impact",
        "Make approval decision with feedback",
    ])
}
