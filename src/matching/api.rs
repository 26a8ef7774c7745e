//! Transport-agnostic response shaping for the exposed operations.
//!
//! The HTTP surface itself (routing, CORS) is an external collaborator; this
//! module fixes the response bodies and status codes it must emit so every
//! transport renders the workflow identically.

use super::services::{AssignError, AssignmentOutcome, SubmitError};
use serde::Serialize;

/// Body returned by the liveness operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthBody {
    /// Liveness indicator.
    pub status: &'static str,
}

/// Returns the liveness response.
#[must_use]
pub const fn health() -> HealthBody {
    HealthBody {
        status: "API running",
    }
}

/// Generic `{message}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    /// Human-readable outcome description.
    pub message: String,
}

/// Body returned by the assignment operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignBody {
    /// Human-readable outcome description.
    pub message: String,
    /// Matched candidate registration number, present on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    /// Matched candidate name, present on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Assigned company, present on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Assigned slot, present on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
}

/// Body for an accepted submission.
#[must_use]
pub fn submission_accepted() -> MessageBody {
    MessageBody {
        message: "Submission successful".to_owned(),
    }
}

/// Body for a rejected submission.
#[must_use]
pub fn submission_rejected(err: &SubmitError) -> MessageBody {
    MessageBody {
        message: err.to_string(),
    }
}

/// Status code for a submission failure: 403 when intake is closed, 400 for
/// client-input errors, 500 for normalised storage faults.
#[must_use]
pub const fn submit_status(err: &SubmitError) -> u16 {
    match err {
        SubmitError::FormClosed => 403,
        SubmitError::Invalid(_)
        | SubmitError::UnknownCandidate(_)
        | SubmitError::DuplicateSubmission { .. } => 400,
        SubmitError::Internal => 500,
    }
}

/// Body for an assignment outcome. Both a committed match and the
/// no-eligible-candidate case are 200 responses.
#[must_use]
pub fn assignment_completed(outcome: &AssignmentOutcome) -> AssignBody {
    match outcome {
        AssignmentOutcome::Assigned(matched) => AssignBody {
            message: "Volunteer assigned".to_owned(),
            reg_no: Some(matched.reg_no().to_string()),
            name: Some(matched.name().to_string()),
            company: Some(matched.company().to_string()),
            slot: Some(matched.slot().to_string()),
        },
        AssignmentOutcome::NoEligibleCandidate => AssignBody {
            message: "No eligible candidates for this company and slot".to_owned(),
            reg_no: None,
            name: None,
            company: None,
            slot: None,
        },
    }
}

/// Body for a failed assignment.
#[must_use]
pub fn assignment_failed(err: &AssignError) -> MessageBody {
    MessageBody {
        message: err.to_string(),
    }
}

/// Status code for an assignment failure. The surface exposes only
/// 200/400/500; transient conflicts map to 500 but stay typed for
/// programmatic retry.
#[must_use]
pub const fn assign_status(err: &AssignError) -> u16 {
    match err {
        AssignError::Invalid(_) => 400,
        AssignError::Conflict | AssignError::Internal => 500,
    }
}
