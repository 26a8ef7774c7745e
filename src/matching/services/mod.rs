//! Application services orchestrating submission intake and assignment.

mod assignment;
mod submission;

pub use assignment::{
    AssignError, AssignRequest, AssignmentOutcome, AssignmentService, MatchedAssignment,
};
pub use submission::{SubmissionReceipt, SubmissionService, SubmitError, SubmitRequest};
