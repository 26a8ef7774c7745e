//! Domain model for submission intake and assignment.
//!
//! The matching domain models candidate identity, pending submissions, and
//! append-only assignment records while keeping all infrastructure concerns
//! outside of the domain boundary.

mod assignment;
mod candidate;
mod error;
mod ids;
mod submission;

pub use assignment::{ASSIGNMENT_KIND, AssignmentRecord, NewAssignmentData};
pub use candidate::Candidate;
pub use error::{MatchingDomainError, ParseSubmissionStatusError};
pub use ids::{CompanyName, PersonName, PhoneNumber, RegNo, SlotName, SubmissionId};
pub use submission::{Submission, SubmissionStatus};
