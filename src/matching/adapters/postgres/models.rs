//! Diesel row models for matching persistence.

use super::schema::{recruits, submissions, volunteering};
use crate::matching::domain::{AssignmentRecord, Submission};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for candidate records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recruits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CandidateRow {
    /// Candidate registration number.
    pub reg_no: String,
    /// Candidate display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Count of committed assignments.
    pub workload_count: i32,
}

/// Insert model for submission records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = submissions)]
pub struct NewSubmissionRow {
    /// Submission identifier.
    pub id: uuid::Uuid,
    /// Candidate registration number.
    pub reg_no: String,
    /// Candidate name denormalised at submission time.
    pub name: String,
    /// Phone number denormalised at submission time.
    pub phone: String,
    /// Target company.
    pub company: String,
    /// Target slot.
    pub slot: String,
    /// Lifecycle status.
    pub status: String,
    /// Acceptance timestamp.
    pub submitted_at: DateTime<Utc>,
}

impl NewSubmissionRow {
    /// Builds an insert row from a domain submission.
    #[must_use]
    pub fn from_domain(submission: &Submission) -> Self {
        Self {
            id: submission.id().into_inner(),
            reg_no: submission.reg_no().as_str().to_owned(),
            name: submission.name().as_str().to_owned(),
            phone: submission.phone().as_str().to_owned(),
            company: submission.company().as_str().to_owned(),
            slot: submission.slot().as_str().to_owned(),
            status: submission.status().as_str().to_owned(),
            submitted_at: submission.submitted_at(),
        }
    }
}

/// Insert model for assignment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = volunteering)]
pub struct NewAssignmentRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Matched candidate registration number.
    pub reg_no: String,
    /// Matched candidate name.
    pub name: String,
    /// Matched candidate email.
    pub email: String,
    /// Matched candidate phone number.
    pub phone: String,
    /// Assigned company.
    pub company: String,
    /// Assigned slot.
    pub slot: String,
    /// Fixed record type tag.
    pub kind: String,
    /// Assignment commit timestamp.
    pub assigned_at: DateTime<Utc>,
}

impl NewAssignmentRow {
    /// Builds an insert row from a domain assignment record.
    #[must_use]
    pub fn from_domain(record: &AssignmentRecord) -> Self {
        Self {
            id: record.id(),
            reg_no: record.reg_no().as_str().to_owned(),
            name: record.name().as_str().to_owned(),
            email: record.email().to_owned(),
            phone: record.phone().as_str().to_owned(),
            company: record.company().as_str().to_owned(),
            slot: record.slot().as_str().to_owned(),
            kind: record.kind().to_owned(),
            assigned_at: record.assigned_at(),
        }
    }
}

/// Raw-SQL result row for the pending-candidate selection query.
#[derive(Debug, Clone, QueryableByName)]
pub struct PendingMatchRow {
    /// Identifier of the selected submission.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub submission_id: uuid::Uuid,
    /// Selected candidate registration number.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub reg_no: String,
    /// Selected candidate name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Selected candidate email.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
    /// Selected candidate phone number.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub phone: String,
}
