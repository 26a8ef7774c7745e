//! `PostgreSQL` matching store built on Diesel with r2d2 pooling.
//!
//! Every port operation runs inside a single database transaction so the
//! read-then-write sequences commit or roll back as one unit. Duplicate
//! prevention is backstopped by the partial unique index
//! `idx_submissions_pending_company_unique`; assignment selection takes
//! row locks on the chosen submission and candidate. All Diesel work is
//! offloaded to a blocking thread pool via [`tokio::task::spawn_blocking`].

use super::models::{CandidateRow, NewAssignmentRow, NewSubmissionRow, PendingMatchRow};
use super::schema::{recruits, submissions, volunteering};
use crate::matching::{
    domain::{
        AssignmentRecord, Candidate, CompanyName, NewAssignmentData, PersonName, PhoneNumber,
        RegNo, SlotName, Submission, SubmissionStatus,
    },
    ports::{MatchingStore, MatchingStoreError, MatchingStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by matching adapters.
pub type MatchingPgPool = Pool<ConnectionManager<PgConnection>>;

/// Name of the partial unique index enforcing at most one pending submission
/// per (candidate, company).
const PENDING_UNIQUE_INDEX: &str = "idx_submissions_pending_company_unique";

/// `PostgreSQL`-backed matching store.
#[derive(Debug, Clone)]
pub struct PostgresMatchingStore {
    pool: MatchingPgPool,
}

impl PostgresMatchingStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MatchingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MatchingStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MatchingStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MatchingStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MatchingStoreError::persistence)?
    }
}

impl From<DieselError> for MatchingStoreError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl MatchingStore for PostgresMatchingStore {
    async fn record_submission(&self, submission: &Submission) -> MatchingStoreResult<()> {
        let reg_no = submission.reg_no().clone();
        let company = submission.company().clone();
        let new_row = NewSubmissionRow::from_domain(submission);

        self.run_blocking(move |connection| {
            connection.transaction::<_, MatchingStoreError, _>(|tx| {
                let candidate_exists: i64 = recruits::table
                    .filter(recruits::reg_no.eq(reg_no.as_str()))
                    .count()
                    .get_result(tx)?;
                if candidate_exists == 0 {
                    return Err(MatchingStoreError::UnknownCandidate(reg_no.clone()));
                }

                // This pre-check improves semantic error reporting but is not
                // relied on for correctness: the partial unique index still
                // enforces integrity in the TOCTOU window between check and
                // insert.
                let pending_duplicate: i64 = submissions::table
                    .filter(submissions::reg_no.eq(reg_no.as_str()))
                    .filter(submissions::company.eq(company.as_str()))
                    .filter(submissions::status.eq(SubmissionStatus::Pending.as_str()))
                    .count()
                    .get_result(tx)?;
                if pending_duplicate > 0 {
                    return Err(MatchingStoreError::DuplicatePending {
                        reg_no: reg_no.clone(),
                        company: company.clone(),
                    });
                }

                diesel::insert_into(submissions::table)
                    .values(&new_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                            if is_pending_unique_violation(info.as_ref()) =>
                        {
                            MatchingStoreError::DuplicatePending {
                                reg_no: reg_no.clone(),
                                company: company.clone(),
                            }
                        }
                        other => MatchingStoreError::persistence(other),
                    })?;

                Ok(())
            })
        })
        .await
    }

    async fn assign_top_candidate(
        &self,
        company: &CompanyName,
        slot: &SlotName,
        assigned_at: DateTime<Utc>,
    ) -> MatchingStoreResult<Option<AssignmentRecord>> {
        let lookup_company = company.clone();
        let lookup_slot = slot.clone();

        self.run_blocking(move |connection| {
            connection.transaction::<_, MatchingStoreError, _>(|tx| {
                let selected =
                    select_top_pending(tx, &lookup_company, &lookup_slot)?;
                let Some(row) = selected else {
                    return Ok(None);
                };

                let record = row_to_assignment(&row, &lookup_company, &lookup_slot, assigned_at)?;

                diesel::insert_into(volunteering::table)
                    .values(&NewAssignmentRow::from_domain(&record))
                    .execute(tx)?;

                // Conditional flip guards against a writer that assigned this
                // submission between our lock acquisition and now; affecting
                // zero rows aborts the whole transaction.
                let flipped = diesel::update(
                    submissions::table
                        .filter(submissions::id.eq(row.submission_id))
                        .filter(submissions::status.eq(SubmissionStatus::Pending.as_str())),
                )
                .set(submissions::status.eq(SubmissionStatus::Assigned.as_str()))
                .execute(tx)?;
                if flipped == 0 {
                    return Err(MatchingStoreError::AssignmentConflict);
                }

                diesel::update(recruits::table.filter(recruits::reg_no.eq(row.reg_no.as_str())))
                    .set(recruits::workload_count.eq(recruits::workload_count + 1))
                    .execute(tx)?;

                Ok(Some(record))
            })
        })
        .await
    }

    async fn find_candidate(&self, reg_no: &RegNo) -> MatchingStoreResult<Option<Candidate>> {
        let lookup_reg_no = reg_no.clone();
        self.run_blocking(move |connection| {
            let row = recruits::table
                .filter(recruits::reg_no.eq(lookup_reg_no.as_str()))
                .select(CandidateRow::as_select())
                .first::<CandidateRow>(connection)
                .optional()?;
            row.map(row_to_candidate).transpose()
        })
        .await
    }
}

/// Locks and returns the most eligible pending submission for the
/// (company, slot): lowest candidate workload first, earliest submission on
/// ties.
fn select_top_pending(
    connection: &mut PgConnection,
    company: &CompanyName,
    slot: &SlotName,
) -> MatchingStoreResult<Option<PendingMatchRow>> {
    let query = diesel::sql_query(concat!(
        "SELECT s.id AS submission_id, r.reg_no, r.name, r.email, r.phone ",
        "FROM submissions s ",
        "JOIN recruits r ON r.reg_no = s.reg_no ",
        "WHERE s.status = 'pending' AND s.company = $1 AND s.slot = $2 ",
        "ORDER BY r.workload_count ASC, s.submitted_at ASC ",
        "LIMIT 1 ",
        "FOR UPDATE OF s, r",
    ))
    .bind::<diesel::sql_types::Text, _>(company.as_str())
    .bind::<diesel::sql_types::Text, _>(slot.as_str());

    query
        .get_result::<PendingMatchRow>(connection)
        .optional()
        .map_err(MatchingStoreError::persistence)
}

fn row_to_assignment(
    row: &PendingMatchRow,
    company: &CompanyName,
    slot: &SlotName,
    assigned_at: DateTime<Utc>,
) -> MatchingStoreResult<AssignmentRecord> {
    let reg_no = RegNo::new(row.reg_no.clone()).map_err(MatchingStoreError::persistence)?;
    let name = PersonName::new(row.name.clone()).map_err(MatchingStoreError::persistence)?;
    let phone = PhoneNumber::new(row.phone.clone()).map_err(MatchingStoreError::persistence)?;

    Ok(AssignmentRecord::new(NewAssignmentData {
        reg_no,
        name,
        email: row.email.clone(),
        phone,
        company: company.clone(),
        slot: slot.clone(),
        assigned_at,
    }))
}

fn row_to_candidate(row: CandidateRow) -> MatchingStoreResult<Candidate> {
    let reg_no = RegNo::new(row.reg_no).map_err(MatchingStoreError::persistence)?;
    let name = PersonName::new(row.name).map_err(MatchingStoreError::persistence)?;
    let phone = PhoneNumber::new(row.phone).map_err(MatchingStoreError::persistence)?;
    let workload_count =
        u32::try_from(row.workload_count).map_err(MatchingStoreError::persistence)?;

    Ok(Candidate::from_persisted(
        reg_no,
        name,
        row.email,
        phone,
        workload_count,
    ))
}

fn is_pending_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == PENDING_UNIQUE_INDEX)
}
