//! Store port for submission and assignment persistence.
//!
//! The store is the only coordination point between the submission and
//! assignment services: every operation here is a single atomic unit of work
//! against the durable store, committed fully or rolled back fully. Adapters
//! must run each operation at an isolation level (or with row locking)
//! sufficient that concurrent callers never observe partial state.

use crate::matching::domain::{
    AssignmentRecord, Candidate, CompanyName, RegNo, SlotName, Submission,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for matching store operations.
pub type MatchingStoreResult<T> = Result<T, MatchingStoreError>;

/// Durable-store contract for the matching workflow.
#[async_trait]
pub trait MatchingStore: Send + Sync {
    /// Records a pending submission.
    ///
    /// The candidate-existence check, the pending-duplicate check, and the
    /// insert execute against one atomic unit of work. Under concurrent
    /// submissions for the same (candidate, company), at most one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingStoreError::UnknownCandidate`] when the registration
    /// number references no candidate, or
    /// [`MatchingStoreError::DuplicatePending`] when a pending submission for
    /// the same (candidate, company) already exists.
    async fn record_submission(&self, submission: &Submission) -> MatchingStoreResult<()>;

    /// Selects and assigns the most eligible pending candidate for the given
    /// (company, slot).
    ///
    /// Selection orders candidates by workload count ascending, breaking ties
    /// by submission timestamp ascending, and takes the top candidate. When
    /// no pending submission matches, returns `Ok(None)`, which is a normal
    /// outcome rather than a failure. Otherwise, within one atomic unit of
    /// work: appends an
    /// assignment record, flips the matched submission from pending to
    /// assigned (conditioned on it still being pending), and increments the
    /// candidate's workload counter. All three writes commit or none do.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingStoreError::AssignmentConflict`] when the
    /// conditional status flip affects no row (another writer already
    /// assigned the submission); the whole unit of work rolls back and the
    /// caller may retry.
    async fn assign_top_candidate(
        &self,
        company: &CompanyName,
        slot: &SlotName,
        assigned_at: DateTime<Utc>,
    ) -> MatchingStoreResult<Option<AssignmentRecord>>;

    /// Looks up a candidate by registration number.
    ///
    /// Returns `None` when no candidate is registered under the number.
    async fn find_candidate(&self, reg_no: &RegNo) -> MatchingStoreResult<Option<Candidate>>;
}

/// Errors returned by matching store implementations.
#[derive(Debug, Clone, Error)]
pub enum MatchingStoreError {
    /// The registration number references no candidate.
    #[error("unknown candidate: {0}")]
    UnknownCandidate(RegNo),

    /// A pending submission for the (candidate, company) pair already exists.
    #[error("candidate {reg_no} already has a pending submission for {company}")]
    DuplicatePending {
        /// Candidate registration number.
        reg_no: RegNo,
        /// Company the duplicate targets.
        company: CompanyName,
    },

    /// The conditional status flip lost a race to a concurrent writer.
    #[error("assignment lost to a concurrent writer")]
    AssignmentConflict,

    /// Persistence-layer failure; the unit of work was rolled back.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MatchingStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
