//! In-memory store reproducing the matching port contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::matching::{
    domain::{
        AssignmentRecord, Candidate, CompanyName, NewAssignmentData, RegNo, SlotName, Submission,
    },
    ports::{MatchingStore, MatchingStoreError, MatchingStoreResult},
};

/// Thread-safe in-memory matching store.
///
/// Each port operation runs under a single writer lock, so the atomicity and
/// mutual-exclusion guarantees the port demands hold trivially: concurrent
/// duplicate submissions serialise, and concurrent assignments for the same
/// (company, slot) each observe the other's committed state.
#[derive(Debug, Default)]
pub struct InMemoryMatchingStore {
    state: Arc<RwLock<InMemoryMatchingState>>,
    fail_next_assignment: AtomicBool,
}

#[derive(Debug, Default)]
struct InMemoryMatchingState {
    candidates: HashMap<RegNo, Candidate>,
    submissions: Vec<Submission>,
    assignments: Vec<AssignmentRecord>,
}

impl InMemoryMatchingStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a candidate, standing in for the out-of-scope registration
    /// process.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn insert_candidate(&self, candidate: Candidate) -> MatchingStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.candidates.insert(candidate.reg_no().clone(), candidate);
        Ok(())
    }

    /// Returns all submissions recorded for a candidate.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn submissions_for(&self, reg_no: &RegNo) -> MatchingStoreResult<Vec<Submission>> {
        let state = read_state(&self.state)?;
        Ok(state
            .submissions
            .iter()
            .filter(|submission| submission.reg_no() == reg_no)
            .cloned()
            .collect())
    }

    /// Returns all committed assignment records.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn assignments(&self) -> MatchingStoreResult<Vec<AssignmentRecord>> {
        let state = read_state(&self.state)?;
        Ok(state.assignments.clone())
    }

    /// Makes the next `assign_top_candidate` call fail after selection but
    /// before any write, simulating a storage fault mid-unit-of-work.
    pub fn fail_next_assignment(&self) {
        self.fail_next_assignment.store(true, Ordering::SeqCst);
    }
}

fn read_state(
    state: &Arc<RwLock<InMemoryMatchingState>>,
) -> MatchingStoreResult<std::sync::RwLockReadGuard<'_, InMemoryMatchingState>> {
    state
        .read()
        .map_err(|err| MatchingStoreError::persistence(std::io::Error::other(err.to_string())))
}

fn write_state(
    state: &Arc<RwLock<InMemoryMatchingState>>,
) -> MatchingStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryMatchingState>> {
    state
        .write()
        .map_err(|err| MatchingStoreError::persistence(std::io::Error::other(err.to_string())))
}

/// Index of the most eligible pending submission for (company, slot):
/// lowest candidate workload first, earliest submission timestamp on ties.
fn select_top_pending(
    state: &InMemoryMatchingState,
    company: &CompanyName,
    slot: &SlotName,
) -> Option<usize> {
    state
        .submissions
        .iter()
        .enumerate()
        .filter(|(_, submission)| {
            submission.is_pending()
                && submission.company() == company
                && submission.slot() == slot
        })
        .filter_map(|(index, submission)| {
            state
                .candidates
                .get(submission.reg_no())
                .map(|candidate| (index, candidate.workload_count(), submission.submitted_at()))
        })
        .min_by_key(|&(_, workload, submitted_at)| (workload, submitted_at))
        .map(|(index, _, _)| index)
}

#[async_trait]
impl MatchingStore for InMemoryMatchingStore {
    async fn record_submission(&self, submission: &Submission) -> MatchingStoreResult<()> {
        let mut state = write_state(&self.state)?;

        if !state.candidates.contains_key(submission.reg_no()) {
            return Err(MatchingStoreError::UnknownCandidate(
                submission.reg_no().clone(),
            ));
        }

        let duplicate = state.submissions.iter().any(|existing| {
            existing.is_pending()
                && existing.reg_no() == submission.reg_no()
                && existing.company() == submission.company()
        });
        if duplicate {
            return Err(MatchingStoreError::DuplicatePending {
                reg_no: submission.reg_no().clone(),
                company: submission.company().clone(),
            });
        }

        state.submissions.push(submission.clone());
        Ok(())
    }

    async fn assign_top_candidate(
        &self,
        company: &CompanyName,
        slot: &SlotName,
        assigned_at: DateTime<Utc>,
    ) -> MatchingStoreResult<Option<AssignmentRecord>> {
        let mut state = write_state(&self.state)?;

        let Some(index) = select_top_pending(&state, company, slot) else {
            return Ok(None);
        };

        if self.fail_next_assignment.swap(false, Ordering::SeqCst) {
            return Err(MatchingStoreError::persistence(std::io::Error::other(
                "injected assignment fault",
            )));
        }

        let record = {
            let submission = state
                .submissions
                .get(index)
                .ok_or(MatchingStoreError::AssignmentConflict)?;
            let candidate = state
                .candidates
                .get(submission.reg_no())
                .ok_or_else(|| MatchingStoreError::UnknownCandidate(submission.reg_no().clone()))?;
            AssignmentRecord::new(NewAssignmentData {
                reg_no: candidate.reg_no().clone(),
                name: candidate.name().clone(),
                email: candidate.email().to_owned(),
                phone: candidate.phone().clone(),
                company: company.clone(),
                slot: slot.clone(),
                assigned_at,
            })
        };

        // Conditional status flip: selection holds the writer lock, so a lost
        // race here means internal inconsistency rather than concurrency.
        let flipped = state
            .submissions
            .get_mut(index)
            .is_some_and(Submission::mark_assigned);
        if !flipped {
            return Err(MatchingStoreError::AssignmentConflict);
        }

        if let Some(candidate) = state.candidates.get_mut(record.reg_no()) {
            candidate.record_assignment();
        }
        state.assignments.push(record.clone());
        Ok(Some(record))
    }

    async fn find_candidate(&self, reg_no: &RegNo) -> MatchingStoreResult<Option<Candidate>> {
        let state = read_state(&self.state)?;
        Ok(state.candidates.get(reg_no).cloned())
    }
}
