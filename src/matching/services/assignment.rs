//! Service layer for operator-triggered assignment.

use crate::matching::{
    domain::{AssignmentRecord, CompanyName, MatchingDomainError, PersonName, RegNo, SlotName},
    ports::{MatchingStore, MatchingStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Request payload for assigning a volunteer to a (company, slot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignRequest {
    company: String,
    slot: String,
}

impl AssignRequest {
    /// Creates an assignment request.
    #[must_use]
    pub fn new(company: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            slot: slot.into(),
        }
    }
}

/// Details of a committed match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAssignment {
    reg_no: RegNo,
    name: PersonName,
    company: CompanyName,
    slot: SlotName,
}

impl MatchedAssignment {
    /// Returns the matched candidate registration number.
    #[must_use]
    pub const fn reg_no(&self) -> &RegNo {
        &self.reg_no
    }

    /// Returns the matched candidate name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the assigned company.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the assigned slot.
    #[must_use]
    pub const fn slot(&self) -> &SlotName {
        &self.slot
    }
}

/// Outcome of an assignment attempt.
///
/// Finding no eligible candidate is a normal outcome, not an error
/// condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// A candidate was matched and the assignment committed.
    Assigned(MatchedAssignment),
    /// No pending submission matched the (company, slot).
    NoEligibleCandidate,
}

/// Errors surfaced by the assignment operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignError {
    /// A caller-supplied field failed validation.
    #[error(transparent)]
    Invalid(#[from] MatchingDomainError),

    /// The selected submission was assigned by a concurrent writer; nothing
    /// was committed. Retrying re-runs selection and picks the next-best
    /// candidate.
    #[error("assignment lost a concurrent race, retry")]
    Conflict,

    /// Unexpected storage fault; the unit of work was rolled back and no
    /// partial state is observable.
    #[error("assignment could not be completed")]
    Internal,
}

/// Assignment orchestration service.
///
/// Selection fairness (least-loaded candidate first, first-come-first-served
/// on ties) and the atomic three-write commit are delegated to the store
/// port; this service shapes outcomes and normalises faults.
#[derive(Clone)]
pub struct AssignmentService<S, C>
where
    S: MatchingStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> AssignmentService<S, C>
where
    S: MatchingStore,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Matches the most eligible pending candidate for the (company, slot)
    /// and commits the assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::Invalid`] for empty fields,
    /// [`AssignError::Conflict`] when the commit lost a race to a concurrent
    /// writer (safe to retry), and [`AssignError::Internal`] for unexpected
    /// storage faults. Either way nothing was committed.
    pub async fn assign(&self, request: AssignRequest) -> Result<AssignmentOutcome, AssignError> {
        let company = CompanyName::new(request.company)?;
        let slot = SlotName::new(request.slot)?;

        let assigned = self
            .store
            .assign_top_candidate(&company, &slot, self.clock.utc())
            .await
            .map_err(classify_store_error)?;

        Ok(match assigned {
            Some(record) => {
                info!(
                    reg_no = %record.reg_no(),
                    company = %company,
                    slot = %slot,
                    "volunteer assigned"
                );
                AssignmentOutcome::Assigned(to_matched(record))
            }
            None => AssignmentOutcome::NoEligibleCandidate,
        })
    }
}

fn to_matched(record: AssignmentRecord) -> MatchedAssignment {
    MatchedAssignment {
        reg_no: record.reg_no().clone(),
        name: record.name().clone(),
        company: record.company().clone(),
        slot: record.slot().clone(),
    }
}

fn classify_store_error(err: MatchingStoreError) -> AssignError {
    match err {
        MatchingStoreError::AssignmentConflict => AssignError::Conflict,
        other => {
            error!(error = %other, "assignment aborted by storage fault");
            AssignError::Internal
        }
    }
}
