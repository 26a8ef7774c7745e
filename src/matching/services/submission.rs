//! Service layer for submission intake.

use crate::config::IntakeWindow;
use crate::matching::{
    domain::{
        CompanyName, MatchingDomainError, PersonName, PhoneNumber, RegNo, SlotName, Submission,
    },
    ports::{MatchingStore, MatchingStoreError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for recording a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    reg_no: String,
    name: String,
    phone: String,
    company: String,
    slot: String,
}

impl SubmitRequest {
    /// Creates a submission request.
    #[must_use]
    pub fn new(
        reg_no: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
        slot: impl Into<String>,
    ) -> Self {
        Self {
            reg_no: reg_no.into(),
            name: name.into(),
            phone: phone.into(),
            company: company.into(),
            slot: slot.into(),
        }
    }
}

/// Confirmation returned after a submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    reg_no: RegNo,
    company: CompanyName,
    slot: SlotName,
    submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Returns the candidate registration number.
    #[must_use]
    pub const fn reg_no(&self) -> &RegNo {
        &self.reg_no
    }

    /// Returns the company submitted for.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the slot submitted for.
    #[must_use]
    pub const fn slot(&self) -> &SlotName {
        &self.slot
    }

    /// Returns the acceptance timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Errors surfaced by the submission operation.
///
/// Client-input failures carry descriptive messages; unexpected storage
/// faults are normalised to [`SubmitError::Internal`] and never expose
/// storage error text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The intake window is closed.
    #[error("form is closed")]
    FormClosed,

    /// A caller-supplied field failed validation.
    #[error(transparent)]
    Invalid(#[from] MatchingDomainError),

    /// No candidate is registered under the supplied number.
    #[error("invalid registration number: {0}")]
    UnknownCandidate(RegNo),

    /// A pending submission for this company already exists.
    #[error("you have already submitted for {company}")]
    DuplicateSubmission {
        /// Company the duplicate targets.
        company: CompanyName,
    },

    /// Unexpected storage fault; the unit of work was rolled back.
    #[error("submission could not be recorded")]
    Internal,
}

/// Submission intake service.
///
/// Stateless between calls: the only process-wide input is the injected
/// [`IntakeWindow`] handle, read once per request. All duplicate prevention
/// is delegated to the store's atomic unit of work, so replicas of this
/// service coordinate purely through the durable store.
#[derive(Clone)]
pub struct SubmissionService<S, C>
where
    S: MatchingStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    intake: IntakeWindow,
}

impl<S, C> SubmissionService<S, C>
where
    S: MatchingStore,
    C: Clock + Send + Sync,
{
    /// Creates a new submission service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, intake: IntakeWindow) -> Self {
        Self {
            store,
            clock,
            intake,
        }
    }

    /// Validates and records a candidate's interest in a (company, slot)
    /// pair.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::FormClosed`] when intake is closed,
    /// [`SubmitError::Invalid`] for empty fields,
    /// [`SubmitError::UnknownCandidate`] when the registration number is not
    /// recognised, [`SubmitError::DuplicateSubmission`] when a pending
    /// submission for the same company exists, and [`SubmitError::Internal`]
    /// for unexpected storage faults. No retries are performed internally.
    pub async fn submit(&self, request: SubmitRequest) -> Result<SubmissionReceipt, SubmitError> {
        if !self.intake.is_open() {
            return Err(SubmitError::FormClosed);
        }

        let reg_no = RegNo::new(request.reg_no)?;
        let name = PersonName::new(request.name)?;
        let phone = PhoneNumber::new(request.phone)?;
        let company = CompanyName::new(request.company)?;
        let slot = SlotName::new(request.slot)?;

        let submission = Submission::new(reg_no, name, phone, company, slot, &*self.clock);
        self.store
            .record_submission(&submission)
            .await
            .map_err(classify_store_error)?;

        info!(
            reg_no = %submission.reg_no(),
            company = %submission.company(),
            slot = %submission.slot(),
            "submission recorded"
        );
        Ok(SubmissionReceipt {
            reg_no: submission.reg_no().clone(),
            company: submission.company().clone(),
            slot: submission.slot().clone(),
            submitted_at: submission.submitted_at(),
        })
    }
}

fn classify_store_error(err: MatchingStoreError) -> SubmitError {
    match err {
        MatchingStoreError::UnknownCandidate(reg_no) => SubmitError::UnknownCandidate(reg_no),
        MatchingStoreError::DuplicatePending { company, .. } => {
            SubmitError::DuplicateSubmission { company }
        }
        other => {
            warn!(error = %other, "submission rejected by storage fault");
            SubmitError::Internal
        }
    }
}
