//! Submission entity and its pending/assigned status.

use super::{CompanyName, ParseSubmissionStatusError, PersonName, PhoneNumber, RegNo, SlotName, SubmissionId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Submission lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// The submission awaits assignment.
    Pending,
    /// The submission has been matched to an assignment record.
    Assigned,
}

impl SubmissionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
        }
    }
}

impl TryFrom<&str> for SubmissionStatus {
    type Error = ParseSubmissionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            _ => Err(ParseSubmissionStatusError(value.to_owned())),
        }
    }
}

/// A candidate's expressed interest in working a (company, slot) pair.
///
/// Name and phone are denormalised at submission time; `submitted_at` is the
/// acceptance timestamp used for first-come-first-served tie-breaking during
/// selection. Submissions are never deleted; assignment flips the status from
/// [`SubmissionStatus::Pending`] to [`SubmissionStatus::Assigned`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    id: SubmissionId,
    reg_no: RegNo,
    name: PersonName,
    phone: PhoneNumber,
    company: CompanyName,
    slot: SlotName,
    status: SubmissionStatus,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Creates a new pending submission timestamped at acceptance time.
    #[must_use]
    pub fn new(
        reg_no: RegNo,
        name: PersonName,
        phone: PhoneNumber,
        company: CompanyName,
        slot: SlotName,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SubmissionId::new(),
            reg_no,
            name,
            phone,
            company,
            slot,
            status: SubmissionStatus::Pending,
            submitted_at: clock.utc(),
        }
    }

    /// Returns the submission identifier.
    #[must_use]
    pub const fn id(&self) -> SubmissionId {
        self.id
    }

    /// Returns the candidate registration number.
    #[must_use]
    pub const fn reg_no(&self) -> &RegNo {
        &self.reg_no
    }

    /// Returns the candidate name captured at submission time.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the phone number captured at submission time.
    #[must_use]
    pub const fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Returns the company this submission targets.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the slot this submission targets.
    #[must_use]
    pub const fn slot(&self) -> &SlotName {
        &self.slot
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the acceptance timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns whether the submission still awaits assignment.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// Flips the status to [`SubmissionStatus::Assigned`].
    ///
    /// Returns `false` without mutating when the submission is no longer
    /// pending, mirroring the conditional status update a durable store
    /// performs to guard against lost races.
    #[must_use]
    pub fn mark_assigned(&mut self) -> bool {
        if self.is_pending() {
            self.status = SubmissionStatus::Assigned;
            true
        } else {
            false
        }
    }
}
