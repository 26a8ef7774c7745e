//! Append-only assignment records: confirmed candidate/company/slot matches.

use super::{CompanyName, PersonName, PhoneNumber, RegNo, SlotName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed type tag written with every assignment record.
pub const ASSIGNMENT_KIND: &str = "HRM Volunteering";

/// Parameter object for building an assignment record from the selected
/// candidate and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignmentData {
    /// Matched candidate registration number.
    pub reg_no: RegNo,
    /// Matched candidate name.
    pub name: PersonName,
    /// Matched candidate email.
    pub email: String,
    /// Matched candidate phone number.
    pub phone: PhoneNumber,
    /// Company the candidate is assigned to.
    pub company: CompanyName,
    /// Slot the candidate is assigned to.
    pub slot: SlotName,
    /// Commit timestamp of the assignment.
    pub assigned_at: DateTime<Utc>,
}

/// The durable record of a confirmed match.
///
/// Created exactly once per successful assignment and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    id: Uuid,
    reg_no: RegNo,
    name: PersonName,
    email: String,
    phone: PhoneNumber,
    company: CompanyName,
    slot: SlotName,
    kind: String,
    assigned_at: DateTime<Utc>,
}

impl AssignmentRecord {
    /// Creates an assignment record carrying the fixed [`ASSIGNMENT_KIND`]
    /// tag.
    #[must_use]
    pub fn new(data: NewAssignmentData) -> Self {
        Self {
            id: Uuid::new_v4(),
            reg_no: data.reg_no,
            name: data.name,
            email: data.email,
            phone: data.phone,
            company: data.company,
            slot: data.slot,
            kind: ASSIGNMENT_KIND.to_owned(),
            assigned_at: data.assigned_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

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

    /// Returns the matched candidate email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the matched candidate phone number.
    #[must_use]
    pub const fn phone(&self) -> &PhoneNumber {
        &self.phone
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

    /// Returns the record type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the assignment commit timestamp.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }
}
