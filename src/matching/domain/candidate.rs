//! Candidate aggregate: a registered person eligible for assignment.

use super::{PersonName, PhoneNumber, RegNo};
use serde::{Deserialize, Serialize};

/// A registered candidate.
///
/// Candidates are created by an out-of-scope registration process; the
/// matching core only reads them and advances [`Candidate::workload_count`]
/// when an assignment commits. The workload counter biases future selection
/// toward less-used candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    reg_no: RegNo,
    name: PersonName,
    email: String,
    phone: PhoneNumber,
    workload_count: u32,
}

impl Candidate {
    /// Creates a candidate with a zero workload counter.
    #[must_use]
    pub fn new(reg_no: RegNo, name: PersonName, email: impl Into<String>, phone: PhoneNumber) -> Self {
        Self {
            reg_no,
            name,
            email: email.into(),
            phone,
            workload_count: 0,
        }
    }

    /// Reconstructs a candidate from persisted storage.
    #[must_use]
    pub fn from_persisted(
        reg_no: RegNo,
        name: PersonName,
        email: impl Into<String>,
        phone: PhoneNumber,
        workload_count: u32,
    ) -> Self {
        Self {
            reg_no,
            name,
            email: email.into(),
            phone,
            workload_count,
        }
    }

    /// Returns the registration number.
    #[must_use]
    pub const fn reg_no(&self) -> &RegNo {
        &self.reg_no
    }

    /// Returns the candidate name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact phone number.
    #[must_use]
    pub const fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Returns the number of assignments committed for this candidate.
    #[must_use]
    pub const fn workload_count(&self) -> u32 {
        self.workload_count
    }

    /// Advances the workload counter after a committed assignment.
    pub fn record_assignment(&mut self) {
        self.workload_count = self.workload_count.saturating_add(1);
    }
}
