//! Shared fixtures and doubles for matching unit tests.

use crate::matching::domain::{Candidate, PersonName, PhoneNumber, RegNo};
use crate::matching::{
    domain::{AssignmentRecord, CompanyName, SlotName, Submission},
    ports::{MatchingStore, MatchingStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock returning strictly increasing timestamps, one second apart, so
/// submission order is deterministic in tests.
#[derive(Debug)]
pub struct SteppedClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppedClock {
    /// Creates a stepped clock starting at a fixed instant.
    pub fn new() -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2026, 8, 24, 9, 0, 0).single().expect("valid base instant"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// Builds a candidate with the given workload counter.
pub fn candidate(reg_no: &str, workload: u32) -> Candidate {
    Candidate::from_persisted(
        RegNo::new(reg_no).expect("valid reg no"),
        PersonName::new(format!("Candidate {reg_no}")).expect("valid name"),
        format!("{reg_no}@example.org"),
        PhoneNumber::new("555-0100").expect("valid phone"),
        workload,
    )
}

mockall::mock! {
    /// Store double for fault and conflict paths.
    pub Store {}

    #[async_trait]
    impl MatchingStore for Store {
        async fn record_submission(&self, submission: &Submission) -> MatchingStoreResult<()>;

        async fn assign_top_candidate(
            &self,
            company: &CompanyName,
            slot: &SlotName,
            assigned_at: DateTime<Utc>,
        ) -> MatchingStoreResult<Option<AssignmentRecord>>;

        async fn find_candidate(&self, reg_no: &RegNo) -> MatchingStoreResult<Option<Candidate>>;
    }
}
