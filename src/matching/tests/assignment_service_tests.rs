//! Service tests for assignment selection, atomicity, and fault handling.

use crate::config::IntakeWindow;
use crate::matching::{
    adapters::memory::InMemoryMatchingStore,
    domain::{ASSIGNMENT_KIND, RegNo, SubmissionStatus},
    ports::MatchingStoreError,
    services::{
        AssignError, AssignRequest, AssignmentOutcome, AssignmentService, SubmissionService,
        SubmitRequest,
    },
    tests::support::{MockStore, SteppedClock, candidate},
};
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Harness {
    store: Arc<InMemoryMatchingStore>,
    submissions: SubmissionService<InMemoryMatchingStore, SteppedClock>,
    assignments: AssignmentService<InMemoryMatchingStore, SteppedClock>,
}

impl Harness {
    fn seed_candidate(&self, reg_no: &str, workload: u32) {
        self.store
            .insert_candidate(candidate(reg_no, workload))
            .expect("candidate seeding should succeed");
    }

    async fn seed_submission(&self, reg_no: &str, company: &str, slot: &str) {
        self.submissions
            .submit(SubmitRequest::new(
                reg_no, "Seed Person", "555-0100", company, slot,
            ))
            .await
            .expect("seed submission should succeed");
    }
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryMatchingStore::new());
    let clock = Arc::new(SteppedClock::new());
    let submissions = SubmissionService::new(
        Arc::clone(&store),
        Arc::clone(&clock),
        IntakeWindow::new(true),
    );
    let assignments = AssignmentService::new(Arc::clone(&store), clock);
    Harness {
        store,
        submissions,
        assignments,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_prefers_the_least_loaded_candidate(harness: Harness) {
    // Candidate A has worked twice already; B has not worked at all.
    harness.seed_candidate("A-1001", 2);
    harness.seed_candidate("B-2002", 0);
    harness.seed_submission("A-1001", "Acme", "10am").await;
    harness.seed_submission("B-2002", "Acme", "10am").await;

    let outcome = harness
        .assignments
        .assign(AssignRequest::new("Acme", "10am"))
        .await
        .expect("assignment should succeed");

    let AssignmentOutcome::Assigned(matched) = outcome else {
        panic!("expected a committed match");
    };
    assert_eq!(matched.reg_no().as_str(), "B-2002");
    assert_eq!(matched.company().as_str(), "Acme");
    assert_eq!(matched.slot().as_str(), "10am");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_breaks_workload_ties_first_come_first_served(harness: Harness) {
    harness.seed_candidate("A-1001", 1);
    harness.seed_candidate("B-2002", 1);
    // A submitted before B; the stepped clock guarantees distinct stamps.
    harness.seed_submission("A-1001", "Acme", "10am").await;
    harness.seed_submission("B-2002", "Acme", "10am").await;

    let outcome = harness
        .assignments
        .assign(AssignRequest::new("Acme", "10am"))
        .await
        .expect("assignment should succeed");

    let AssignmentOutcome::Assigned(matched) = outcome else {
        panic!("expected a committed match");
    };
    assert_eq!(matched.reg_no().as_str(), "A-1001");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_scopes_selection_to_company_and_slot(harness: Harness) {
    harness.seed_candidate("A-1001", 0);
    harness.seed_submission("A-1001", "Acme", "10am").await;

    let outcome = harness
        .assignments
        .assign(AssignRequest::new("Acme", "2pm"))
        .await
        .expect("assignment should succeed");

    assert_eq!(outcome, AssignmentOutcome::NoEligibleCandidate);
    let assignments = harness
        .store
        .assignments()
        .expect("lookup should succeed");
    assert!(assignments.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_with_no_pending_submissions_is_a_normal_outcome(harness: Harness) {
    let outcome = harness
        .assignments
        .assign(AssignRequest::new("Acme", "2pm"))
        .await
        .expect("assignment should succeed");

    assert_eq!(outcome, AssignmentOutcome::NoEligibleCandidate);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_commits_record_status_flip_and_workload_together(harness: Harness) {
    harness.seed_candidate("A-1001", 0);
    harness.seed_submission("A-1001", "Acme", "10am").await;
    let reg_no = RegNo::new("A-1001").expect("valid reg no");

    harness
        .assignments
        .assign(AssignRequest::new("Acme", "10am"))
        .await
        .expect("assignment should succeed");

    let submissions = harness
        .store
        .submissions_for(&reg_no)
        .expect("lookup should succeed");
    let submission = submissions.first().expect("one submission");
    assert_eq!(submission.status(), SubmissionStatus::Assigned);

    let records = harness.store.assignments().expect("lookup should succeed");
    assert_eq!(records.len(), 1);
    let record = records.first().expect("one assignment record");
    assert_eq!(record.reg_no(), &reg_no);
    assert_eq!(record.kind(), ASSIGNMENT_KIND);

    use crate::matching::ports::MatchingStore;
    let updated = harness
        .store
        .find_candidate(&reg_no)
        .await
        .expect("candidate lookup should succeed")
        .expect("candidate exists");
    assert_eq!(updated.workload_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mid_transaction_fault_leaves_no_partial_state(harness: Harness) {
    harness.seed_candidate("A-1001", 0);
    harness.seed_submission("A-1001", "Acme", "10am").await;
    let reg_no = RegNo::new("A-1001").expect("valid reg no");

    harness.store.fail_next_assignment();
    let result = harness
        .assignments
        .assign(AssignRequest::new("Acme", "10am"))
        .await;
    assert_eq!(result, Err(AssignError::Internal));

    // All-or-nothing: no record, no status flip, no workload bump.
    use crate::matching::ports::MatchingStore;
    assert!(harness.store.assignments().expect("lookup").is_empty());
    let submissions = harness.store.submissions_for(&reg_no).expect("lookup");
    assert!(submissions.first().expect("one submission").is_pending());
    let unchanged = harness
        .store
        .find_candidate(&reg_no)
        .await
        .expect("lookup")
        .expect("candidate exists");
    assert_eq!(unchanged.workload_count(), 0);

    // The fault hook is one-shot; a retry commits cleanly.
    let outcome = harness
        .assignments
        .assign(AssignRequest::new("Acme", "10am"))
        .await
        .expect("retry should succeed");
    assert!(matches!(outcome, AssignmentOutcome::Assigned(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lost_race_surfaces_as_retryable_conflict() {
    let mut store = MockStore::new();
    store
        .expect_assign_top_candidate()
        .returning(|_, _, _| Err(MatchingStoreError::AssignmentConflict));

    let service = AssignmentService::new(Arc::new(store), Arc::new(SteppedClock::new()));
    let result = service.assign(AssignRequest::new("Acme", "10am")).await;

    assert_eq!(result, Err(AssignError::Conflict));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storage_faults_are_normalised_to_internal() {
    let mut store = MockStore::new();
    store.expect_assign_top_candidate().returning(|_, _, _| {
        Err(MatchingStoreError::persistence(std::io::Error::other(
            "socket closed",
        )))
    });

    let service = AssignmentService::new(Arc::new(store), Arc::new(SteppedClock::new()));
    let result = service.assign(AssignRequest::new("Acme", "10am")).await;

    assert_eq!(result, Err(AssignError::Internal));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_rejects_blank_fields(harness: Harness) {
    let result = harness
        .assignments
        .assign(AssignRequest::new("", "10am"))
        .await;
    assert!(matches!(result, Err(AssignError::Invalid(_))));
}
