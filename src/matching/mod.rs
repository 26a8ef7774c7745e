//! Submission intake and fair volunteer assignment.
//!
//! Two collaborating services share one durable store: [`services::SubmissionService`]
//! populates the pending-submission pool while enforcing at-most-one-pending
//! submission per (candidate, company), and [`services::AssignmentService`]
//! consumes from that pool, matching the least-loaded candidate first and
//! committing the assignment record, status flip, and workload bump as a
//! single atomic unit. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Transport-agnostic response shaping in [`api`]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
