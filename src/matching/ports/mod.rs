//! Port contracts for the matching workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by matching services.

pub mod store;

pub use store::{MatchingStore, MatchingStoreError, MatchingStoreResult};
