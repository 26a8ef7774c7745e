//! In-memory matching store for tests and single-process deployments.

mod store;

pub use store::InMemoryMatchingStore;
