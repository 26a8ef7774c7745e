//! Unit tests for the matching module.
//!
//! Tests are organised by layer: domain invariants, the two orchestration
//! services against the in-memory store, and concurrent-caller behaviour.

mod support;

mod assignment_service_tests;
mod concurrency_tests;
