//! Volmatch: volunteer submission-and-assignment core.
//!
//! This crate implements the transactional workflow that moves a volunteer
//! submission from pending to assigned: candidates register interest in a
//! (company, slot) pair, and an operator-triggered assignment step selects the
//! least-loaded eligible candidate and commits the match atomically.
//!
//! # Architecture
//!
//! Volmatch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure matching types and validation with no infrastructure
//!   dependencies
//! - **Ports**: The abstract store contract both services coordinate through
//! - **Adapters**: Concrete store implementations (`PostgreSQL`, in-memory)
//!
//! All correctness-critical coordination happens inside the store's atomic
//! units of work; the services themselves are stateless between calls apart
//! from the injected intake-window handle.
//!
//! # Modules
//!
//! - [`matching`]: Submission intake and fair assignment
//! - [`config`]: Layered configuration and the intake-window handle
//! - [`auth`]: Operator credential gate for the assignment operation

pub mod auth;
pub mod config;
pub mod matching;
