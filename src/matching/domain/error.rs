//! Error types for matching domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain matching values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchingDomainError {
    /// The registration number is empty after trimming.
    #[error("registration number must not be empty")]
    EmptyRegNo,

    /// The person name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The phone number is empty after trimming.
    #[error("phone number must not be empty")]
    EmptyPhone,

    /// The company name is empty after trimming.
    #[error("company must not be empty")]
    EmptyCompany,

    /// The slot label is empty after trimming.
    #[error("slot must not be empty")]
    EmptySlot,
}

/// Error returned while parsing submission statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown submission status: {0}")]
pub struct ParseSubmissionStatusError(pub String);
