//! Operator credential gate for the assignment operation.
//!
//! A deliberately small collaborator: a single username/password pair
//! compared in constant time. Both sides are reduced to SHA-256 digests
//! before comparison, so the comparison width is fixed and independent of
//! the supplied credential lengths, and the accumulator loop never exits
//! early.

use crate::config::OperatorConfig;
use sha2::{Digest, Sha256};

/// Operator credentials held as digests.
#[derive(Debug, Clone)]
pub struct OperatorCredentials {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl OperatorCredentials {
    /// Creates credentials from a username/password pair.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_digest: digest(username),
            password_digest: digest(password),
        }
    }

    /// Creates credentials from the operator configuration section.
    #[must_use]
    pub fn from_config(config: &OperatorConfig) -> Self {
        Self::new(&config.username, &config.password)
    }

    /// Verifies a supplied username/password pair in constant time.
    ///
    /// Both fields are always compared; a username mismatch does not skip
    /// the password comparison.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = eq_digest(&self.username_digest, &digest(username));
        let password_ok = eq_digest(&self.password_digest, &digest(password));
        username_ok & password_ok
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn eq_digest(lhs: &[u8; 32], rhs: &[u8; 32]) -> bool {
    let mut diff = 0_u8;
    for (left, right) in lhs.iter().zip(rhs.iter()) {
        diff |= left ^ right;
    }
    diff == 0
}
