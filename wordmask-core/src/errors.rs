//! errors.rs - Custom error types for the wordmask-core library.
//!
//! Matching itself never fails. The variants below cover the few places
//! where the library does reject input: constructing an index from a
//! textual mask value, loading a dictionary, and the shared index lock.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by `wordmask-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordmaskError {
    #[error("Invalid mask value '{0}': the mask must be exactly one character")]
    InvalidMask(String),

    #[error("The shared index lock was poisoned during {0}")]
    LockPoisoned(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mask_message_names_value() {
        let err = WordmaskError::InvalidMask("##".to_string());
        assert!(err.to_string().contains("'##'"));
    }

    #[test]
    fn test_lock_poisoned_message_names_operation() {
        let err = WordmaskError::LockPoisoned("insert".to_string());
        assert_eq!(err.to_string(), "The shared index lock was poisoned during insert");
    }
}
