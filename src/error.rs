//! Errors raised while constructing a filter

use thiserror::Error;

/// Which of the two hash capabilities a filter is missing
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HashSlot {
    Primary,
    Secondary,
}

impl core::fmt::Display for HashSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HashSlot::Primary => write!(f, "primary"),
            HashSlot::Secondary => write!(f, "secondary"),
        }
    }
}

/// Possible errors for the Bloom Filter
///
/// Only construction can fail. Bad input to `add` or `maybe_contains` is absorbed instead of reported.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum BloomFilterError {
    /// One of the two hash functions was never supplied
    #[error("{slot} hash function is missing")]
    MissingHashFunction { slot: HashSlot },
    /// Backing storage for the bit array could not be reserved
    #[error("could not allocate a bit array of {bits} bits")]
    AllocationFailure { bits: u64 },
    /// Capacity, error rate or manual sizing is out of range
    #[error("invalid parameter (expected {expected}, found: {found})")]
    InvalidParameter {
        expected: &'static str,
        found: String,
    },
}

/* -------------------- Unit Tests -------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let missing = BloomFilterError::MissingHashFunction {
            slot: HashSlot::Secondary,
        };
        assert_eq!(missing.to_string(), "secondary hash function is missing");

        let alloc = BloomFilterError::AllocationFailure { bits: 64 };
        assert_eq!(alloc.to_string(), "could not allocate a bit array of 64 bits");

        let invalid = BloomFilterError::InvalidParameter {
            expected: "capacity >= 1",
            found: "0".into(),
        };
        assert_eq!(
            invalid.to_string(),
            "invalid parameter (expected capacity >= 1, found: 0)"
        );
    }
}
