//! # Bloom Filter implementation
//!
//! A Bloom Filter answers "have I seen this thing before?" with either "definitely not" or "maybe". It never stores the items, only a fixed size bit array, and every operation costs a bounded number of bit lookups rather than a scan.
//!
//! This crate sizes the filter from an expected capacity and a target false positive rate, then derives all `k` bit positions per item from just two caller supplied hash functions (Dillinger-Manolios double hashing). There is no removal, no resizing and no persistence.
//!
//! ```
//! use bloom_filter::{hash, BloomFilter, HashValue};
//!
//! let mut filter = BloomFilter::<str>::new(
//!     1000,
//!     0.01,
//!     |s: &str| HashValue::from(hash::fmix32(hash::hash_djb2(s.as_bytes()))),
//!     |s: &str| HashValue::from(hash::fmix32(hash::hash_fnv1a(s.as_bytes()))),
//! )
//! .expect("valid parameters");
//!
//! filter.add("banana");
//! assert!(filter.maybe_contains("banana"));
//! assert!(!filter.maybe_contains(None));
//! ```
//!
//! Construction logs the chosen `k` and `m` at debug level through the `log` facade. Nothing is printed unless a logger is installed.

mod bits;
mod error;
mod filter;
pub mod hash;
pub mod params;

pub use error::BloomFilterError;
pub use error::HashSlot;
pub use filter::BloomFilter;
pub use filter::BloomFilterBuilder;
pub use filter::HashFn;
pub use filter::HashValue;
