//! # Bloom Filter
//!
//! A fixed size bit array plus two caller supplied hash functions. Each item maps to `k` bit positions derived from the two base hashes with the Dillinger-Manolios double hashing scheme, described in _Bloom Filters in Probabilistic Verification_ by Dillinger and Manolios:
//!
//! `index_i = (h1 + i * h2) mod m` for `i` in `0..k`
//!
//! Adding sets those `k` bits. Querying checks them and bails out on the first 0 bit. Bits never go back to 0, so there is no removal.

use core::fmt;

use crate::bits::BitArray;
use crate::error::{BloomFilterError, HashSlot};
use crate::params;

/// The value a hash function hands back. Treated as an opaque signed integer.
pub type HashValue = i64;

/// A hash function capability over items of type `T`
///
/// Must be deterministic: the same item has to produce the same hash on every call, or false negatives become possible.
pub type HashFn<T> = Box<dyn Fn(&T) -> HashValue>;

/// Derive the `i`th bit index from the two base hashes
///
/// Done in 128 bits so `h1 + i * h2` can't overflow for any `i64` inputs, then reduced into `[0, m)` with a Euclidean remainder (no sign fixups needed).
fn combine_hash(primary: HashValue, secondary: HashValue, i: u32, bit_count: u64) -> u64 {
    let combined = primary as i128 + i as i128 * secondary as i128;
    combined.rem_euclid(bit_count as i128) as u64
}

/// How the builder picks `m` and `k`
#[derive(Debug, Clone, Copy)]
enum Sizing {
    Accuracy { capacity: u64, error_rate: f64 },
    Size { bit_count: u64, hash_count: u32 },
}

impl Sizing {
    fn resolve(self) -> Result<(u64, u32), BloomFilterError> {
        match self {
            Sizing::Accuracy {
                capacity,
                error_rate,
            } => {
                if capacity == 0 {
                    return Err(BloomFilterError::InvalidParameter {
                        expected: "capacity >= 1",
                        found: capacity.to_string(),
                    });
                }
                // Written this way round so NaN is rejected too
                if !(error_rate > 0.0 && error_rate < 1.0) {
                    return Err(BloomFilterError::InvalidParameter {
                        expected: "0 < error rate < 1",
                        found: error_rate.to_string(),
                    });
                }
                Ok((
                    params::best_m(capacity, error_rate),
                    params::best_k(capacity, error_rate),
                ))
            }
            Sizing::Size {
                bit_count,
                hash_count,
            } => {
                if bit_count == 0 {
                    return Err(BloomFilterError::InvalidParameter {
                        expected: "bit count >= 1",
                        found: bit_count.to_string(),
                    });
                }
                if hash_count == 0 {
                    return Err(BloomFilterError::InvalidParameter {
                        expected: "hash count >= 1",
                        found: hash_count.to_string(),
                    });
                }
                Ok((bit_count, hash_count))
            }
        }
    }
}

/// Builder for [`BloomFilter`]
///
/// Pick a sizing mode, hand over both hash functions, then `build()`. Leaving out a hash function is reported as [`BloomFilterError::MissingHashFunction`].
pub struct BloomFilterBuilder<T: ?Sized> {
    sizing: Sizing,
    primary: Option<HashFn<T>>,
    secondary: Option<HashFn<T>>,
}

impl<T: ?Sized> BloomFilterBuilder<T> {
    /// Size the filter for `capacity` items at a target false positive rate
    pub fn with_accuracy(capacity: u64, error_rate: f64) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Accuracy {
                capacity,
                error_rate,
            },
            primary: None,
            secondary: None,
        }
    }

    /// Size the filter by hand, skipping the sizing math
    pub fn with_size(bit_count: u64, hash_count: u32) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Size {
                bit_count,
                hash_count,
            },
            primary: None,
            secondary: None,
        }
    }

    /// Hash function for the `h1` term of every bit index
    pub fn primary_hash<F>(mut self, hash: F) -> Self
    where
        F: Fn(&T) -> HashValue + 'static,
    {
        self.primary = Some(Box::new(hash));
        self
    }

    /// Hash function for the `h2` stride between bit indices
    pub fn secondary_hash<F>(mut self, hash: F) -> Self
    where
        F: Fn(&T) -> HashValue + 'static,
    {
        self.secondary = Some(Box::new(hash));
        self
    }

    /// Try to create the filter
    ///
    /// Either a fully usable filter comes back or nothing does.
    pub fn build(self) -> Result<BloomFilter<T>, BloomFilterError> {
        let primary = self.primary.ok_or(BloomFilterError::MissingHashFunction {
            slot: HashSlot::Primary,
        })?;
        let secondary = self
            .secondary
            .ok_or(BloomFilterError::MissingHashFunction {
                slot: HashSlot::Secondary,
            })?;
        let (bit_count, hash_count) = self.sizing.resolve()?;

        log::debug!(
            "new bloom filter (k = {}; m = {})",
            hash_count,
            bit_count
        );

        Ok(BloomFilter {
            primary,
            secondary,
            hash_count,
            bits: BitArray::new(bit_count)?,
        })
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilterBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilterBuilder")
            .field("sizing", &self.sizing)
            .field("has_primary", &self.primary.is_some())
            .field("has_secondary", &self.secondary.is_some())
            .finish()
    }
}

/// A Bloom Filter over items of type `T`
///
/// ### Notes
///
/// - Items are never stored, only hashed while `add` or `maybe_contains` runs
/// - `m` and `k` are fixed at construction, the filter never resizes
/// - Not synchronised. Share it across threads behind your own lock if you need to
pub struct BloomFilter<T: ?Sized> {
    primary: HashFn<T>,
    secondary: HashFn<T>,
    hash_count: u32,
    bits: BitArray,
}

impl<T: ?Sized> BloomFilter<T> {
    /// Try to create a new Bloom Filter sized for `capacity` items at `error_rate`
    ///
    /// Same as going through [`BloomFilterBuilder::with_accuracy`] with both hashes set.
    pub fn new<P, S>(
        capacity: u64,
        error_rate: f64,
        primary: P,
        secondary: S,
    ) -> Result<BloomFilter<T>, BloomFilterError>
    where
        P: Fn(&T) -> HashValue + 'static,
        S: Fn(&T) -> HashValue + 'static,
    {
        BloomFilterBuilder::with_accuracy(capacity, error_rate)
            .primary_hash(primary)
            .secondary_hash(secondary)
            .build()
    }

    /// Evaluate each base hash exactly once
    fn base_hashes(&self, item: &T) -> (HashValue, HashValue) {
        ((self.primary)(item), (self.secondary)(item))
    }

    fn indices(&self, item: &T) -> impl Iterator<Item = u64> {
        let (primary, secondary) = self.base_hashes(item);
        let bit_count = self.bits.len();
        (0..self.hash_count).map(move |i| combine_hash(primary, secondary, i, bit_count))
    }

    /// Add item to filter
    ///
    /// Passing `None` does nothing. Adding the same item again leaves the bits as they were.
    pub fn add<'a>(&mut self, item: impl Into<Option<&'a T>>)
    where
        T: 'a,
    {
        let Some(item) = item.into() else {
            return;
        };
        let (primary, secondary) = self.base_hashes(item);
        let bit_count = self.bits.len();
        for i in 0..self.hash_count {
            self.bits.set(combine_hash(primary, secondary, i, bit_count));
        }
    }

    /// Check if item might be in filter
    ///
    /// `false` means definitely never added. `true` means possibly added (or a false positive). `None` is never present.
    pub fn maybe_contains<'a>(&self, item: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        match item.into() {
            Some(item) => self.indices(item).all(|index| self.bits.get(index)),
            None => false,
        }
    }

    /// Release the filter and its bit array
    ///
    /// Dropping does the same thing. This just makes the end of the filter's life explicit.
    pub fn destroy(self) {
        log::trace!(
            "dropping bloom filter ({} of {} bits set)",
            self.bits.count_ones(),
            self.bits.len()
        );
    }

    /// Number of bits in the filter (`m`)
    pub fn bit_count(&self) -> u64 {
        self.bits.len()
    }

    /// Number of bit positions set or checked per item (`k`)
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    /// Number of `u64` words backing the bit array
    pub fn storage_units(&self) -> usize {
        self.bits.units()
    }

    /// Approximately how many bytes is the bit array using?
    pub fn estimate_size(&self) -> usize {
        self.bits.units() * core::mem::size_of::<u64>()
    }

    /// How many bits are currently set
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Has nothing been added yet?
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// False positive rate implied by the current fill, `(ones / m)^k`
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let fill = self.bits.count_ones() as f64 / self.bits.len() as f64;
        fill.powf(f64::from(self.hash_count))
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_count", &self.bits.len())
            .field("hash_count", &self.hash_count)
            .field("bits_set", &self.bits.count_ones())
            .finish()
    }
}

/* -------------------- Unit Tests -------------------- */
