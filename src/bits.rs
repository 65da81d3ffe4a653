//! Fixed size bit array packed into `u64` words

use crate::error::BloomFilterError;

/// Bits per storage unit
pub const UNIT_BITS: u64 = u64::BITS as u64;

/// A bit array of fixed length. All bits start at 0.
///
/// The length is rounded up to a whole number of `u64` units. The bits past `len` are never touched.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitArray {
    words: Vec<u64>,
    len: u64,
}

impl BitArray {
    /// Try to allocate `len` zeroed bits
    ///
    /// Fails if the unit count doesn't fit in memory (or in `usize`) rather than aborting.
    pub fn new(len: u64) -> Result<BitArray, BloomFilterError> {
        let alloc_err = || BloomFilterError::AllocationFailure { bits: len };
        let units = usize::try_from(len.div_ceil(UNIT_BITS)).map_err(|_| alloc_err())?;
        let mut words: Vec<u64> = Vec::new();
        words.try_reserve_exact(units).map_err(|_| alloc_err())?;
        words.resize(units, 0);
        Ok(BitArray { words, len })
    }

    /// Number of addressable bits
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Number of `u64` storage units backing the array
    pub fn units(&self) -> usize {
        self.words.len()
    }

    /// Set bit `index` to 1 (OR into its unit, neighbours untouched)
    pub fn set(&mut self, index: u64) {
        debug_assert!(index < self.len, "bit index {index} out of range");
        self.words[(index / UNIT_BITS) as usize] |= 1u64 << (index % UNIT_BITS);
    }

    /// Is bit `index` set?
    pub fn get(&self, index: u64) -> bool {
        debug_assert!(index < self.len, "bit index {index} out of range");
        (self.words[(index / UNIT_BITS) as usize] >> (index % UNIT_BITS)) & 1 == 1
    }

    /// How many bits are 1
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// True when no bit has been set
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Is every 1-bit of `self` also set in `other`?
    #[cfg(test)]
    pub fn is_subset_of(&self, other: &BitArray) -> bool {
        self.len == other.len
            && self
                .words
                .iter()
                .zip(&other.words)
                .all(|(&mine, &theirs)| mine & !theirs == 0)
    }
}

/* -------------------- Unit Tests -------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_whole_units() {
        let bits = BitArray::new(65).unwrap();
        assert_eq!(bits.len(), 65);
        assert_eq!(bits.units(), 2);
        assert!(bits.is_clear());

        let exact = BitArray::new(128).unwrap();
        assert_eq!(exact.units(), 2);

        let one = BitArray::new(1).unwrap();
        assert_eq!(one.units(), 1);
    }

    #[test]
    fn set_then_get() {
        let mut bits = BitArray::new(200).unwrap();
        for index in [0, 1, 63, 64, 127, 199] {
            assert!(!bits.get(index));
            bits.set(index);
            assert!(bits.get(index));
        }
        assert_eq!(bits.count_ones(), 6);
        assert!(!bits.get(2));
        assert!(!bits.get(65));
    }

    #[test]
    fn set_does_not_clear_neighbours() {
        let mut bits = BitArray::new(64).unwrap();
        bits.set(3);
        bits.set(4);
        bits.set(3);
        assert!(bits.get(3));
        assert!(bits.get(4));
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn subset_tracks_monotonic_growth() {
        let mut before = BitArray::new(100).unwrap();
        before.set(10);
        let mut after = before.clone();
        after.set(90);
        assert!(before.is_subset_of(&after));
        assert!(!after.is_subset_of(&before));
    }

    #[test]
    fn absurd_size_is_an_allocation_failure() {
        let result = BitArray::new(u64::MAX);
        assert_eq!(
            result.unwrap_err(),
            BloomFilterError::AllocationFailure { bits: u64::MAX }
        );
    }
}
