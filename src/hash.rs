//! Implementations of hash functions
//!
//! The filter never picks a hash for you. These are fast, non-cryptographic byte string hashes that are good enough to plug in as the primary and secondary hash.

/// DBJ2 hash function
///
/// Source: <http://www.cse.yorku.ca/~oz/hash.html>
pub fn hash_djb2(input: &[u8]) -> u32 {
    let mut hash: u32 = 5381;
    for &byte in input {
        hash = hash.wrapping_mul(33).wrapping_add(byte as u32);
    }
    hash
}

/// SDBM hash function
///
/// Source: <http://www.cse.yorku.ca/~oz/hash.html>
pub fn hash_sdbm(input: &[u8]) -> u32 {
    let mut hash: u32 = 0;
    for &byte in input {
        hash = (byte as u32)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash);
    }
    hash
}

/// 32 bit FNV-1a hash function
pub fn hash_fnv1a(input: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    let mut hash = OFFSET_BASIS;
    for &byte in input {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Murmur3 32 bit finalizer
///
/// Spreads the entropy of a weak hash over all 32 bits. Running the simple hashes above through this before using them as filter hashes keeps the false positive rate close to the target on short or clustered inputs.
pub fn fmix32(hash: u32) -> u32 {
    const C1: u32 = 0x85eb_ca6b;
    const C2: u32 = 0xc2b2_ae35;
    let mut tmp = hash;
    tmp ^= tmp >> 16;
    tmp = tmp.wrapping_mul(C1);
    tmp ^= tmp >> 13;
    tmp = tmp.wrapping_mul(C2);
    tmp ^= tmp >> 16;
    tmp
}

/// Values of the polynomial hashes stay below this
const POLY_MODULUS: u32 = 100_000;

fn poly_hash(input: &[u8], seed: u32, multiplier: u32) -> u32 {
    input.iter().fold(seed, |hash, &byte| {
        (hash * multiplier + byte as u32) % POLY_MODULUS
    })
}

/// Polynomial string hash with multiplier 31, reduced mod 100 000
pub fn hash_poly31(input: &[u8]) -> u32 {
    poly_hash(input, 0, 31)
}

/// Polynomial string hash with multiplier 131 and seed 7, reduced mod 100 000
///
/// Pairs with [`hash_poly31`] as a secondary hash.
pub fn hash_poly131(input: &[u8]) -> u32 {
    poly_hash(input, 7, 131)
}

/* -------------------- Unit Tests -------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn basic_hash_test_djb2() {
        let a = hash_djb2("cat".as_bytes());
        let b = hash_djb2("dog".as_bytes());
        assert_ne!(a, b);
        assert_eq!(hash_djb2(b""), 5381);
        // 5381 * 33 + 'a'
        assert_eq!(hash_djb2(b"a"), 177_670);
    }

    #[test]
    fn basic_hash_test_sdbm() {
        assert_eq!(hash_sdbm(b""), 0);
        assert_eq!(hash_sdbm(b"a"), 97);
        assert_ne!(hash_sdbm(b"cat"), hash_sdbm(b"dog"));
    }

    #[test]
    fn known_values_fnv1a() {
        assert_eq!(hash_fnv1a(b""), 0x811c_9dc5);
        assert_eq!(hash_fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(hash_fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn polynomial_hashes_stay_in_range() {
        assert_eq!(hash_poly31(b""), 0);
        assert_eq!(hash_poly131(b""), 7);
        // (0 * 31 + 'b') * 31 + 'a' = 98 * 31 + 97
        assert_eq!(hash_poly31(b"ba"), 3135);
        let long = [0xffu8; 512];
        assert!(hash_poly31(&long) < POLY_MODULUS);
        assert!(hash_poly131(&long) < POLY_MODULUS);
    }

    #[test]
    fn fmix32_is_a_bijection_on_samples() {
        assert_eq!(fmix32(0), 0);
        let outputs: HashSet<u32> = (0..10_000u32).map(fmix32).collect();
        assert_eq!(outputs.len(), 10_000);
        // Neighbouring inputs land far apart
        assert!((fmix32(1) ^ fmix32(2)).count_ones() > 8);
    }

    // Different hashes should disagree often enough to act as independent-ish inputs to double hashing
    #[test]
    fn hash_pairs_are_not_correlated() {
        let words: Vec<String> = (0..1000).map(|i| format!("item-{i}")).collect();
        let pairs: HashSet<(u32, u32)> = words
            .iter()
            .map(|w| (hash_djb2(w.as_bytes()), hash_fnv1a(w.as_bytes())))
            .collect();
        assert_eq!(pairs.len(), words.len());
        let distinct_djb2: HashSet<u32> = words.iter().map(|w| hash_djb2(w.as_bytes())).collect();
        assert!(distinct_djb2.len() > 990);
    }
}
