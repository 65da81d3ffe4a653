//! Sizing math for Bloom Filters
//!
//! With `n` the expected number of items, `p` the target false positive rate, `m` the number of bits and `k` the number of hash evaluations per item:
//!
//! - `m = ceil(n * ln(p) / ln(1 / 2^ln(2)))`, which is the familiar `-n * ln(p) / ln(2)^2`
//! - `k = round(ln(2) * m / n)`
//!
//! These functions do not validate their inputs. The filter builder does that before calling them.

use core::f64::consts::LN_2;

/// `ln(1 / 2^ln(2))`, roughly -0.4805
const SIZING_DENOMINATOR: f64 = -(LN_2 * LN_2);

/// Optimal number of bits for `capacity` items at `error_rate`
///
/// Rounded up so the false positive bound isn't broken by under-provisioning. Never less than 1.
pub fn best_m(capacity: u64, error_rate: f64) -> u64 {
    let bits = (capacity as f64 * error_rate.ln() / SIZING_DENOMINATOR).ceil();
    // Float to int casts saturate, NaN lands on 0
    (bits as u64).max(1)
}

/// Optimal number of hash evaluations for `capacity` items at `error_rate`
///
/// Rounded to the nearest integer. A tiny `m / n` would round to zero hashes, which turns every query into a "maybe", so we clamp to 1.
pub fn best_k(capacity: u64, error_rate: f64) -> u32 {
    let m = best_m(capacity, error_rate);
    let k = (LN_2 * m as f64 / capacity as f64).round() as u32;
    if k == 0 {
        log::warn!(
            "hash count rounded to 0 (n = {}, p = {}, m = {}), using 1",
            capacity,
            error_rate,
            m
        );
        return 1;
    }
    k
}

/// `k = (m / n) * ln(2)` before rounding
pub fn optimal_hash_count(bit_count: f64, capacity: f64) -> f64 {
    (bit_count / capacity) * LN_2
}

/// Bits needed so that `hash_count` is optimal for `capacity` items
pub fn bits_for(hash_count: f64, capacity: f64) -> f64 {
    (hash_count / LN_2) * capacity
}

/// Number of items for which `hash_count` is optimal in `bit_count` bits
pub fn capacity_for(bit_count: f64, hash_count: f64) -> f64 {
    (bit_count / hash_count) * LN_2
}

/// Expected false positive rate after inserting `items` distinct items
///
/// `(1 - e^(-k * n / m))^k`
pub fn expected_false_positive_rate(bit_count: u64, hash_count: u32, items: u64) -> f64 {
    let k = hash_count as f64;
    let exponent = -k * items as f64 / bit_count as f64;
    (1.0 - exponent.exp()).powf(k)
}

/* -------------------- Unit Tests -------------------- */
