//! Parent selection.
//!
//! Tournament selection: draw `k` members uniformly at random **with
//! replacement** and keep the cheapest. O(k) per call, no sorting needed.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Individual, Population};
use rand::Rng;

/// Picks a parent by tournament of size `k` (treated as at least 1).
///
/// Repeated draws of the same index are allowed, so a single-member
/// population always yields that member.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<'a, R: Rng>(
    population: &'a Population,
    k: usize,
    rng: &mut R,
) -> &'a Individual {
    assert!(!population.is_empty(), "cannot select from empty population");

    let n = population.len();
    let mut best = &population[rng.random_range(0..n)];
    for _ in 1..k.max(1) {
        let candidate = &population[rng.random_range(0..n)];
        if candidate.cost() < best.cost() {
            best = candidate;
        }
    }
    best
}
