//! Permutation operators for tours.
//!
//! All operators work on `&[usize]` visiting orders and keep them valid
//! permutations of `0..n`.
//!
//! - [`random_tour`]: uniform random permutation
//! - [`order_crossover`] (OX1): Davis (1985), preserves relative order
//! - [`swap_mutation`]: exchange two random positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random visiting order over `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX1), producing a single child.
///
/// Copies a random segment of `parent1` into the child, then fills the
/// remaining positions with the missing locations in the order they appear
/// in `parent2`, reading and writing from just past the segment and
/// wrapping around.
///
/// Parents shorter than two locations are returned as a copy of `parent1`
/// without consuming randomness.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    ox_child(parent1, parent2, start, end)
}

/// Builds one OX1 child for the segment `[start, end]` (inclusive).
///
/// Deterministic: the same parents and cut points always give the same child.
///
/// # Panics
/// Panics if `start > end`, `end` is out of range, or parents differ in
/// length.
pub fn ox_child(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "segment out of range");

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        used[parent1[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = parent2[(end + 1 + offset) % n];
        if !used[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two uniformly random positions.
///
/// The positions may coincide, making the move a no-op.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    tour.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::create_rng;
    use proptest::prelude::*;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in perm {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    // ---- Random tours ----

    #[test]
    fn test_random_tour_sizes() {
        let mut rng = create_rng(42);
        assert!(random_tour(0, &mut rng).is_empty());
        assert_eq!(random_tour(1, &mut rng), vec![0]);
        for n in 2..30 {
            assert!(is_valid_permutation(&random_tour(n, &mut rng), n));
        }
    }

    // ---- OX1 ----

    #[test]
    fn test_ox_known_child() {
        let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = [7, 6, 5, 4, 3, 2, 1, 0];
        // segment [2, 4] = 2 3 4; parent2 read from index 5: 2 1 0 7 6 5 4 3
        // unused in that order: 1 0 7 6 5, written from position 5 wrapping
        let child = ox_child(&p1, &p2, 2, 4);
        assert_eq!(child, vec![6, 5, 2, 3, 4, 1, 0, 7]);
    }

    #[test]
    fn test_ox_full_segment_copies_parent1() {
        let p1 = [3, 1, 0, 2];
        let p2 = [0, 1, 2, 3];
        assert_eq!(ox_child(&p1, &p2, 0, 3), p1.to_vec());
    }

    #[test]
    fn test_ox_is_deterministic_for_fixed_cuts() {
        let p1 = [4, 0, 3, 1, 2];
        let p2 = [1, 2, 4, 3, 0];
        assert_eq!(ox_child(&p1, &p2, 1, 3), ox_child(&p1, &p2, 1, 3));
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![0, 1, 2, 3, 4];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
        assert!(order_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let child = order_crossover(&[0, 1], &[1, 0], &mut rng);
            assert!(is_valid_permutation(&child, 2));
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        let mut rng = create_rng(42);
        order_crossover(&[0, 1, 2], &[0, 1], &mut rng);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_changes_at_most_two_positions() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let changed = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert!(changed == 0 || changed == 2, "changed {changed} positions");
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    // ---- Properties ----

    fn two_tours() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1usize..40).prop_flat_map(|n| {
            let base: Vec<usize> = (0..n).collect();
            (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
        })
    }

    proptest! {
        #[test]
        fn prop_crossover_yields_permutation((p1, p2) in two_tours(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&child, p1.len()), "invalid child {:?}", child);
        }

        #[test]
        fn prop_ox_keeps_segment(
            (p1, p2) in two_tours(),
            a in any::<usize>(),
            b in any::<usize>(),
        ) {
            let n = p1.len();
            let (start, end) = (a % n, b % n);
            let (start, end) = (start.min(end), start.max(end));
            let child = ox_child(&p1, &p2, start, end);
            prop_assert_eq!(&child[start..=end], &p1[start..=end]);
            prop_assert!(is_valid_permutation(&child, n));
        }

        #[test]
        fn prop_pipeline_yields_permutation((p1, p2) in two_tours(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let mut child = order_crossover(&p1, &p2, &mut rng);
            swap_mutation(&mut child, &mut rng);
            prop_assert_eq!(child.len(), p1.len());
            prop_assert!(is_valid_permutation(&child, p1.len()));
        }
    }
}
