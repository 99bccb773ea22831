//! Tour and population types.
//!
//! An [`Individual`] pairs a tour with the cost it was evaluated to. Both are
//! fixed at construction, which only the evaluator performs, so a cost can
//! never go stale: operators work on plain `Vec<usize>` paths and hand them
//! back for evaluation.

use std::cmp::Ordering;

/// An evaluated candidate tour.
///
/// `path` is a permutation of `0..n` visited cyclically; `cost` is the total
/// cost of that cycle, including the closing leg back to the first location.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    path: Vec<usize>,
    cost: f64,
}

impl Individual {
    /// Only the evaluator pairs a path with its cost.
    pub(crate) fn evaluated(path: Vec<usize>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// Visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Total cycle cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the individual, returning its visiting order.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Orders individuals by ascending cost.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// The individuals evolved together in one generation.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    pub fn new(members: Vec<Individual>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    /// Sorts members by ascending cost.
    pub fn sort_by_cost(&mut self) {
        self.members.sort_by(Individual::cmp_cost);
    }

    /// Lowest-cost member, or `None` if the population is empty.
    pub fn best(&self) -> Option<&Individual> {
        self.members.iter().min_by(|a, b| a.cmp_cost(b))
    }

    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.members[index]
    }
}
