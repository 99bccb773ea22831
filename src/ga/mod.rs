//! Genetic Algorithm for cyclic tours.
//!
//! Evolves a population of visiting orders against a
//! [`CostOracle`](crate::oracle::CostOracle):
//!
//! 1. Seed `population_size` random permutations and evaluate them
//! 2. Sort by cost, carry the `elite_size` cheapest over unchanged
//! 3. Fill the rest by tournament selection, OX1 crossover, swap mutation
//! 4. Evaluate the offspring (optionally on several workers), repeat
//!
//! The best tour ever seen is kept apart from the churning population and
//! returned after `max_generations` generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour and cost history
//! - [`Individual`], [`Population`]: Evaluated tours
//! - [`Evaluator`]: Sequential or batched parallel cost evaluation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod evaluator;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use evaluator::{tour_cost, Evaluator};
pub use runner::{GaResult, GaRunner};
pub use types::{Individual, Population};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the deterministic generator used by the evolutionary loop.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
