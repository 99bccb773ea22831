//! Common interface for tour optimizers.

use crate::error::SolveError;
use crate::ga::{GaConfig, GaRunner, Individual};
use crate::oracle::CostOracle;

/// An optimizer that searches for a low-cost cycle over all locations of an
/// oracle.
///
/// Implementors are used through static dispatch; the trait exists so other
/// strategies can be swapped in for the GA.
///
/// ```
/// use u_tdtsp::ga::{GaConfig, GaRunner};
/// use u_tdtsp::oracle::{Euclidean, Point};
/// use u_tdtsp::solver::Solver;
///
/// fn best_cost<S: Solver>(solver: &S, config: &S::Config) -> f64 {
///     let oracle = Euclidean::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0)]);
///     solver.solve(&oracle, config).unwrap().cost()
/// }
///
/// let config = GaConfig::default().with_max_generations(5).with_seed(1);
/// assert_eq!(best_cost(&GaRunner, &config), 4.0);
/// ```
pub trait Solver {
    /// Strategy parameters.
    type Config;

    /// Returns the best tour found.
    fn solve<O: CostOracle>(
        &self,
        oracle: &O,
        config: &Self::Config,
    ) -> Result<Individual, SolveError>;
}

impl Solver for GaRunner {
    type Config = GaConfig;

    fn solve<O: CostOracle>(
        &self,
        oracle: &O,
        config: &GaConfig,
    ) -> Result<Individual, SolveError> {
        GaRunner::run(oracle, config).map(|result| result.best)
    }
}
