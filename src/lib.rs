//! Genetic search for low-cost cyclic tours.
//!
//! Approximately solves the (optionally time-dependent) traveling salesman
//! problem: find a visiting order over all locations whose closed cycle is
//! cheap, where each leg's cost may depend on the clock at departure.
//!
//! - [`ga`]: the evolutionary engine (config, operators, evaluator, loop)
//! - [`oracle`]: leg cost sources, including a congestion model
//! - [`solver`]: strategy-independent [`Solver`](solver::Solver) trait
//! - [`io`]: instance/config loading and result output (feature `serde`)
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use u_tdtsp::ga::{GaConfig, GaRunner};
//! use u_tdtsp::oracle::{Congestion, Euclidean, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(0.0, 3.0),
//! ];
//! let oracle = Congestion::new(Euclidean::new(points));
//! let config = GaConfig::default().with_max_generations(100).with_seed(42);
//!
//! let result = GaRunner::run(&oracle, &config).unwrap();
//! assert_eq!(result.best.path().len(), 4);
//! assert!(result.best.cost() >= 14.0);
//! ```

pub mod error;
pub mod ga;
#[cfg(feature = "serde")]
pub mod io;
pub mod oracle;
pub mod solver;
