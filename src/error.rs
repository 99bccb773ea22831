//! Error types.
//!
//! Configuration problems are reported as [`ConfigError`], run failures as
//! [`SolveError`], and instance/configuration loading failures as
//! [`LoadError`].

use std::path::PathBuf;
use thiserror::Error;

/// An invalid [`GaConfig`](crate::ga::GaConfig) parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRate(f64),

    #[error("num_threads must be at least 1")]
    NoThreads,

    #[error("tournament_size must be at least 1")]
    EmptyTournament,
}

/// Failure of an optimization run.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[cfg(feature = "parallel")]
    #[error("failed to start evaluation workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Failure while loading a problem instance or a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: `{token}` is not a coordinate")]
    Coordinate { line: usize, token: String },

    #[error("line {line}: x coordinate without matching y")]
    DanglingCoordinate { line: usize },

    #[cfg(feature = "serde")]
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
