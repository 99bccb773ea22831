//! Loading problem instances and configuration, saving results.
//!
//! Instances are plain text: whitespace-separated `x y` coordinate pairs,
//! conventionally one location per line. Configuration is a JSON object with
//! camelCase [`GaConfig`] keys; absent keys keep their defaults. Results are
//! written as `{"cost": .., "path": [..]}`.

use crate::error::LoadError;
use crate::ga::{GaConfig, Individual};
use crate::oracle::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Parses coordinate pairs from text.
pub fn parse_points(text: &str) -> Result<Vec<Point>, LoadError> {
    let mut points = Vec::new();
    let mut pending: Option<(f64, usize)> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| LoadError::Coordinate {
                line: line_no,
                token: token.to_string(),
            })?;
            match pending.take() {
                Some((x, _)) => points.push(Point::new(x, value)),
                None => pending = Some((value, line_no)),
            }
        }
    }

    match pending {
        Some((_, line)) => Err(LoadError::DanglingCoordinate { line }),
        None => Ok(points),
    }
}

/// Reads coordinate pairs from a file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, LoadError> {
    parse_points(&read(path.as_ref())?)
}

/// Parses and validates a JSON configuration.
pub fn parse_config(text: &str) -> Result<GaConfig, LoadError> {
    let config: GaConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads and validates a JSON configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<GaConfig, LoadError> {
    parse_config(&read(path.as_ref())?)
}

/// Reads a configuration file, falling back to defaults when the file
/// cannot be read.
///
/// Contents that fail to parse or validate are still errors.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<GaConfig, LoadError> {
    let path = path.as_ref();
    match load_config(path) {
        Err(LoadError::Io { source, .. }) => {
            warn!(path = %path.display(), error = %source, "cannot open config, using defaults");
            Ok(GaConfig::default())
        }
        other => other,
    }
}

/// Serialized form of a solved tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub cost: f64,
    pub path: Vec<usize>,
}

impl From<&Individual> for SolutionReport {
    fn from(individual: &Individual) -> Self {
        Self {
            cost: individual.cost(),
            path: individual.path().to_vec(),
        }
    }
}

/// Writes `best` as pretty-printed JSON.
pub fn write_report(path: impl AsRef<Path>, best: &Individual) -> Result<(), LoadError> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(&SolutionReport::from(best))?;
    json.push('\n');
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::path::PathBuf;

    #[test]
    fn test_parse_points_one_per_line() {
        let points = parse_points("0 0\n1.5 0\n\n1.5 -2e1\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.5, 0.0),
                Point::new(1.5, -20.0)
            ]
        );
    }

    #[test]
    fn test_parse_points_free_whitespace() {
        let points = parse_points("  0\t1 2\n 3  ").unwrap();
        assert_eq!(points, vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
    }

    #[test]
    fn test_parse_points_empty() {
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_points("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_points_bad_token() {
        let err = parse_points("0 0\n1 north\n").unwrap_err();
        match err {
            LoadError::Coordinate { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "north");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_points_dangling() {
        let err = parse_points("0 0\n4\n").unwrap_err();
        assert!(matches!(err, LoadError::DanglingCoordinate { line: 2 }));
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"{"populationSize": 50, "mutationRate": 0.2, "maxGenerations": 10,
                "eliteSize": 1, "numThreads": 2, "seed": 9}"#,
        )
        .unwrap();
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.elite_size, 1);
        assert_eq!(config.num_threads, 2);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_parse_config_empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), GaConfig::default());
    }

    #[test]
    fn test_parse_config_rejects_out_of_range() {
        let err = parse_config(r#"{"mutationRate": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config(ConfigError::MutationRate(_))
        ));

        let err = parse_config(r#"{"numThreads": 0}"#).unwrap_err();
        assert!(matches!(err, LoadError::Config(ConfigError::NoThreads)));
    }

    #[test]
    fn test_parse_config_rejects_malformed() {
        assert!(matches!(
            parse_config(r#"{"populationSize": -1}"#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            parse_config(r#"{"populationSize": "many"}"#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            parse_config(r#"{"populationSise": 10}"#),
            Err(LoadError::Json(_))
        ));
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("u-tdtsp-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let config = load_config_or_default("/definitely/not/here.json").unwrap();
        assert_eq!(config, GaConfig::default());
    }

    #[test]
    fn test_fallback_keeps_malformed_config_an_error() {
        let path = scratch_path("bad-config.json");
        fs::write(&path, "{ populationSize: 10").unwrap();
        let loaded = load_config_or_default(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(loaded, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_fallback_reads_valid_config() {
        let path = scratch_path("good-config.json");
        fs::write(&path, r#"{"eliteSize": 4, "seed": 3}"#).unwrap();
        let loaded = load_config_or_default(&path);
        let _ = fs::remove_file(&path);

        let config = loaded.unwrap();
        assert_eq!(config.elite_size, 4);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_fallback_keeps_invalid_values_an_error() {
        let path = scratch_path("invalid-config.json");
        fs::write(&path, r#"{"populationSize": 0}"#).unwrap();
        let loaded = load_config_or_default(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(
            loaded,
            Err(LoadError::Config(ConfigError::EmptyPopulation))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_points("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_report_round_trip_through_file() {
        let best = Individual::evaluated(vec![2, 0, 1], 7.5);
        let path = scratch_path("report.json");

        write_report(&path, &best).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let report: SolutionReport = serde_json::from_str(&text).unwrap();
        assert_eq!(
            report,
            SolutionReport {
                cost: 7.5,
                path: vec![2, 0, 1]
            }
        );
    }
}
