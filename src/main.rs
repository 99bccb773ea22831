use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_tdtsp::ga::{GaConfig, GaRunner};
use u_tdtsp::io;
use u_tdtsp::oracle::{Congestion, Euclidean};

/// Searches for a cheap round trip over the locations in a problem file.
#[derive(Parser)]
#[command(name = "u-tdtsp", version)]
struct Cli {
    /// Problem file with one `x y` coordinate pair per location.
    problem: PathBuf,

    /// JSON configuration (camelCase GaConfig keys).
    config: Option<PathBuf>,

    /// Where to write the solution JSON.
    #[arg(default_value = "solution.json")]
    output: PathBuf,

    /// Overrides the configured random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the configured number of evaluation threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Uses plain Euclidean distance instead of the congestion model.
    #[arg(long = "static")]
    static_cost: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let points = io::load_points(&cli.problem)
        .with_context(|| format!("loading problem {}", cli.problem.display()))?;
    if points.is_empty() {
        bail!("problem {} contains no locations", cli.problem.display());
    }
    info!(locations = points.len(), "loaded problem");

    let mut config = match &cli.config {
        Some(path) => io::load_config_or_default(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GaConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(threads) = cli.threads {
        config.num_threads = threads;
    }

    let euclidean = Euclidean::new(points);
    let result = if cli.static_cost {
        GaRunner::run(&euclidean, &config)?
    } else {
        GaRunner::run(&Congestion::new(euclidean), &config)?
    };

    println!("Cost: {}", result.best.cost());
    io::write_report(&cli.output, &result.best)
        .with_context(|| format!("saving solution to {}", cli.output.display()))?;
    info!(output = %cli.output.display(), "saved solution");

    Ok(())
}
