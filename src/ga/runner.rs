//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! All randomness comes from one seeded generator owned by the loop and used
//! only on the calling thread; evaluation workers never draw random numbers,
//! so a fixed seed reproduces a run regardless of `num_threads`.

use super::config::GaConfig;
use super::evaluator::Evaluator;
use super::operators::{order_crossover, random_tour, swap_mutation};
use super::selection::tournament;
use super::types::{Individual, Population};
use crate::error::SolveError;
use crate::oracle::CostOracle;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-ever cost after initialization and after each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tdtsp::ga::{GaConfig, GaRunner};
/// use u_tdtsp::oracle::{Euclidean, Point};
///
/// let oracle = Euclidean::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(&oracle, &config).unwrap();
/// assert!((result.best.cost() - 4.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.max_generations` generations.
    pub fn run<O: CostOracle>(oracle: &O, config: &GaConfig) -> Result<GaResult, SolveError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let evaluator = Evaluator::new(oracle, config.num_threads)?;
        info!(
            locations = oracle.size(),
            population = config.population_size,
            generations = config.max_generations,
            threads = config.num_threads,
            seed,
            "starting genetic search"
        );

        let mut evolution = Evolution::new(&evaluator, config, super::create_rng(seed));
        for _ in 0..config.max_generations {
            evolution.step();
        }
        let result = evolution.finish();

        info!(
            cost = result.best.cost(),
            generations = result.generations,
            "genetic search finished"
        );
        Ok(result)
    }
}

/// Upper bound on the up-front `cost_history` reservation.
const HISTORY_RESERVE: usize = 4096;

/// State of one run between generations.
pub(crate) struct Evolution<'e, 'a, O: CostOracle> {
    evaluator: &'e Evaluator<'a, O>,
    config: &'e GaConfig,
    rng: StdRng,
    population: Population,
    best: Individual,
    generation: usize,
    cost_history: Vec<f64>,
}

impl<'e, 'a, O: CostOracle> Evolution<'e, 'a, O> {
    /// Seeds and evaluates a random initial population.
    ///
    /// `config` must already be validated.
    pub(crate) fn new(
        evaluator: &'e Evaluator<'a, O>,
        config: &'e GaConfig,
        mut rng: StdRng,
    ) -> Self {
        let n = evaluator.oracle().size();
        let paths = (0..config.population_size)
            .map(|_| random_tour(n, &mut rng))
            .collect();
        let population = Population::new(evaluator.evaluate(paths));
        let best = population
            .best()
            .cloned()
            .expect("validated population_size is at least 1");

        let mut cost_history =
            Vec::with_capacity(config.max_generations.saturating_add(1).min(HISTORY_RESERVE));
        cost_history.push(best.cost());

        Self {
            evaluator,
            config,
            rng,
            population,
            best,
            generation: 0,
            cost_history,
        }
    }

    /// Breeds and evaluates the next generation.
    pub(crate) fn step(&mut self) {
        let config = self.config;

        // Elites are the head of the sorted population
        self.population.sort_by_cost();
        let elite_count = config.effective_elite_size();
        let mut next: Vec<Individual> = self.population.members()[..elite_count].to_vec();

        let mut offspring = Vec::with_capacity(config.population_size - elite_count);
        while elite_count + offspring.len() < config.population_size {
            let p1 = tournament(&self.population, config.tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, config.tournament_size, &mut self.rng);

            let mut child = order_crossover(p1.path(), p2.path(), &mut self.rng);
            if self.rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(&mut child, &mut self.rng);
            }
            offspring.push(child);
        }

        next.extend(self.evaluator.evaluate(offspring));
        self.population = Population::new(next);
        self.generation += 1;

        if let Some(gen_best) = self.population.best() {
            if gen_best.cost() < self.best.cost() {
                self.best = gen_best.clone();
                debug!(
                    generation = self.generation,
                    cost = self.best.cost(),
                    "new best tour"
                );
            }
        }
        self.cost_history.push(self.best.cost());
        trace!(
            generation = self.generation,
            best = self.best.cost(),
            "generation done"
        );
    }

    #[cfg(test)]
    pub(crate) fn population(&self) -> &Population {
        &self.population
    }

    pub(crate) fn finish(self) -> GaResult {
        GaResult {
            best: self.best,
            generations: self.generation,
            cost_history: self.cost_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
