//! Tour cost evaluation.
//!
//! The [`Evaluator`] turns freshly bred paths into [`Individual`]s. With more
//! than one worker it splits the paths into contiguous batches and costs them
//! concurrently on a dedicated rayon pool. Each batch writes to its own
//! disjoint slice of the output and only reads the oracle, so results are
//! bit-identical to sequential evaluation.

use super::types::Individual;
use crate::error::SolveError;
use crate::oracle::CostOracle;
use std::ops::Range;

/// Total cost of visiting `path` cyclically.
///
/// A running clock starts at 0 and advances by each leg's cost; the closing
/// leg back to the first location departs at the final clock value. An empty
/// path costs 0.
pub fn tour_cost<O: CostOracle + ?Sized>(oracle: &O, path: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return 0.0;
    };

    let mut clock = 0.0;
    for leg in path.windows(2) {
        clock += oracle.cost(leg[0], leg[1], clock);
    }
    clock + oracle.cost(last, first, clock)
}

/// Splits `0..len` into `batches` contiguous ranges of `len / batches`
/// elements; the last range absorbs the remainder.
///
/// `batches` is capped at `len` so no range is empty (except for `len == 0`,
/// which yields a single empty range).
pub fn batch_ranges(len: usize, batches: usize) -> Vec<Range<usize>> {
    let batches = batches.clamp(1, len.max(1));
    let size = len / batches;
    (0..batches)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == batches { len } else { start + size };
            start..end
        })
        .collect()
}

/// Costs populations against one oracle.
pub struct Evaluator<'a, O: CostOracle> {
    oracle: &'a O,
    num_threads: usize,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<'a, O: CostOracle> Evaluator<'a, O> {
    /// Creates an evaluator with `num_threads` workers.
    ///
    /// `num_threads <= 1` evaluates on the calling thread. Without the
    /// `parallel` feature evaluation is always sequential.
    pub fn new(oracle: &'a O, num_threads: usize) -> Result<Self, SolveError> {
        let num_threads = num_threads.max(1);

        #[cfg(feature = "parallel")]
        let pool = if num_threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|i| format!("tour-eval-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self {
            oracle,
            num_threads,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Cost of a single path.
    pub fn cost(&self, path: &[usize]) -> f64 {
        tour_cost(self.oracle, path)
    }

    /// Evaluates every path, preserving order.
    pub fn evaluate(&self, paths: Vec<Vec<usize>>) -> Vec<Individual> {
        let mut costs = vec![0.0; paths.len()];
        self.fill_costs(&paths, &mut costs);

        paths
            .into_iter()
            .zip(costs)
            .map(|(path, cost)| Individual::evaluated(path, cost))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn fill_costs(&self, paths: &[Vec<usize>], costs: &mut [f64]) {
        let Some(pool) = self.pool.as_ref() else {
            return self.fill_sequential(paths, costs);
        };

        let oracle = self.oracle;
        let ranges = batch_ranges(paths.len(), self.num_threads);
        pool.scope(|scope| {
            let mut rest = costs;
            for range in ranges {
                let (out, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                let batch = &paths[range];
                scope.spawn(move |_| {
                    for (slot, path) in out.iter_mut().zip(batch) {
                        *slot = tour_cost(oracle, path);
                    }
                });
            }
        });
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_costs(&self, paths: &[Vec<usize>], costs: &mut [f64]) {
        self.fill_sequential(paths, costs);
    }

    fn fill_sequential(&self, paths: &[Vec<usize>], costs: &mut [f64]) {
        for (slot, path) in costs.iter_mut().zip(paths) {
            *slot = tour_cost(self.oracle, path);
        }
    }
}
