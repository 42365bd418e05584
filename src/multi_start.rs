//! Multi-start search for a pair of dominating sets with a low score.
//!
//! 1. Cycle-like instances are answered by `cycle_split` if that yields two dominating sets.
//! 2. `D1`: the greedy builder runs from each of the `seed_count` nodes with the highest degree;
//!    the smallest result wins.
//! 3. `D2`: seeds are the highest degree nodes of the graph without `D1`. The builder runs on the
//!    full graph and prefers pivots outside of `D1`; the pair with the lowest cost wins.
//!
//! Ties always go to the earlier seed, so the answer does not depend on `parallel`.

use fxhash::FxHashSet;
use rayon::prelude::*;
use tracing::{debug, info};
use crate::cust_error::ProcessingError;
use crate::ds_instance::{DSInstance, DominatingPair};
use crate::greedy::PivotRule;

pub const DEFAULT_SEED_COUNT: usize = 25;
pub const DEFAULT_PATH_BUDGET: usize = 2_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of greedy starts for each of the two sets.
    pub seed_count: usize,
    /// Maximum number of path extensions in the longest path search. `None` searches
    /// exhaustively.
    pub path_budget: Option<usize>,
    /// Runs the greedy starts on the rayon thread pool.
    pub parallel: bool,
    /// Checks the multi-start answer before returning it.
    pub validate: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            seed_count: DEFAULT_SEED_COUNT,
            path_budget: Some(DEFAULT_PATH_BUDGET),
            parallel: true,
            validate: true,
        }
    }
}

impl SolverConfig {

    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    pub fn with_path_budget(mut self, path_budget: Option<usize>) -> Self {
        self.path_budget = path_budget;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

}

impl DSInstance {

    /// Computes two dominating sets of `self.graph` with a low score.
    ///
    /// The answer is also stored in `self.current_best`.
    /// A `ProcessingError` is returned for `seed_count == 0`, or if validation is enabled and a
    /// set does not dominate the graph.
    pub fn solve(&mut self, config: &SolverConfig) -> Result<DominatingPair, ProcessingError> {
        if config.seed_count == 0 {
            return Err(ProcessingError::InvalidParameter("`seed_count` must be at least 1.".to_owned()))
        }
        self.upper_bound = None;
        self.current_best = None;
        let n = self.graph.num_nodes();
        info!(nodes = n, edges = self.graph.num_edges(), "solving instance");
        if n == 0 {
            let pair = DominatingPair::default();
            self.update_current_best(&pair);
            return Ok(pair)
        }
        if let Some(pair) = self.cycle_split(config.path_budget) {
            info!(score = self.score(&pair), "answered by cycle split");
            self.update_current_best(&pair);
            return Ok(pair)
        }
        let d1 = self.select_first(config);
        debug!(size = d1.len(), "selected first dominating set");
        self.select_second(d1, config);
        let pair = self.current_best.clone()
            .ok_or_else(|| ProcessingError::InvalidSolution("no candidate for the second set".to_owned()))?;
        if config.validate && !self.validate_solution(&pair) {
            return Err(ProcessingError::InvalidSolution("a multi-start set does not dominate the graph".to_owned()))
        }
        info!(d1 = pair.d1.len(), d2 = pair.d2.len(), score = self.score(&pair), "answered by multi-start search");
        Ok(pair)
    }

    /// Runs the greedy builder once per seed. The results keep the order of `seeds`.
    fn greedy_from_seeds(&self, seeds: &[usize], rule: PivotRule<'_>, parallel: bool) -> Vec<Vec<usize>> {
        if parallel {
            seeds.par_iter()
                .map(|seed| self.greedy_dominator(*seed, rule))
                .collect()
        } else {
            seeds.iter()
                .map(|seed| self.greedy_dominator(*seed, rule))
                .collect()
        }
    }

    /// Returns the smallest greedy dominating set over the top degree seeds.
    fn select_first(&self, config: &SolverConfig) -> FxHashSet<usize> {
        let seeds = self.graph.max_x_degree_nodes(config.seed_count);
        self.greedy_from_seeds(&seeds, PivotRule::MaxDegree, config.parallel)
            .into_iter()
            .min_by_key(|candidate| candidate.len())
            .map(|candidate| candidate.into_iter().collect())
            .unwrap_or_default()
    }

    /// Builds second set candidates against the fixed `d1` and keeps the cheapest pair in
    /// `self.current_best`.
    fn select_second(&mut self, d1: FxHashSet<usize>, config: &SolverConfig) {
        let mut reduced = self.graph.clone();
        reduced.delete_nodes(&d1);
        let mut seeds = reduced.max_x_degree_nodes(config.seed_count);
        if seeds.is_empty() {
            // `d1` holds every node
            seeds = self.graph.max_x_degree_nodes(config.seed_count);
        }
        let candidates = self.greedy_from_seeds(&seeds, PivotRule::MaxDegreeOutside(&d1), config.parallel);
        for candidate in candidates {
            let pair = DominatingPair::new(d1.clone(), candidate.into_iter().collect());
            self.update_current_best(&pair);
        }
    }

}
