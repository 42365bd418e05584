use crate::graph::DyUGraph;
use fxhash::FxHashSet;
use std::io::{Write};
use std::io;

/// Two dominating sets of the same graph.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct DominatingPair {
    pub d1: FxHashSet<usize>,
    pub d2: FxHashSet<usize>,
}

impl DominatingPair {

    pub fn new(d1: FxHashSet<usize>, d2: FxHashSet<usize>) -> Self {
        DominatingPair { d1, d2 }
    }

    /// Returns `|D1| + |D2| + |D1 ∩ D2|`, the numerator of the score.
    pub fn cost(&self) -> usize {
        self.d1.len() + self.d2.len() + self.d1.intersection(&self.d2).count()
    }

    /// Returns `cost / n`, or `0.0` for the empty graph.
    pub fn score(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0
        }
        self.cost() as f64 / n as f64
    }

    /// Returns both sets as ascending id lists.
    pub fn sorted(&self) -> (Vec<usize>, Vec<usize>) {
        let mut d1: Vec<usize> = self.d1.iter().copied().collect();
        let mut d2: Vec<usize> = self.d2.iter().copied().collect();
        d1.sort_unstable();
        d2.sort_unstable();
        (d1, d2)
    }

}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DSInstance {
    pub graph: DyUGraph,
    /// Lowest cost found so far.
    pub upper_bound: Option<usize>,
    pub current_best: Option<DominatingPair>,
}

impl DSInstance {

    pub fn new(graph: DyUGraph) -> Self {
        DSInstance {
            graph,
            upper_bound: None,
            current_best: None,
        }
    }

    /// Returns the score of `pair` with respect to `self.graph`.
    pub fn score(&self, pair: &DominatingPair) -> f64 {
        pair.score(self.graph.num_nodes())
    }

    /// Updates the current best pair and the upper bound if `pair` is strictly cheaper.
    /// Returns `true` if `pair` was taken.
    pub fn update_current_best(&mut self, pair: &DominatingPair) -> bool {
        let cost = pair.cost();
        match self.upper_bound {
            Some(ub) if cost >= ub => false,
            _ => {
                self.upper_bound = Some(cost);
                self.current_best = Some(pair.clone());
                true
            }
        }
    }

    /// Checks if both sets of `pair` dominate `self.graph`.
    pub fn validate_solution(&self, pair: &DominatingPair) -> bool {
        self.graph.is_dominated_by(&pair.d1) && self.graph.is_dominated_by(&pair.d2)
    }

}

impl DSInstance {

    /// Writes one answer line: `<name> <D1 ids>- <D2 ids>`, ids ascending and each preceded by a
    /// space.
    pub fn write_solution<W: Write>(name: &str, pair: &DominatingPair, mut out: W) -> Result<(), io::Error> {
        let (d1, d2) = pair.sorted();
        write!(out, "{}", name)?;
        for node in d1 {
            write!(out, " {}", node)?;
        }
        write!(out, "-")?;
        for node in d2 {
            write!(out, " {}", node)?;
        }
        writeln!(out)?;
        Ok(())
    }

}
