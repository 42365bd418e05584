//! Greedy construction of a single dominating set.
//!
//! Starting from a given pivot, the builder repeatedly adds the pivot to the set and cuts it
//! together with its remaining neighbors out of a scratch copy of the graph. Every removed node is
//! either in the set or adjacent to a member, so the result dominates any input, disconnected
//! graphs and isolated nodes included.

use fxhash::FxHashSet;
use crate::ds_instance::DSInstance;

/// How the next pivot is chosen once the previous one was cut out.
#[derive(Debug, Clone, Copy)]
pub enum PivotRule<'a> {
    /// The remaining node with the highest degree.
    MaxDegree,
    /// The remaining node with the highest degree outside of the given set. Falls back to
    /// `MaxDegree` if only nodes of that set remain.
    MaxDegreeOutside(&'a FxHashSet<usize>),
}

impl DSInstance {

    /// Builds a dominating set of `self.graph` starting with `start` and choosing further pivots
    /// by `rule`.
    ///
    /// Returns the pivots in the order they were chosen.
    pub fn greedy_dominator(&self, start: usize, rule: PivotRule<'_>) -> Vec<usize> {
        let mut clone = self.graph.clone();
        let mut pivots = Vec::new();
        let mut pivot = start;
        loop {
            pivots.push(pivot);
            if let Some(neighbors) = clone.delete_node(pivot) {
                clone.delete_nodes(&neighbors);
            }
            let next = match rule {
                PivotRule::MaxDegree => clone.max_degree_node(),
                PivotRule::MaxDegreeOutside(exclude) => clone
                    .max_degree_node_not_in(exclude)
                    .or_else(|| clone.max_degree_node()),
            };
            match next {
                Some(node) => pivot = node,
                None => break,
            }
        }
        pivots
    }

}
