//! Special case for cycle-like instances.
//!
//! If the graph has as many edges as nodes, the longest simple path is searched exhaustively and
//! cut into two sets: every third node from offset 0 forms `D1`, every third node from offset 1
//! (plus the last node of the path) forms `D2`. The result is only used if both sets dominate.
//!
//! `|E| == |V|` holds for single cycles but also for any graph with one edge more than a spanning
//! forest needs, so the test is a heuristic gate rather than a cycle detector.

use fxhash::FxHashSet;
use tracing::debug;
use crate::ds_instance::{DSInstance, DominatingPair};

impl DSInstance {

    /// Checks if `self.graph` is a candidate for `cycle_split`: `|E| == |V|` and `|V| > 0`.
    pub fn cycle_proxy(&self) -> bool {
        let n = self.graph.num_nodes();
        n > 0 && self.graph.num_edges() == n
    }

    /// Searches the longest simple path by an exhaustive depth-first search from every node.
    /// Start nodes and neighbors are explored in ascending order; among paths of equal length the
    /// first one found is kept.
    ///
    /// `budget` bounds the number of path extensions. Returns `None` if it was exceeded.
    pub fn longest_path(&self, budget: Option<usize>) -> Option<Vec<usize>> {
        let n = self.graph.num_nodes();
        let adjacency: Vec<Vec<usize>> = (0..self.graph.num_reserved())
            .map(|node| self.graph.sorted_neighbors(node))
            .collect();
        let mut visited = vec![false; self.graph.num_reserved()];
        let mut longest: Vec<usize> = Vec::new();
        let mut extensions = 0;
        // (node, index of the next neighbor to try)
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for start in self.graph.nodes() {
            visited[start] = true;
            stack.push((start, 0));
            if longest.is_empty() {
                longest.push(start);
            }
            while let Some(&(node, idx)) = stack.last() {
                match adjacency[node].get(idx) {
                    Some(&next) => {
                        stack.last_mut().expect("`stack` is not empty").1 += 1;
                        if visited[next] {
                            continue
                        }
                        extensions += 1;
                        if budget.map_or(false, |budget| extensions > budget) {
                            return None
                        }
                        visited[next] = true;
                        stack.push((next, 0));
                        if stack.len() > longest.len() {
                            longest = stack.iter().map(|(node, _)| *node).collect();
                            // no simple path is longer than a hamiltonian one
                            if longest.len() == n {
                                return Some(longest)
                            }
                        }
                    },
                    None => {
                        visited[node] = false;
                        stack.pop();
                    },
                }
            }
        }
        Some(longest)
    }

    /// Tries to answer a cycle-like instance directly from its longest path.
    /// Returns `None` if the proxy test fails, the search budget runs out or one of the two sets
    /// does not dominate `self.graph`.
    pub fn cycle_split(&self, budget: Option<usize>) -> Option<DominatingPair> {
        if !self.cycle_proxy() {
            return None
        }
        let path = match self.longest_path(budget) {
            Some(path) => path,
            None => {
                debug!(?budget, "longest path search exceeded its budget");
                return None
            }
        };
        let d1: FxHashSet<usize> = path.iter().step_by(3).copied().collect();
        let mut d2: FxHashSet<usize> = path.iter().skip(1).step_by(3).copied().collect();
        if let Some(last) = path.last() {
            d2.insert(*last);
        }
        let pair = DominatingPair::new(d1, d2);
        if self.validate_solution(&pair) {
            debug!(path_len = path.len(), cost = pair.cost(), "cycle split succeeded");
            Some(pair)
        } else {
            debug!(path_len = path.len(), "cycle split does not dominate");
            None
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DyUGraph;

    fn ring(n: usize) -> DyUGraph {
        let edges: Vec<(usize, usize)> = (0..n).map(|node| (node, (node + 1) % n)).collect();
        DyUGraph::from_edges(n, &edges)
    }

    fn set(nodes: &[usize]) -> FxHashSet<usize> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn proxy_test() {
        assert!(DSInstance::new(ring(6)).cycle_proxy());
        // a tree plus one edge passes as well
        let lollipop = DyUGraph::from_edges(5, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]);
        assert!(DSInstance::new(lollipop).cycle_proxy());
        let star = DyUGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        assert!(!DSInstance::new(star).cycle_proxy());
        assert!(!DSInstance::new(DyUGraph::from_edges(0, &[])).cycle_proxy());
    }

    #[test]
    fn ring_split_test() {
        let ins = DSInstance::new(ring(6));
        assert_eq!(ins.longest_path(None), Some(vec![0, 1, 2, 3, 4, 5]));
        let pair = ins.cycle_split(None).unwrap();
        assert_eq!(pair.d1, set(&[0, 3]));
        assert_eq!(pair.d2, set(&[1, 4, 5]));
        assert!(ins.validate_solution(&pair));
    }

    #[test]
    fn lollipop_split_test() {
        let ins = DSInstance::new(DyUGraph::from_edges(5, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]));
        let pair = ins.cycle_split(None).unwrap();
        assert_eq!(pair.d1, set(&[0, 3]));
        assert_eq!(pair.d2, set(&[1, 4]));
    }

    #[test]
    fn longest_path_not_hamiltonian_test() {
        // 0-1-2 triangle with pendant nodes 3 at 0 and 4 at 1 and 5 at 2
        let ins = DSInstance::new(DyUGraph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (0, 3), (1, 4), (2, 5)]));
        assert_eq!(ins.longest_path(None), Some(vec![3, 0, 1, 2, 5]));
    }

    #[test]
    fn split_falls_through_test() {
        // K4 plus two isolated nodes: 6 nodes, 6 edges, but no path reaches the isolated nodes
        let ins = DSInstance::new(DyUGraph::from_edges(6, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]));
        assert!(ins.cycle_proxy());
        assert_eq!(ins.longest_path(None).map(|path| path.len()), Some(4));
        assert!(ins.cycle_split(None).is_none());
    }

    #[test]
    fn budget_test() {
        let ins = DSInstance::new(ring(6));
        assert_eq!(ins.longest_path(Some(1)), None);
        assert!(ins.cycle_split(Some(1)).is_none());
        assert!(ins.longest_path(Some(5)).is_some());
    }

}
