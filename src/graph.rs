//! Implementation of a simple, undirected graph data structure with node weights and basic static
//! and dynamic functions.
//!
//! Node ids are dense (`0..n`). Deleting a node only clears its adjacency slot, so ids stay stable
//! while the solver cuts scratch copies down.

use fxhash::FxHashSet;
use std::cmp::Reverse;
use std::io::{self, BufRead};
use crate::cust_error::ImportError;

/// A simple undirected graph datastructure that supports dynamic behaviour.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DyUGraph {
    adj_list: Vec<Option<FxHashSet<usize>>>,
    weights: Vec<Option<i64>>,
}

// Static functions
impl DyUGraph {

    /// Creates a graph with the nodes `0..n` and the undirected `edges`. Self-loops are dropped.
    /// Nodes created this way carry no weight.
    ///
    /// Panics if an edge refers to a node `>= n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj_list = vec![Some(FxHashSet::default()); n];
        for &(src, trg) in edges {
            if src == trg {
                continue
            }
            adj_list[src].as_mut().expect("fresh node").insert(trg);
            adj_list[trg].as_mut().expect("fresh node").insert(src);
        }
        DyUGraph {
            adj_list,
            weights: vec![None; n],
        }
    }

    /// Returns an `Iterator` over all nodes that have not yet been deleted, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| {
                if adj.is_some() {
                    Some(i)
                } else {
                    None
                }
            })
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the amount of reserved nodes of `self`. Deleted or not.
    pub fn num_reserved(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the neighborhood of `node`, or `None` if `node` was deleted.
    pub fn neighbors(&self, node: usize) -> &Option<FxHashSet<usize>> {
        &self.adj_list[node]
    }

    /// Returns the neighbors of `node` in ascending order. Empty if `node` was deleted.
    pub fn sorted_neighbors(&self, node: usize) -> Vec<usize> {
        let mut neighs: Vec<usize> = self.adj_list[node]
            .iter()
            .flat_map(|neighs| neighs.iter().copied())
            .collect();
        neighs.sort_unstable();
        neighs
    }

    /// Returns the degree of `node`, or `None` if `node` was deleted.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.adj_list[node].as_ref().map(|neighbors| neighbors.len())
    }

    /// Returns the weight of `node` as given by the input, if any.
    pub fn weight(&self, node: usize) -> Option<i64> {
        self.weights[node]
    }

    /// Returns the node with the highest degree. Ties go to the lowest id.
    pub fn max_degree_node(&self) -> Option<usize> {
        self.nodes()
            .min_by_key(|node| Reverse(self.degree(*node).expect("`node` exists")))
    }

    /// Returns the node with the highest degree that is not in `set`, or `None` if every
    /// remaining node is in `set`. Ties go to the lowest id.
    pub fn max_degree_node_not_in(&self, set: &FxHashSet<usize>) -> Option<usize> {
        self.nodes()
            .filter(|node| !set.contains(node))
            .min_by_key(|node| Reverse(self.degree(*node).expect("`node` exists")))
    }

    /// Returns the `x` nodes with the highest degree, highest first. If only `y` < `x` nodes
    /// remain in `self` returns all `y` nodes instead. Equal degrees keep ascending id order.
    pub fn max_x_degree_nodes(&self, x: usize) -> Vec<usize> {
        let mut nodes: Vec<usize> = self.nodes().collect();
        nodes.sort_by_key(|node| Reverse(self.degree(*node).expect("`node` exists")));
        nodes.truncate(x);
        nodes
    }

    /// Returns an iterator over all edges `(src, trg)` with `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter(|(_,adj)| adj.is_some())
            .flat_map(|(i,adj)| {
                adj.as_ref().expect("`adj` is some")
                    .iter()
                    .filter_map(|neigh| {
                    if i < *neigh {
                        Some((i, *neigh))
                    } else {
                        None
                    }
                }).collect::<Vec<(usize, usize)>>()
            })
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj_list
            .iter()
            .flatten()
            .map(|neighs| neighs.len())
            .sum::<usize>() / 2
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        if let Some(neighs) = &self.adj_list[edge.0] {
            return neighs.contains(&edge.1)
        }
        false
    }

    /// Checks if `self` is empty (holds no undeleted nodes).
    pub fn is_empty(&self) -> bool {
        self.nodes().next().is_none()
    }

    /// Checks if `set` dominates `self`: every remaining node is in `set` or has a neighbor in
    /// `set`. Ids outside of `self` make the check fail.
    pub fn is_dominated_by(&self, set: &FxHashSet<usize>) -> bool {
        if set.iter().any(|node| *node >= self.num_reserved() || self.adj_list[*node].is_none()) {
            return false
        }
        self.nodes().all(|node| {
            set.contains(&node) || self.neighbors(node)
                .as_ref()
                .expect("`node` exists")
                .iter()
                .any(|neigh| set.contains(neigh))
        })
    }

}

// Dynamic functions
impl DyUGraph {

    /// Tries to delete `node`.
    /// Returns the old neighborhood of `node` or `None` if nothing was deleted.
    pub fn delete_node(&mut self, node: usize) -> Option<FxHashSet<usize>> {
        let opt_neighbors = self.adj_list[node].take();
        if let Some(neighborhood) = opt_neighbors.as_ref() {
            for neighbor in neighborhood.iter() {
                if let Some(ref mut nn) = self.adj_list[*neighbor] {
                    nn.remove(&node);
                }
            }
        }
        opt_neighbors
    }

    /// Removes all nodes in `node_set` from the graph.
    pub fn delete_nodes(&mut self, node_set: &FxHashSet<usize>) {
        for node in node_set {
            let opt_neighbors = self.adj_list[*node].take();
            if let Some(neighborhood) = opt_neighbors.as_ref() {
                for neighbor in neighborhood.difference(node_set) {
                    if let Some(ref mut nn) = self.adj_list[*neighbor] {
                        nn.remove(node);
                    }
                }
            }
        }
    }

}

fn next_line<I>(lines: &mut I, section: &str) -> Result<String, ImportError>
where
    I: Iterator<Item=io::Result<String>>,
{
    let line = lines
        .next()
        .ok_or_else(|| ImportError::InputMalformedError(format!("input ends inside {}", section)))??;
    Ok(line)
}

impl DyUGraph {

    /// Reads the sectioned text format and creates a `DyUGraph`:
    ///
    /// ```text
    /// <header>
    /// <n>
    /// <header>
    /// <n position lines, ignored>
    /// <header>
    /// <n weight lines>
    /// <header>
    /// <n rows of the n x n adjacency matrix>
    /// ```
    ///
    /// A matrix entry `1` at `(i, j)` with `i != j` adds the undirected edge `{i, j}`.
    pub fn read_graph<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut lines = input.lines();
        next_line(&mut lines, "node count header")?;
        let n: usize = next_line(&mut lines, "node count")?.trim().parse()?;
        next_line(&mut lines, "position header")?;
        for _ in 0..n {
            next_line(&mut lines, "node positions")?;
        }
        next_line(&mut lines, "weight header")?;
        let mut weights = Vec::with_capacity(n);
        for _ in 0..n {
            let weight: i64 = next_line(&mut lines, "node weights")?.trim().parse()?;
            weights.push(Some(weight));
        }
        next_line(&mut lines, "edge header")?;
        let mut adj_list = vec![Some(FxHashSet::default()); n];
        for src in 0..n {
            let row = next_line(&mut lines, "adjacency matrix")?;
            let mut row_len = 0;
            for (trg, token) in row.split_whitespace().enumerate() {
                let value: i64 = token.parse()?;
                if trg >= n {
                    return Err(ImportError::InputMalformedError(format!("row {} has more than {} entries", src, n)));
                }
                if value == 1 && src != trg {
                    adj_list[src].as_mut().expect("fresh node").insert(trg);
                    adj_list[trg].as_mut().expect("fresh node").insert(src);
                }
                row_len += 1;
            }
            if row_len != n {
                return Err(ImportError::InputMalformedError(format!("row {} has {} of {} entries", src, row_len, n)));
            }
        }
        for line in lines {
            if !line?.trim().is_empty() {
                return Err(ImportError::InputMalformedError("trailing data after adjacency matrix".to_owned()));
            }
        }
        Ok(DyUGraph {
            adj_list,
            weights,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SQUARE: &str = "NB_NODES\n4\nCOORDS\n0 0\n0 1\n1 1\n1 0\nWEIGHTS\n3\n1\n4\n1\n\
                          EDGES\n0 1 0 1\n1 0 1 0\n0 1 0 1\n1 0 1 0\n";

    #[test]
    fn read_graph_test() {
        let graph = DyUGraph::read_graph(Cursor::new(SQUARE));
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert!(graph.edge_exists((0, 3)));
        assert!(graph.edge_exists((3, 0)));
        assert!(!graph.edge_exists((0, 2)));
        assert_eq!(graph.weight(2), Some(4));
    }

    #[test]
    fn read_graph_twice_test() {
        let g1 = DyUGraph::read_graph(Cursor::new(SQUARE)).unwrap();
        let g2 = DyUGraph::read_graph(Cursor::new(SQUARE)).unwrap();
        assert_eq!(g1, g2);
        let mut e1: Vec<_> = g1.edges().collect();
        let mut e2: Vec<_> = g2.edges().collect();
        e1.sort();
        e2.sort();
        assert_eq!(e1, e2);
    }

    #[test]
    fn read_graph_asymmetric_and_diagonal_test() {
        let input = "h\n3\nh\na\nb\nc\nh\n0\n0\n0\nh\n1 0 0\n0 0 0\n0 2 1\n\n\n";
        let graph = DyUGraph::read_graph(Cursor::new(input)).unwrap();
        assert_eq!(graph.num_edges(), 0);
        let input = "h\n3\nh\na\nb\nc\nh\n0\n0\n0\nh\n0 1 0\n0 0 0\n0 1 0\n";
        let graph = DyUGraph::read_graph(Cursor::new(input)).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.edge_exists((1, 0)));
        assert!(graph.edge_exists((1, 2)));
    }

    #[test]
    fn read_graph_malformed_test() {
        // short row
        let input = "h\n2\nh\na\nb\nh\n1\n1\nh\n0 1\n1\n";
        assert!(matches!(DyUGraph::read_graph(Cursor::new(input)), Err(ImportError::InputMalformedError(_))));
        // missing row
        let input = "h\n2\nh\na\nb\nh\n1\n1\nh\n0 1\n";
        assert!(matches!(DyUGraph::read_graph(Cursor::new(input)), Err(ImportError::InputMalformedError(_))));
        // bad weight
        let input = "h\n2\nh\na\nb\nh\nx\n1\nh\n0 1\n1 0\n";
        assert!(matches!(DyUGraph::read_graph(Cursor::new(input)), Err(ImportError::BadIntError(_))));
        // trailing data
        let input = "h\n2\nh\na\nb\nh\n1\n1\nh\n0 1\n1 0\n1 1\n";
        assert!(matches!(DyUGraph::read_graph(Cursor::new(input)), Err(ImportError::InputMalformedError(_))));
    }

    #[test]
    fn read_empty_graph_test() {
        let graph = DyUGraph::read_graph(Cursor::new("h\n0\nh\nh\nh\n")).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn max_degree_test() {
        // path 0-1-2-3, nodes 1 and 2 tie
        let graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.max_degree_node(), Some(1));
        let exclude: FxHashSet<usize> = vec![1].into_iter().collect();
        assert_eq!(graph.max_degree_node_not_in(&exclude), Some(2));
        let all: FxHashSet<usize> = (0..4).collect();
        assert_eq!(graph.max_degree_node_not_in(&all), None);
        assert_eq!(graph.max_x_degree_nodes(3), vec![1, 2, 0]);
        assert_eq!(graph.max_x_degree_nodes(10).len(), 4);
    }

    #[test]
    fn delete_test() {
        let mut graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let neighs = graph.delete_node(0).unwrap();
        assert_eq!(neighs.len(), 2);
        assert!(graph.delete_node(0).is_none());
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.degree(1), Some(1));
        graph.delete_nodes(&neighs);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![2]);
        assert_eq!(graph.degree(2), Some(0));
    }

    #[test]
    fn dominated_test() {
        let graph = DyUGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let good: FxHashSet<usize> = vec![1, 3].into_iter().collect();
        let bad: FxHashSet<usize> = vec![0, 4].into_iter().collect();
        let outside: FxHashSet<usize> = vec![1, 3, 7].into_iter().collect();
        assert!(graph.is_dominated_by(&good));
        assert!(!graph.is_dominated_by(&bad));
        assert!(!graph.is_dominated_by(&outside));
        assert!(DyUGraph::from_edges(0, &[]).is_dominated_by(&FxHashSet::default()));
    }

}
