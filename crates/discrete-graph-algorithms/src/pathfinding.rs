//! Pathfinding algorithms
//!
//! Single-source shortest paths: Dijkstra (strictly non-negative weights)
//! and Bellman-Ford (arbitrary weights, with negative-cycle detection).

use super::common::{GraphView, NodeId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

/// Returned by Bellman-Ford when an edge is still relaxable after `V - 1` passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeWeightCycle {
    /// Source of the edge that could still be relaxed
    pub source: NodeId,
    /// Target of the edge that could still be relaxed
    pub target: NodeId,
}

impl fmt::Display for NegativeWeightCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "negative-weight cycle reachable from source (edge {} -> {} still relaxes)",
            self.source, self.target
        )
    }
}

impl std::error::Error for NegativeWeightCycle {}

/// Single-source shortest-path tree
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// Tentative distance per node, `None` if unreachable
    pub distances: Vec<Option<f64>>,
    /// Predecessor on the shortest path, `None` for the source and unreachable nodes
    pub parents: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![None; node_count];
        distances[source] = Some(0.0);
        ShortestPaths {
            source,
            distances,
            parents: vec![None; node_count],
        }
    }

    /// Distance from the source to `target`, if reachable
    pub fn distance_to(&self, target: NodeId) -> Option<f64> {
        self.distances.get(target).copied().flatten()
    }

    /// Walk parent pointers back from `target` to the source.
    ///
    /// Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<PathResult> {
        let cost = self.distance_to(target)?;

        let mut path = vec![target];
        let mut curr = target;
        while let Some(parent) = self.parents[curr] {
            path.push(parent);
            curr = parent;
            // A parent chain longer than the node count can only come from a cycle
            if path.len() > self.distances.len() {
                return None;
            }
        }
        if curr != self.source {
            return None;
        }
        path.reverse();

        Some(PathResult {
            source: self.source,
            target,
            path,
            cost,
        })
    }

    fn relax(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        let Some(base) = self.distances[from] else {
            return false;
        };
        let alt = base + weight;
        match self.distances[to] {
            Some(current) if alt >= current => false,
            _ => {
                self.distances[to] = Some(alt);
                self.parents[to] = Some(from);
                true
            }
        }
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Callers must ensure weights are non-negative; negative edges are skipped.
/// Returns `None` if `source` is out of range.
pub fn dijkstra(view: &GraphView, source: NodeId) -> Option<ShortestPaths> {
    if source >= view.node_count {
        return None;
    }

    let mut tree = ShortestPaths::new(view.node_count, source);
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if cost > tree.distances[node_idx].unwrap_or(f64::INFINITY) {
            continue;
        }

        let edges = view.successors(node_idx);
        let weights = view.weights(node_idx);

        for (&next_idx, &weight) in edges.iter().zip(weights) {
            if weight < 0.0 {
                continue;
            }

            if tree.relax(node_idx, next_idx, weight) {
                heap.push(State { cost: cost + weight, node_idx: next_idx });
            }
        }
    }

    Some(tree)
}

/// Bellman-Ford Algorithm
///
/// Runs `V - 1` relaxation passes over every edge (both directions for
/// undirected views), then one more pass: any edge that still relaxes means a
/// negative-weight cycle is reachable from `source`.
/// Returns `None` if `source` is out of range.
pub fn bellman_ford(
    view: &GraphView,
    source: NodeId,
) -> Option<Result<ShortestPaths, NegativeWeightCycle>> {
    if source >= view.node_count {
        return None;
    }

    let mut tree = ShortestPaths::new(view.node_count, source);

    for _ in 1..view.node_count {
        let mut changed = false;
        for u in 0..view.node_count {
            for (&v, &weight) in view.successors(u).iter().zip(view.weights(u)) {
                changed |= tree.relax(u, v, weight);
            }
        }
        // Converged early
        if !changed {
            break;
        }
    }

    for u in 0..view.node_count {
        let Some(base) = tree.distances[u] else {
            continue;
        };
        for (&v, &weight) in view.successors(u).iter().zip(view.weights(u)) {
            let improvable = match tree.distances[v] {
                Some(current) => base + weight < current,
                None => true,
            };
            if improvable {
                return Some(Err(NegativeWeightCycle { source: u, target: v }));
            }
        }
    }

    Some(Ok(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::WeightedEdge;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn directed(node_count: usize, edges: &[(usize, usize, f64)]) -> GraphView {
        let edges = edges
            .iter()
            .map(|&(s, t, w)| WeightedEdge::new(s, t, w))
            .collect();
        GraphView::from_edges(node_count, true, edges)
    }

    #[test]
    fn test_dijkstra() {
        // 0->1 (10.0), 1->2 (5.0), 0->2 (50.0)
        let view = directed(3, &[(0, 1, 10.0), (0, 2, 50.0), (1, 2, 5.0)]);

        let result = dijkstra(&view, 0).unwrap().path_to(2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 15.0);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let view = directed(3, &[(0, 1, 1.0)]);
        let tree = dijkstra(&view, 0).unwrap();

        assert_eq!(tree.distance_to(2), None);
        assert!(tree.path_to(2).is_none());
    }

    #[test]
    fn test_path_to_source_is_trivial() {
        let view = directed(2, &[(0, 1, 1.0)]);
        let result = dijkstra(&view, 0).unwrap().path_to(0).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        // 0->1 (-3), 1->2 (1), 2->3 (1), 3->4 (1)
        let view = directed(5, &[(0, 1, -3.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);

        let tree = bellman_ford(&view, 0).unwrap().unwrap();
        let result = tree.path_to(4).unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.cost, -1.0);
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        // 0->1 (5), 1->2 (-1), 2->3 (-1), 3->1 (-1), 1->4 (1)
        let view = directed(
            5,
            &[(0, 1, 5.0), (1, 2, -1.0), (2, 3, -1.0), (3, 1, -1.0), (1, 4, 1.0)],
        );

        assert!(bellman_ford(&view, 0).unwrap().is_err());
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_negative_cycle() {
        // Cycle 2->3->2 is negative but not reachable from 0
        let view = directed(4, &[(0, 1, 2.0), (2, 3, -4.0), (3, 2, 1.0)]);

        let tree = bellman_ford(&view, 0).unwrap().unwrap();
        assert_eq!(tree.distance_to(1), Some(2.0));
        assert_eq!(tree.distance_to(2), None);
    }

    #[test]
    fn test_undirected_negative_edge_is_a_cycle() {
        let view = GraphView::from_edges(2, false, vec![WeightedEdge::new(0, 1, -1.0)]);
        assert!(bellman_ford(&view, 0).unwrap().is_err());
    }

    #[test]
    fn test_out_of_range_source() {
        let view = directed(1, &[]);
        assert!(dijkstra(&view, 3).is_none());
        assert!(bellman_ford(&view, 3).is_none());
    }

    #[test]
    fn test_dijkstra_and_bellman_ford_agree() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..25 {
            let node_count = rng.gen_range(2..12);
            let mut edges = Vec::new();
            for s in 0..node_count {
                for t in 0..node_count {
                    if s != t && rng.gen_bool(0.3) {
                        edges.push(WeightedEdge::new(s, t, rng.gen_range(0..20) as f64));
                    }
                }
            }
            let view = GraphView::from_edges(node_count, true, edges);

            for source in 0..node_count {
                let fast = dijkstra(&view, source).unwrap();
                let slow = bellman_ford(&view, source).unwrap().unwrap();
                assert_eq!(fast.distances, slow.distances);
            }
        }
    }
}
