//! Minimum Spanning Tree algorithms
//!
//! Implements Kruskal's algorithm for MST.

use super::common::{GraphView, WeightedEdge};
use super::union_find::UnionFind;

pub struct MSTResult {
    pub total_weight: f64,
    /// Accepted edges, in ascending weight order
    pub edges: Vec<WeightedEdge>,
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Treats graph as undirected (ignores edge direction).
/// If graph is disconnected, returns a minimum spanning forest.
/// Equal-weight edges keep their insertion order.
pub fn kruskal_mst(view: &GraphView) -> MSTResult {
    let mut sorted: Vec<WeightedEdge> = view.edges.clone();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(view.node_count);
    let mut mst_edges = Vec::with_capacity(view.node_count.saturating_sub(1));
    let mut total_weight = 0.0;

    for edge in sorted {
        // An edge inside one set would close a cycle
        if uf.union(edge.source, edge.target) {
            total_weight += edge.weight;
            mst_edges.push(edge);
        }
    }

    MSTResult {
        total_weight,
        edges: mst_edges,
    }
}
