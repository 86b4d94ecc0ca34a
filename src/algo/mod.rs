//! Graph algorithms module
//!
//! Algorithms are implemented in the `discrete-graph-algorithms` crate over
//! dense integer indices. This module provides the integration/adapter layer:
//! it projects a [`Graph`] onto a [`GraphView`] and maps results back to
//! labels, vertices and edges.

pub mod mst;
pub mod pathfinding;
pub mod traversal;

use crate::graph::{Graph, VertexLabel};
use discrete_graph_algorithms::{GraphView, WeightedEdge};

pub use pathfinding::{PathfindingConfig, ShortestPathStrategy};
pub use traversal::{SearchEntry, SearchTree};

/// Build a GraphView from the graph for algorithm execution
///
/// Node `i` of the view is the `i`-th vertex in insertion order. Only the
/// graph's edge index is read; vertex adjacency is not consulted.
pub fn build_view<L: VertexLabel>(graph: &Graph<L>) -> GraphView {
    let edges = graph
        .edges()
        .filter_map(|edge| {
            let source = graph.vertex_index(edge.from().label())?;
            let target = graph.vertex_index(edge.to().label())?;
            Some(WeightedEdge::new(source, target, edge.weight()))
        })
        .collect();

    GraphView::from_edges(graph.vertex_count(), graph.is_directed(), edges)
}
