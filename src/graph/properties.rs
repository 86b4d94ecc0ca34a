//! Built-in graph properties
//!
//! Each constructor returns a fresh [`Property`]; results are memoized on the
//! graph they are evaluated against.

use super::property::{Property, PropertyRegistry};
use super::store::Graph;
use super::types::VertexLabel;
use crate::algo::build_view;
use discrete_graph_algorithms::two_colouring;
use tracing::debug;

pub const BIPARTITENESS: &str = "bipartiteness";
pub const COMPLETENESS: &str = "completeness";
pub const REGULARITY: &str = "regularity";
pub const PLANARITY: &str = "planarity";

/// A bipartite graph on `n` vertices has at most `n²/4` edges
pub fn exceeds_bipartite_density(vertex_count: usize, edge_count: usize) -> bool {
    edge_count > vertex_count * vertex_count / 4
}

/// Two-colourable with no edge inside a colour class
pub fn bipartiteness<L: VertexLabel>() -> Property<Graph<L>> {
    Property::new(BIPARTITENESS, is_bipartite::<L>)
}

/// Every ordered (directed) or unordered (undirected) pair is connected
pub fn completeness<L: VertexLabel>() -> Property<Graph<L>> {
    Property::new(COMPLETENESS, is_complete::<L>)
}

/// Every vertex has the same number of neighbours; false without vertices
pub fn regularity<L: VertexLabel>() -> Property<Graph<L>> {
    Property::new(REGULARITY, is_regular::<L>)
}

/// Placeholder; evaluates to false for every graph
pub fn planarity<L: VertexLabel>() -> Property<Graph<L>> {
    Property::new(PLANARITY, |_: &Graph<L>| false)
}

impl<L: VertexLabel> PropertyRegistry<Graph<L>> {
    /// Registry holding the four built-in properties
    pub fn graph_defaults() -> Self {
        PropertyRegistry::new()
            .with(bipartiteness())
            .with(completeness())
            .with(regularity())
            .with(planarity())
    }
}

fn is_bipartite<L: VertexLabel>(graph: &Graph<L>) -> bool {
    if exceeds_bipartite_density(graph.vertex_count(), graph.edge_count()) {
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "too dense to be bipartite"
        );
        return false;
    }

    two_colouring(&build_view(graph)).is_some()
}

fn is_complete<L: VertexLabel>(graph: &Graph<L>) -> bool {
    let n = graph.vertex_count();
    let expected = if graph.is_directed() {
        n * n.saturating_sub(1)
    } else {
        n * n.saturating_sub(1) / 2
    };
    graph.edge_count() == expected
}

fn is_regular<L: VertexLabel>(graph: &Graph<L>) -> bool {
    let view = build_view(graph);
    let mut degrees = (0..view.node_count).map(|idx| view.out_degree(idx));
    match degrees.next() {
        Some(first) => degrees.all(|d| d == first),
        None => false,
    }
}
