//! Minimum spanning tree

use super::build_view;
use crate::graph::{Edge, Graph, GraphResult, Propertied, Vertex, VertexLabel};
use discrete_graph_algorithms::kruskal_mst;
use tracing::debug;

impl<L: VertexLabel> Graph<L> {
    /// Kruskal minimum spanning tree as a new graph of the same mode.
    ///
    /// Direction is ignored when choosing edges. A disconnected graph yields a
    /// spanning forest. The result holds fresh vertex instances, so building
    /// it leaves this graph's adjacency untouched.
    pub fn minimum_spanning_tree(&self) -> GraphResult<Graph<L>> {
        let view = build_view(self);
        let result = kruskal_mst(&view);
        debug!(
            vertices = view.node_count,
            accepted = result.edges.len(),
            total_weight = result.total_weight,
            "minimum spanning tree"
        );

        let vertices: Vec<Vertex<L>> = self
            .vertices()
            .map(|v| Vertex::new(v.label().clone()))
            .collect();

        let mut tree = Graph::with_registry(self.is_directed(), self.property_registry().clone());
        tree.add_vertices(vertices.iter().cloned())?;
        for edge in &result.edges {
            let from = &vertices[edge.source];
            let to = &vertices[edge.target];
            tree.add_edge(Edge::build(from, to, edge.weight, self.is_directed())?)?;
        }
        Ok(tree)
    }
}
