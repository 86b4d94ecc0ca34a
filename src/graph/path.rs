//! Walks through a graph

use super::edge::Edge;
use super::store::{GraphError, GraphResult};
use super::types::{VertexLabel, Weight};
use super::vertex::Vertex;
use indexmap::IndexSet;
use std::collections::HashSet;

/// A validated, contiguous sequence of pairwise-distinct edges
#[derive(Debug, Clone, PartialEq)]
pub struct Path<L: VertexLabel> {
    edges: Vec<Edge<L>>,
}

impl<L: VertexLabel> Path<L> {
    /// Validate and build a path.
    ///
    /// Every `edges[i].to` must equal `edges[i + 1].from`, and no edge may
    /// appear twice.
    pub fn new(edges: Vec<Edge<L>>) -> GraphResult<Self> {
        for (i, pair) in edges.windows(2).enumerate() {
            if pair[0].to() != pair[1].from() {
                return Err(GraphError::InvalidPath(format!(
                    "edge {} ends at {:?} but edge {} starts at {:?}",
                    i,
                    pair[0].to().label(),
                    i + 1,
                    pair[1].from().label()
                )));
            }
        }

        let mut seen = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if !seen.insert(edge) {
                return Err(GraphError::InvalidPath(format!(
                    "edge {:?} appears more than once",
                    edge
                )));
            }
        }

        Ok(Path { edges })
    }

    /// The path with no edges
    pub fn empty() -> Self {
        Path { edges: Vec::new() }
    }

    pub fn edges(&self) -> &[Edge<L>] {
        &self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct endpoints, in walk order
    pub fn vertices(&self) -> Vec<Vertex<L>> {
        let set: IndexSet<Vertex<L>> = self
            .edges
            .iter()
            .flat_map(|e| [e.from().clone(), e.to().clone()])
            .collect();
        set.into_iter().collect()
    }

    /// Distinct endpoint labels, in walk order
    pub fn labels(&self) -> Vec<L> {
        self.vertices().iter().map(|v| v.label().clone()).collect()
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(Edge::weight).sum()
    }

    pub fn is_directed(&self) -> bool {
        self.edges.iter().any(Edge::is_directed)
    }

    pub fn is_weighted(&self) -> bool {
        self.edges.iter().any(Edge::is_weighted)
    }

    /// True iff the walk ends where it started
    pub fn is_cyclical(&self) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => last.to() == first.from(),
            _ => false,
        }
    }
}

impl<L: VertexLabel> Default for Path<L> {
    fn default() -> Self {
        Self::empty()
    }
}
