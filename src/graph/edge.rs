//! Edge implementation
//!
//! Building an edge is side-effecting: it registers `to` in the adjacency
//! index of `from` (and `from` in that of `to` when undirected).

use super::store::GraphResult;
use super::types::{validate_weight, EdgeKey, VertexLabel, Weight, DEFAULT_WEIGHT};
use super::vertex::Vertex;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A weighted connection between two vertices, directed or undirected
#[derive(Clone)]
pub struct Edge<L: VertexLabel> {
    from: Vertex<L>,
    to: Vertex<L>,
    weight: Weight,
    directed: bool,
}

impl<L: VertexLabel> Edge<L> {
    /// Directed edge `from -> to` with the default weight
    pub fn directed(from: &Vertex<L>, to: &Vertex<L>) -> Self {
        Self::connect_new(from, to, DEFAULT_WEIGHT, true)
    }

    /// Directed edge `from -> to`
    pub fn directed_weighted(from: &Vertex<L>, to: &Vertex<L>, weight: Weight) -> GraphResult<Self> {
        Self::build(from, to, weight, true)
    }

    /// Undirected edge between `first` and `second` with the default weight
    pub fn undirected(first: &Vertex<L>, second: &Vertex<L>) -> Self {
        Self::connect_new(first, second, DEFAULT_WEIGHT, false)
    }

    /// Undirected edge between `first` and `second`
    pub fn undirected_weighted(
        first: &Vertex<L>,
        second: &Vertex<L>,
        weight: Weight,
    ) -> GraphResult<Self> {
        Self::build(first, second, weight, false)
    }

    /// Validate the weight and build an edge of either kind
    pub fn build(from: &Vertex<L>, to: &Vertex<L>, weight: Weight, directed: bool) -> GraphResult<Self> {
        let weight = validate_weight(weight)?;
        Ok(Self::connect_new(from, to, weight, directed))
    }

    fn connect_new(from: &Vertex<L>, to: &Vertex<L>, weight: Weight, directed: bool) -> Self {
        let edge = Edge {
            from: from.clone(),
            to: to.clone(),
            weight,
            directed,
        };
        edge.attach();
        edge
    }

    pub fn from(&self) -> &Vertex<L> {
        &self.from
    }

    pub fn to(&self) -> &Vertex<L> {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// True iff the weight differs from the default
    pub fn is_weighted(&self) -> bool {
        self.weight != DEFAULT_WEIGHT
    }

    /// Change the weight, keeping endpoint adjacency in sync
    pub fn set_weight(&mut self, weight: Weight) -> GraphResult<()> {
        self.weight = validate_weight(weight)?;
        self.attach();
        Ok(())
    }

    /// Unordered pair of endpoint labels
    pub fn labels(&self) -> HashSet<L> {
        [self.from.label().clone(), self.to.label().clone()]
            .into_iter()
            .collect()
    }

    /// Unordered pair of endpoints
    pub fn vertices(&self) -> HashSet<Vertex<L>> {
        [self.from.clone(), self.to.clone()].into_iter().collect()
    }

    /// Key of this edge in a graph's edge index
    pub fn key(&self) -> EdgeKey<L> {
        EdgeKey::new(
            self.from.label().clone(),
            self.to.label().clone(),
            self.directed,
        )
    }

    /// Build the flipped edge `to -> from`, keeping the weight unless one is given
    pub fn reverse(&self, weight: Option<Weight>) -> GraphResult<Self> {
        Self::build(&self.to, &self.from, weight.unwrap_or(self.weight), self.directed)
    }

    /// Check if this edge connects two labels (in either direction)
    pub fn connects(&self, first: &L, second: &L) -> bool {
        (self.from.label() == first && self.to.label() == second)
            || (self.from.label() == second && self.to.label() == first)
    }

    /// Check if `label` is one of the endpoints
    pub fn is_incident_to(&self, label: &L) -> bool {
        self.from.label() == label || self.to.label() == label
    }

    /// Same edge read starting at `label`.
    ///
    /// Undirected edges are symmetric, so the endpoints may be swapped without
    /// touching adjacency; directed edges are returned unchanged.
    pub(crate) fn oriented_from(&self, label: &L) -> Self {
        if !self.directed && self.from.label() != label && self.to.label() == label {
            Edge {
                from: self.to.clone(),
                to: self.from.clone(),
                weight: self.weight,
                directed: false,
            }
        } else {
            self.clone()
        }
    }

    /// Register this edge in its endpoints' adjacency
    pub(crate) fn attach(&self) {
        self.from.add_adjacent(&self.to, self.weight);
        if !self.directed {
            self.to.add_adjacent(&self.from, self.weight);
        }
    }

    /// Remove this edge from its endpoints' adjacency
    pub(crate) fn detach(&self) {
        self.from.remove_adjacent(&self.to);
        if !self.directed {
            self.to.remove_adjacent(&self.from);
        }
    }
}

impl<L: VertexLabel> PartialEq for Edge<L> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.key() == other.key()
    }
}

impl<L: VertexLabel> Eq for Edge<L> {}

impl<L: VertexLabel> Hash for Edge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        self.key().hash(state);
    }
}

impl<L: VertexLabel> fmt::Debug for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(
            f,
            "Edge({:?} {} {:?}, {})",
            self.from.label(),
            arrow,
            self.to.label(),
            self.weight
        )
    }
}
