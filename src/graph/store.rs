//! In-memory graph aggregate
//!
//! Implements:
//! - Vertex index keyed by label (no two vertices share a label)
//! - Edge index keyed by ordered pair (directed) or sorted pair (undirected)
//! - Mode check: every edge matches the graph's directedness
//! - Property cache, cleared on every structural mutation

use super::edge::Edge;
use super::properties;
use super::property::{Propertied, PropertyCache, PropertyRegistry, Structure, StructureKind};
use super::types::{EdgeKey, VertexLabel, Weight, DEFAULT_WEIGHT};
use super::vertex::Vertex;
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    #[error("Edge {0} not found")]
    EdgeNotFound(String),

    #[error("Property {0} not found")]
    PropertyNotFound(String),

    #[error("Vertex {0} already exists")]
    VertexNotUnique(String),

    #[error("Edge {0} already exists")]
    EdgeNotUnique(String),

    #[error("Edge {edge} is {found} but the graph is {expected}")]
    BadEdgeType {
        edge: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Negative-weight cycle reachable from {start}")]
    NegativeWeightCycle { start: String },

    #[error("Predicate of property {property} returned {returned}, expected Boolean")]
    PredicateContractViolation { property: String, returned: String },

    #[error("Vertex {target} is not reachable from {start}")]
    Unreachable { start: String, target: String },
}

pub type GraphResult<T> = Result<T, GraphError>;

fn mode_name(directed: bool) -> &'static str {
    if directed {
        "directed"
    } else {
        "undirected"
    }
}

/// Edge description used by [`Graph::from_labels`]
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<L> {
    pub from: L,
    pub to: L,
    /// `None` means the default weight
    pub weight: Option<Weight>,
}

impl<L> From<(L, L)> for EdgeSpec<L> {
    fn from((from, to): (L, L)) -> Self {
        EdgeSpec { from, to, weight: None }
    }
}

impl<L> From<(L, L, Weight)> for EdgeSpec<L> {
    fn from((from, to, weight): (L, L, Weight)) -> Self {
        EdgeSpec {
            from,
            to,
            weight: Some(weight),
        }
    }
}

/// A directed or undirected graph
///
/// Uses insertion-ordered hash maps:
/// - vertices: label -> Vertex
/// - edges: EdgeKey -> Edge
///
/// Vertices are shared handles, so a graph is neither `Send` nor `Sync`.
/// One writer at a time; the property cache relies on it.
pub struct Graph<L: VertexLabel> {
    /// Fixed at construction
    directed: bool,

    vertices: IndexMap<L, Vertex<L>>,

    edges: IndexMap<EdgeKey<L>, Edge<L>>,

    /// Properties known by name
    registry: PropertyRegistry<Graph<L>>,

    /// Property name -> result, for the current epoch
    cache: PropertyCache,
}

impl<L: VertexLabel> Graph<L> {
    /// Empty graph with the built-in properties registered
    pub fn new(directed: bool) -> Self {
        Self::with_registry(directed, PropertyRegistry::graph_defaults())
    }

    /// Empty graph with a caller-supplied registry
    pub fn with_registry(directed: bool, registry: PropertyRegistry<Graph<L>>) -> Self {
        Graph {
            directed,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            registry,
            cache: PropertyCache::new(),
        }
    }

    /// Bulk-build from existing vertices and edges.
    ///
    /// Without an explicit mode the first edge decides; no edges and no mode
    /// means directed.
    pub fn from_sets<V, E>(vertices: V, edges: E, directed: Option<bool>) -> GraphResult<Self>
    where
        V: IntoIterator<Item = Vertex<L>>,
        E: IntoIterator<Item = Edge<L>>,
    {
        let edges: Vec<Edge<L>> = edges.into_iter().collect();
        let directed = directed
            .or_else(|| edges.first().map(Edge::is_directed))
            .unwrap_or(true);

        let mut graph = Self::new(directed);
        graph.add_vertices(vertices)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Build vertices and edges from raw labels and `(from, to[, weight])` tuples
    pub fn from_labels<V, E, S>(directed: bool, labels: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = L>,
        E: IntoIterator<Item = S>,
        S: Into<EdgeSpec<L>>,
    {
        let mut graph = Self::new(directed);
        graph.add_vertices(labels.into_iter().map(Vertex::new))?;

        for spec in edges {
            let spec = spec.into();
            let from = graph.find_vertex_by_label(&spec.from)?.clone();
            let to = graph.find_vertex_by_label(&spec.to)?.clone();
            let weight = spec.weight.unwrap_or(DEFAULT_WEIGHT);
            graph.add_edge(Edge::build(&from, &to, weight, directed)?)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// True if any edge carries a non-default weight
    pub fn is_weighted(&self) -> bool {
        self.edges.values().any(Edge::is_weighted)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> {
        self.vertices.values()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.values()
    }

    pub fn vertex_labels(&self) -> Vec<L> {
        self.vertices.keys().cloned().collect()
    }

    /// `(from, to)` label pairs in insertion order
    pub fn edge_labels(&self) -> Vec<(L, L)> {
        self.edges
            .values()
            .map(|e| (e.from().label().clone(), e.to().label().clone()))
            .collect()
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    pub fn contains_edge(&self, from: &L, to: &L) -> bool {
        self.edges.contains_key(&self.key_of(from, to))
    }

    /// Non-raising vertex lookup
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.get(label)
    }

    /// Non-raising edge lookup; label order is irrelevant when undirected
    pub fn edge(&self, from: &L, to: &L) -> Option<&Edge<L>> {
        self.edges.get(&self.key_of(from, to))
    }

    pub fn find_vertex_by_label(&self, label: &L) -> GraphResult<&Vertex<L>> {
        self.vertices
            .get(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))
    }

    /// All-or-nothing: the first missing label fails the whole lookup
    pub fn find_vertices_by_labels<'a, I>(&self, labels: I) -> GraphResult<Vec<&Vertex<L>>>
    where
        I: IntoIterator<Item = &'a L>,
    {
        labels
            .into_iter()
            .map(|label| self.find_vertex_by_label(label))
            .collect()
    }

    pub fn find_edge_by_labels(&self, from: &L, to: &L) -> GraphResult<&Edge<L>> {
        let key = self.key_of(from, to);
        self.edges
            .get(&key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))
    }

    /// Number of distinct neighbours reachable over one edge of this graph
    pub fn degree(&self, label: &L) -> GraphResult<usize> {
        let index = self
            .vertex_index(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))?;
        Ok(crate::algo::build_view(self).out_degree(index))
    }

    /// Add a vertex; its label must be new to this graph
    pub fn add_vertex(&mut self, vertex: Vertex<L>) -> GraphResult<()> {
        if self.vertices.contains_key(vertex.label()) {
            return Err(GraphError::VertexNotUnique(format!("{:?}", vertex.label())));
        }
        debug!(label = ?vertex.label(), "vertex added");
        self.vertices.insert(vertex.label().clone(), vertex);
        self.invalidate();
        Ok(())
    }

    /// Stops at the first failure; earlier vertices stay inserted
    pub fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = Vertex<L>>,
    {
        for vertex in vertices {
            self.add_vertex(vertex)?;
        }
        Ok(())
    }

    /// Add an edge between two member vertices.
    ///
    /// The edge's directedness must match the graph and its endpoint pair
    /// must not already be connected.
    pub fn add_edge(&mut self, edge: Edge<L>) -> GraphResult<()> {
        if edge.is_directed() != self.directed {
            return Err(GraphError::BadEdgeType {
                edge: format!("{:?}", edge),
                expected: mode_name(self.directed),
                found: mode_name(edge.is_directed()),
            });
        }
        for endpoint in [edge.from(), edge.to()] {
            if !self.vertices.contains_key(endpoint.label()) {
                return Err(GraphError::VertexNotFound(format!("{:?}", endpoint.label())));
            }
        }

        let key = edge.key();
        if self.edges.contains_key(&key) {
            return Err(GraphError::EdgeNotUnique(key.to_string()));
        }

        debug!(edge = ?edge, "edge added");
        self.edges.insert(key, edge);
        self.invalidate();
        Ok(())
    }

    /// Stops at the first failure; earlier edges stay inserted
    pub fn add_edges<I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = Edge<L>>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Remove a vertex and every edge incident to it
    pub fn remove_vertex(&mut self, vertex: &Vertex<L>) -> GraphResult<Vertex<L>> {
        let label = vertex.label();
        if !self.vertices.contains_key(label) {
            return Err(GraphError::VertexNotFound(format!("{:?}", label)));
        }

        let incident: Vec<EdgeKey<L>> = self
            .edges
            .keys()
            .filter(|key| key.touches(label))
            .cloned()
            .collect();
        for key in &incident {
            if let Some(edge) = self.edges.shift_remove(key) {
                edge.detach();
            }
        }

        let removed = self
            .vertices
            .shift_remove(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))?;
        debug!(label = ?label, incident_edges = incident.len(), "vertex removed");
        self.invalidate();
        Ok(removed)
    }

    pub fn remove_vertices<'a, I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = &'a Vertex<L>>,
    {
        for vertex in vertices {
            self.remove_vertex(vertex)?;
        }
        Ok(())
    }

    /// Remove an edge and drop it from its endpoints' adjacency
    pub fn remove_edge(&mut self, edge: &Edge<L>) -> GraphResult<Edge<L>> {
        let key = edge.key();
        if edge.is_directed() != self.directed {
            return Err(GraphError::EdgeNotFound(key.to_string()));
        }
        let removed = self
            .edges
            .shift_remove(&key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))?;
        removed.detach();
        debug!(edge = ?removed, "edge removed");
        self.invalidate();
        Ok(removed)
    }

    pub fn remove_edges<'a, I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = &'a Edge<L>>,
    {
        for edge in edges {
            self.remove_edge(edge)?;
        }
        Ok(())
    }

    /// Re-weight a member edge in place
    pub fn set_edge_weight(&mut self, from: &L, to: &L, weight: Weight) -> GraphResult<()> {
        let key = self.key_of(from, to);
        let edge = self
            .edges
            .get_mut(&key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))?;
        edge.set_weight(weight)?;
        debug!(edge = %key, weight, "edge weight changed");
        self.invalidate();
        Ok(())
    }

    pub fn is_bipartite(&self) -> GraphResult<bool> {
        self.satisfies(&properties::bipartiteness())
    }

    pub fn is_complete(&self) -> GraphResult<bool> {
        self.satisfies(&properties::completeness())
    }

    pub fn is_regular(&self) -> GraphResult<bool> {
        self.satisfies(&properties::regularity())
    }

    /// Always false; no planarity test exists
    pub fn is_planar(&self) -> GraphResult<bool> {
        self.satisfies(&properties::planarity())
    }

    /// Dense position of a vertex, as used by the algorithm views
    pub(crate) fn vertex_index(&self, label: &L) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&Vertex<L>> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }

    fn key_of(&self, from: &L, to: &L) -> EdgeKey<L> {
        EdgeKey::new(from.clone(), to.clone(), self.directed)
    }

    fn invalidate(&self) {
        if !self.cache.is_empty() {
            debug!(entries = self.cache.len(), "property cache cleared");
        }
        self.cache.clear();
    }
}

impl<L: VertexLabel> Structure for Graph<L> {
    const KIND: StructureKind = StructureKind::Graph;
}

impl<L: VertexLabel> Propertied for Graph<L> {
    fn property_cache(&self) -> &PropertyCache {
        &self.cache
    }

    fn property_registry(&self) -> &PropertyRegistry<Self> {
        &self.registry
    }
}

impl<L: VertexLabel> fmt::Debug for Graph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices.keys().collect::<Vec<_>>())
            .field("edges", &self.edges.values().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Property;
    use std::cell::Cell;
    use std::rc::Rc;

    fn triangle(directed: bool) -> Graph<&'static str> {
        Graph::from_labels(directed, ["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]).unwrap()
    }

    #[test]
    fn test_create_empty_graph() {
        let graph: Graph<i32> = Graph::new(true);
        assert!(graph.is_directed());
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_weighted());
    }

    #[test]
    fn test_add_vertex_uniqueness() {
        let mut graph = Graph::new(false);
        graph.add_vertex(Vertex::new("A")).unwrap();

        let result = graph.add_vertex(Vertex::new("A"));
        assert_eq!(result, Err(GraphError::VertexNotUnique("\"A\"".to_string())));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_validation() {
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        let outsider = Vertex::new(99);
        let mut graph = Graph::from_sets([a.clone(), b.clone()], Vec::new(), Some(true)).unwrap();

        // Mode mismatch
        let result = graph.add_edge(Edge::undirected(&a, &b));
        assert!(matches!(result, Err(GraphError::BadEdgeType { expected: "directed", .. })));

        // Endpoint outside the graph
        let result = graph.add_edge(Edge::directed(&a, &outsider));
        assert!(matches!(result, Err(GraphError::VertexNotFound(_))));

        graph.add_edge(Edge::directed(&a, &b)).unwrap();
        let result = graph.add_edge(Edge::directed(&a, &b));
        assert!(matches!(result, Err(GraphError::EdgeNotUnique(_))));

        // Opposite direction is a different edge
        graph.add_edge(Edge::directed(&b, &a)).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undirected_edge_uniqueness() {
        let mut graph = triangle(false);
        let a = graph.find_vertex_by_label(&"A").unwrap().clone();
        let b = graph.find_vertex_by_label(&"B").unwrap().clone();

        let result = graph.add_edge(Edge::undirected(&b, &a));
        assert!(matches!(result, Err(GraphError::EdgeNotUnique(_))));
    }

    #[test]
    fn test_from_sets_infers_mode() {
        let a = Vertex::new('a');
        let b = Vertex::new('b');
        let graph = Graph::from_sets([a.clone(), b.clone()], [Edge::undirected(&a, &b)], None).unwrap();
        assert!(!graph.is_directed());

        let graph: Graph<char> = Graph::from_sets(Vec::new(), Vec::new(), None).unwrap();
        assert!(graph.is_directed());
    }

    #[test]
    fn test_from_labels() {
        let graph = Graph::from_labels(
            true,
            [1, 2, 3],
            [EdgeSpec::from((1, 2, 2.5)), EdgeSpec::from((2, 3))],
        )
        .unwrap();

        assert_eq!(graph.vertex_labels(), vec![1, 2, 3]);
        assert_eq!(graph.edge_labels(), vec![(1, 2), (2, 3)]);
        assert!(graph.is_weighted());
        assert_eq!(graph.find_edge_by_labels(&1, &2).unwrap().weight(), 2.5);

        // Adjacency is populated on the graph's own vertex instances
        let one = graph.find_vertex_by_label(&1).unwrap();
        assert_eq!(one.distance_to(graph.vertex(&2).unwrap()).unwrap(), 2.5);

        let result = Graph::from_labels(true, [1, 2], [(1, 3)]);
        assert!(matches!(result, Err(GraphError::VertexNotFound(_))));

        let result = Graph::from_labels(true, [1, 2], [(1, 2, f64::NAN)]);
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn test_lookups() {
        let graph = triangle(false);

        assert!(graph.vertex(&"A").is_some());
        assert!(graph.vertex(&"Z").is_none());
        assert!(graph.edge(&"B", &"A").is_some());
        assert!(graph.contains_edge(&"A", &"C"));
        assert!(graph.find_edge_by_labels(&"C", &"B").is_ok());
        assert!(matches!(
            graph.find_vertex_by_label(&"Z"),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.find_vertices_by_labels([&"A", &"Z"]),
            Err(GraphError::VertexNotFound(_))
        ));
        assert_eq!(graph.find_vertices_by_labels([&"A", &"B"]).unwrap().len(), 2);

        let directed = triangle(true);
        assert!(directed.edge(&"A", &"B").is_some());
        assert!(directed.edge(&"B", &"A").is_none());
        assert!(matches!(
            directed.find_edge_by_labels(&"B", &"A"),
            Err(GraphError::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_remove_vertex_removes_incident_edges() {
        let mut graph =
            Graph::from_labels(false, [1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        let two = graph.find_vertex_by_label(&2).unwrap().clone();
        let one = graph.find_vertex_by_label(&1).unwrap().clone();

        let removed = graph.remove_vertex(&two).unwrap();
        assert_eq!(removed.label(), &2);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_labels(), vec![(3, 4), (4, 1)]);
        assert!(!one.is_adjacent_to(&two));

        assert!(matches!(
            graph.remove_vertex(&two),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle(true);
        let a = graph.find_vertex_by_label(&"A").unwrap().clone();
        let b = graph.find_vertex_by_label(&"B").unwrap().clone();
        let edge = graph.find_edge_by_labels(&"A", &"B").unwrap().clone();

        let removed = graph.remove_edge(&edge).unwrap();
        assert_eq!(removed, edge);
        assert_eq!(graph.edge_count(), 2);
        assert!(!a.is_adjacent_to(&b));

        assert!(matches!(graph.remove_edge(&edge), Err(GraphError::EdgeNotFound(_))));
    }

    #[test]
    fn test_set_edge_weight() {
        let mut graph = triangle(false);
        graph.set_edge_weight(&"B", &"A", 7.0).unwrap();

        assert_eq!(graph.edge(&"A", &"B").unwrap().weight(), 7.0);
        let b = graph.vertex(&"B").unwrap();
        assert_eq!(b.distance_to(graph.vertex(&"A").unwrap()).unwrap(), 7.0);
        assert!(graph.set_edge_weight(&"A", &"Z", 1.0).is_err());
    }

    #[test]
    fn test_degree() {
        let graph = Graph::from_labels(true, [1, 2, 3], [(1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(graph.degree(&1).unwrap(), 2);
        assert_eq!(graph.degree(&3).unwrap(), 0);
        assert!(graph.degree(&4).is_err());
    }

    #[test]
    fn test_mutation_clears_cache() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let has_edges = Property::new("has_edges", move |g: &Graph<i32>| {
            seen.set(seen.get() + 1);
            g.edge_count() > 0
        });

        let mut graph = Graph::new(true);
        graph.add_vertices(Vertex::from_labels([1, 2])).unwrap();
        assert!(!graph.satisfies(&has_edges).unwrap());
        assert!(!graph.satisfies(&has_edges).unwrap());
        assert_eq!(calls.get(), 1);

        let one = graph.vertex(&1).unwrap().clone();
        let two = graph.vertex(&2).unwrap().clone();
        graph.add_edge(Edge::directed(&one, &two)).unwrap();
        assert!(graph.properties().is_empty());
        assert!(graph.satisfies(&has_edges).unwrap());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::VertexNotFound("7".to_string());
        assert_eq!(err.to_string(), "Vertex 7 not found");

        let err = GraphError::BadEdgeType {
            edge: "e".to_string(),
            expected: "directed",
            found: "undirected",
        };
        assert_eq!(err.to_string(), "Edge e is undirected but the graph is directed");
    }
}
