//! Discrete graph toolkit
//!
//! An in-memory graph model with classical algorithms and memoized
//! structural properties.
//!
//! # Architecture
//!
//! - [`graph`]: vertices, edges, paths, the [`Graph`] aggregate and its
//!   property layer
//! - [`algo`]: adapter over the `discrete-graph-algorithms` crate, exposing
//!   BFS, DFS, shortest paths and Kruskal's minimum spanning tree as
//!   methods on [`Graph`]
//!
//! # Concurrency
//!
//! Everything here is synchronous and single-threaded. Vertices are
//! reference-counted handles with interior mutability, so [`Vertex`],
//! [`Edge`] and [`Graph`] are neither `Send` nor `Sync`, and code that moves
//! a graph to another thread does not compile. One writer at a time; the
//! property cache assumes it.
//!
//! # Logging
//!
//! Mutations, cache invalidation and algorithm choices are reported through
//! `tracing` at `debug`/`trace` level. The library never installs a
//! subscriber.
//!
//! ## Example Usage
//!
//! ```rust
//! use discrete::graph::{Edge, Graph, Vertex};
//!
//! let mut graph = Graph::new(true);
//! let a = Vertex::new("a");
//! let b = Vertex::new("b");
//! graph.add_vertex(a.clone()).unwrap();
//! graph.add_vertex(b.clone()).unwrap();
//! graph.add_edge(Edge::directed_weighted(&a, &b, 2.0).unwrap()).unwrap();
//!
//! let path = graph.shortest_path_between(&a, &b).unwrap();
//! assert_eq!(path.total_weight(), 2.0);
//! assert!(graph.is_bipartite().unwrap());
//! ```

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{PathfindingConfig, SearchEntry, SearchTree, ShortestPathStrategy};
pub use graph::{
    Edge, EdgeSpec, Graph, GraphError, GraphResult, Path, Propertied, Property, PropertyRegistry,
    PropertyValue, Vertex, VertexLabel, Weight,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> String {
    format!("discrete v{}", VERSION)
}
