//! Core graph model
//!
//! This module implements the discrete graph data model with:
//! - Vertices identified by label, carrying an adjacency index
//! - Directed or undirected weighted edges that register adjacency on construction
//! - Validated paths (contiguous, no repeated edge)
//! - Named boolean properties memoized per graph

pub mod edge;
pub mod path;
pub mod properties;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use path::Path;
pub use property::{
    Propertied, Property, PropertyCache, PropertyRegistry, PropertyValue, Structure, StructureKind,
};
pub use store::{EdgeSpec, Graph, GraphError, GraphResult};
pub use types::{validate_weight, EdgeKey, VertexLabel, Weight, DEFAULT_WEIGHT};
pub use vertex::Vertex;
