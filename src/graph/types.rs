//! Core type definitions for the graph model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use super::store::{GraphError, GraphResult};

/// Numeric edge weight
pub type Weight = f64;

/// Weight assigned when none is given
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Anything usable as a vertex label.
///
/// Ordering is required so undirected edges get a canonical key. Labels are
/// owned data (`'static`) so stored predicates can close over graphs of them.
pub trait VertexLabel: Clone + Eq + Hash + Ord + fmt::Debug + 'static {}

impl<T> VertexLabel for T where T: Clone + Eq + Hash + Ord + fmt::Debug + 'static {}

/// Reject weights that are not usable in arithmetic (NaN, infinities)
pub fn validate_weight(weight: Weight) -> GraphResult<Weight> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(GraphError::InvalidArgument(format!(
            "edge weight must be a finite number, got {}",
            weight
        )))
    }
}

/// Canonical key of an edge inside a graph's edge index.
///
/// Directed edges keep `(from, to)`; undirected edges store the sorted pair,
/// so `{a, b}` and `{b, a}` collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey<L> {
    first: L,
    second: L,
}

impl<L: VertexLabel> EdgeKey<L> {
    pub fn new(from: L, to: L, directed: bool) -> Self {
        if directed || from <= to {
            EdgeKey { first: from, second: to }
        } else {
            EdgeKey { first: to, second: from }
        }
    }

    pub fn first(&self) -> &L {
        &self.first
    }

    pub fn second(&self) -> &L {
        &self.second
    }

    /// True if `label` is one of the two endpoints
    pub fn touches(&self, label: &L) -> bool {
        &self.first == label || &self.second == label
    }
}

impl<L: fmt::Debug> fmt::Display for EdgeKey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.first, self.second)
    }
}
