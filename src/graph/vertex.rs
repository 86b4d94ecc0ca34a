//! Vertex implementation
//!
//! A vertex is a shared handle: clones point at the same label and the same
//! adjacency index. Adjacency is only ever populated as a side effect of
//! building an [`Edge`](super::Edge) and trimmed when a graph removes one.

use super::store::{GraphError, GraphResult};
use super::types::{VertexLabel, Weight};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

struct VertexInner<L> {
    label: L,
    /// Neighbour label -> weight of the connecting edge
    adjacency: RefCell<IndexMap<L, Weight>>,
}

/// A labelled node
///
/// Two vertices are equal iff their labels are equal, regardless of
/// adjacency or of being the same instance.
#[derive(Clone)]
pub struct Vertex<L: VertexLabel> {
    inner: Rc<VertexInner<L>>,
}

impl<L: VertexLabel> Vertex<L> {
    /// Create a standalone vertex with an empty adjacency index
    pub fn new(label: L) -> Self {
        Vertex {
            inner: Rc::new(VertexInner {
                label,
                adjacency: RefCell::new(IndexMap::new()),
            }),
        }
    }

    /// Create one vertex per label, preserving order
    pub fn from_labels<I>(labels: I) -> Vec<Self>
    where
        I: IntoIterator<Item = L>,
    {
        labels.into_iter().map(Vertex::new).collect()
    }

    pub fn label(&self) -> &L {
        &self.inner.label
    }

    /// Snapshot of the adjacency index
    pub fn adjacency(&self) -> IndexMap<L, Weight> {
        self.inner.adjacency.borrow().clone()
    }

    /// Labels of adjacent vertices, in the order they were connected
    pub fn adjacent_labels(&self) -> Vec<L> {
        self.inner.adjacency.borrow().keys().cloned().collect()
    }

    /// Size of the adjacency index
    pub fn degree(&self) -> usize {
        self.inner.adjacency.borrow().len()
    }

    pub fn is_adjacent_to(&self, other: &Vertex<L>) -> bool {
        self.inner.adjacency.borrow().contains_key(other.label())
    }

    /// Weight of the edge towards `other`
    pub fn distance_to(&self, other: &Vertex<L>) -> GraphResult<Weight> {
        self.inner
            .adjacency
            .borrow()
            .get(other.label())
            .copied()
            .ok_or_else(|| {
                GraphError::VertexNotFound(format!(
                    "{:?} is not adjacent to {:?}",
                    other.label(),
                    self.label()
                ))
            })
    }

    /// True if both handles point at the same instance
    pub fn ptr_eq(&self, other: &Vertex<L>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn add_adjacent(&self, other: &Vertex<L>, weight: Weight) {
        self.inner
            .adjacency
            .borrow_mut()
            .insert(other.label().clone(), weight);
    }

    pub(crate) fn remove_adjacent(&self, other: &Vertex<L>) -> Option<Weight> {
        self.inner.adjacency.borrow_mut().shift_remove(other.label())
    }
}

impl<L: VertexLabel> PartialEq for Vertex<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl<L: VertexLabel> Eq for Vertex<L> {}

impl<L: VertexLabel> Hash for Vertex<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl<L: VertexLabel> fmt::Debug for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({:?})", self.label())
    }
}
