//! Breadth-first and depth-first search over a graph

use super::build_view;
use crate::graph::{Graph, GraphError, GraphResult, Vertex, VertexLabel};
use discrete_graph_algorithms::{bfs_tree, dfs_tree, GraphView, NodeId, SearchTree as IndexTree};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Position of a reached vertex in a search tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry<L> {
    /// Edge count from the root along the tree
    pub distance: usize,
    /// Label of the discovering vertex, `None` for the root
    pub parent: Option<L>,
}

/// Label -> `{distance, parent}`, in discovery order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTree<L: VertexLabel> {
    entries: IndexMap<L, SearchEntry<L>>,
}

impl<L: VertexLabel> SearchTree<L> {
    fn empty() -> Self {
        SearchTree {
            entries: IndexMap::new(),
        }
    }

    /// The root, if the tree is not empty
    pub fn root(&self) -> Option<&L> {
        self.entries.keys().next()
    }

    pub fn get(&self, label: &L) -> Option<&SearchEntry<L>> {
        self.entries.get(label)
    }

    pub fn distance(&self, label: &L) -> Option<usize> {
        self.entries.get(label).map(|e| e.distance)
    }

    pub fn parent(&self, label: &L) -> Option<&L> {
        self.entries.get(label).and_then(|e| e.parent.as_ref())
    }

    pub fn contains(&self, label: &L) -> bool {
        self.entries.contains_key(label)
    }

    /// Reached labels in discovery order
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &SearchEntry<L>)> {
        self.entries.iter()
    }

    /// Number of reached vertices, root included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: VertexLabel> Graph<L> {
    /// Breadth-first search tree; distances are shortest edge counts.
    ///
    /// Without a root the first inserted vertex is used. An empty graph
    /// yields an empty tree.
    pub fn breadth_first_search(&self, root: Option<&Vertex<L>>) -> GraphResult<SearchTree<L>> {
        self.search(root, "bfs", bfs_tree)
    }

    /// Depth-first search tree; distances are discovery depths along the
    /// chosen branch and need not be shortest.
    pub fn depth_first_search(&self, root: Option<&Vertex<L>>) -> GraphResult<SearchTree<L>> {
        self.search(root, "dfs", dfs_tree)
    }

    fn search<F>(&self, root: Option<&Vertex<L>>, kind: &str, run: F) -> GraphResult<SearchTree<L>>
    where
        F: Fn(&GraphView, NodeId) -> Option<IndexTree>,
    {
        if self.is_empty() {
            return Ok(SearchTree::empty());
        }
        let root_idx = match root {
            Some(vertex) => self.member_index(vertex.label())?,
            None => 0,
        };

        let view = build_view(self);
        let tree = run(&view, root_idx)
            .ok_or_else(|| GraphError::VertexNotFound(format!("index {}", root_idx)))?;
        debug!(kind, root = root_idx, reached = tree.len(), "search finished");
        self.label_tree(&tree)
    }

    fn label_tree(&self, tree: &IndexTree) -> GraphResult<SearchTree<L>> {
        let mut entries = IndexMap::with_capacity(tree.len());
        for &idx in &tree.order {
            let Some(node) = tree.get(idx) else { continue };
            let parent = match node.parent {
                Some(p) => Some(self.label_at(p)?.clone()),
                None => None,
            };
            entries.insert(
                self.label_at(idx)?.clone(),
                SearchEntry {
                    distance: node.distance,
                    parent,
                },
            );
        }
        Ok(SearchTree { entries })
    }

    pub(crate) fn member_index(&self, label: &L) -> GraphResult<NodeId> {
        self.vertex_index(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))
    }

    pub(crate) fn label_at(&self, idx: NodeId) -> GraphResult<&L> {
        self.vertex_at(idx)
            .map(Vertex::label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("index {}", idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Graph<i32> {
        Graph::from_labels(
            true,
            [1, 2, 3, 4],
            [(1, 2), (2, 3), (3, 1), (1, 4), (4, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_distances_and_parents() {
        let graph = scenario();
        let root = graph.vertex(&1).cloned();
        let tree = graph.breadth_first_search(root.as_ref()).unwrap();

        assert_eq!(tree.root(), Some(&1));
        assert_eq!(tree.distance(&1), Some(0));
        assert_eq!(tree.distance(&2), Some(1));
        assert_eq!(tree.distance(&4), Some(1));
        assert_eq!(tree.distance(&3), Some(2));
        assert_eq!(tree.parent(&1), None);
        assert_eq!(tree.parent(&2), Some(&1));
        assert_eq!(tree.parent(&4), Some(&1));
        assert_eq!(tree.parent(&3), Some(&2));
        assert_eq!(tree.labels().copied().collect::<Vec<_>>(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_default_root_is_first_vertex() {
        let graph = scenario();
        let tree = graph.breadth_first_search(None).unwrap();
        assert_eq!(tree.root(), Some(&1));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_dfs_tree() {
        let graph = scenario();
        let tree = graph.depth_first_search(None).unwrap();

        assert_eq!(tree.len(), 4);
        for (label, entry) in tree.iter() {
            match &entry.parent {
                Some(parent) => {
                    assert_eq!(entry.distance, tree.distance(parent).unwrap() + 1, "{}", label)
                }
                None => assert_eq!(label, &1),
            }
        }
    }

    #[test]
    fn test_unreachable_vertices_are_left_out() {
        let graph = Graph::from_labels(true, ['a', 'b', 'c'], [('b', 'a')]).unwrap();
        let tree = graph.breadth_first_search(None).unwrap();

        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(&'b'));
    }

    #[test]
    fn test_undirected_search_follows_both_ways() {
        let graph = Graph::from_labels(false, ['a', 'b', 'c'], [('b', 'a'), ('c', 'b')]).unwrap();
        let tree = graph.breadth_first_search(None).unwrap();
        assert_eq!(tree.distance(&'c'), Some(2));
    }

    #[test]
    fn test_search_root_errors() {
        let graph = scenario();
        let stranger = Vertex::new(42);
        assert!(matches!(
            graph.breadth_first_search(Some(&stranger)),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.depth_first_search(Some(&stranger)),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_empty_graph_search() {
        let graph: Graph<i32> = Graph::new(false);
        assert!(graph.breadth_first_search(None).unwrap().is_empty());
        assert!(graph
            .depth_first_search(Some(&Vertex::new(1)))
            .unwrap()
            .is_empty());
    }
}
