//! Graph traversal
//!
//! Breadth-first and depth-first search trees rooted at a single node.

use super::common::{GraphView, NodeId};
use std::collections::VecDeque;

/// Position of a discovered node in a search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// Edge count from the root along the tree
    pub distance: usize,
    /// Discovering node, `None` for the root
    pub parent: Option<NodeId>,
}

/// Result of a traversal
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    /// Nodes in discovery order
    pub order: Vec<NodeId>,
    /// Index -> tree position, `None` when unreachable from the root
    pub nodes: Vec<Option<SearchNode>>,
}

impl SearchTree {
    fn rooted(node_count: usize, root: NodeId) -> Self {
        let mut nodes = vec![None; node_count];
        nodes[root] = Some(SearchNode { distance: 0, parent: None });
        SearchTree { order: vec![root], nodes }
    }

    fn discover(&mut self, node: NodeId, parent: NodeId) -> bool {
        if self.nodes[node].is_some() {
            return false;
        }
        let distance = self.nodes[parent].map(|p| p.distance + 1).unwrap_or(1);
        self.nodes[node] = Some(SearchNode { distance, parent: Some(parent) });
        self.order.push(node);
        true
    }

    /// Tree position of a node, if reached
    pub fn get(&self, node: NodeId) -> Option<&SearchNode> {
        self.nodes.get(node).and_then(|n| n.as_ref())
    }

    /// Number of reached nodes (including the root)
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Breadth-First Search tree (FIFO, first discovery wins)
///
/// Distances are shortest edge counts from `root`.
/// Returns `None` if `root` is out of range.
pub fn bfs_tree(view: &GraphView, root: NodeId) -> Option<SearchTree> {
    if root >= view.node_count {
        return None;
    }

    let mut tree = SearchTree::rooted(view.node_count, root);
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        for &next in view.successors(current) {
            if tree.discover(next, current) {
                queue.push_back(next);
            }
        }
    }

    Some(tree)
}

/// Depth-First Search tree (LIFO)
///
/// A node is placed in the tree when it is first seen as a neighbour of the
/// popped node, so distances are discovery depths along the chosen branch and
/// not necessarily shortest.
/// Returns `None` if `root` is out of range.
pub fn dfs_tree(view: &GraphView, root: NodeId) -> Option<SearchTree> {
    if root >= view.node_count {
        return None;
    }

    let mut tree = SearchTree::rooted(view.node_count, root);
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        for &next in view.successors(current) {
            if tree.discover(next, current) {
                stack.push(next);
            }
        }
    }

    Some(tree)
}

/// Two-colour every node by BFS parity over the underlying undirected graph.
///
/// Each component is coloured from its lowest-indexed node. Returns `None`
/// as soon as an edge joins two nodes of the same colour (self-loops
/// included).
pub fn two_colouring(view: &GraphView) -> Option<Vec<bool>> {
    let mut colour: Vec<Option<bool>> = vec![None; view.node_count];
    let mut queue = VecDeque::new();

    for start in 0..view.node_count {
        if colour[start].is_some() {
            continue;
        }
        colour[start] = Some(false);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let side = colour[current]?;
            let neighbours = view
                .successors(current)
                .iter()
                .chain(view.predecessors(current));
            for &next in neighbours {
                match colour[next] {
                    Some(other) if other == side => return None,
                    Some(_) => {}
                    None => {
                        colour[next] = Some(!side);
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    colour.into_iter().collect()
}
