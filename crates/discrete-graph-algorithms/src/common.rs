//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

/// Dense node index (0..node_count)
pub type NodeId = usize;

/// A single edge of the projected graph, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        WeightedEdge { source, target, weight }
    }
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Undirected edges are expanded into both directions in the CSR arrays but
/// appear once in `edges`.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Whether `edges` should be read as directed
    pub directed: bool,
    /// Original edge list, one entry per logical edge
    pub edges: Vec<WeightedEdge>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeId>,
    /// Edge weights: aligned with `out_targets`
    pub out_weights: Vec<f64>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<NodeId>,
}

impl GraphView {
    /// Build a view from an edge list. Edge order is preserved in the
    /// neighbour slices, so traversals visit neighbours in insertion order.
    pub fn from_edges(node_count: usize, directed: bool, edges: Vec<WeightedEdge>) -> Self {
        let mut outgoing: Vec<Vec<(NodeId, f64)>> = vec![Vec::new(); node_count];
        let mut incoming: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];

        for edge in &edges {
            outgoing[edge.source].push((edge.target, edge.weight));
            incoming[edge.target].push(edge.source);

            // Undirected self-loops are stored once
            if !directed && edge.source != edge.target {
                outgoing[edge.target].push((edge.source, edge.weight));
                incoming[edge.source].push(edge.target);
            }
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut out_weights = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        // Flatten Outgoing
        out_offsets.push(0);
        for neighbors in outgoing {
            for (target, weight) in neighbors {
                out_targets.push(target);
                out_weights.push(weight);
            }
            out_offsets.push(out_targets.len());
        }

        // Flatten Incoming
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            directed,
            edges,
            out_offsets,
            out_targets,
            out_weights,
            in_offsets,
            in_sources,
        }
    }

    /// Number of logical edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: NodeId) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: NodeId) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeId) -> &[NodeId] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeId) -> &[NodeId] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: NodeId) -> &[f64] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_weights[start..end]
    }

    /// True iff every edge weight is strictly positive (vacuously true without edges)
    pub fn all_weights_positive(&self) -> bool {
        self.edges.iter().all(|e| e.weight > 0.0)
    }

    /// True iff no edge weight is negative
    pub fn all_weights_non_negative(&self) -> bool {
        self.edges.iter().all(|e| e.weight >= 0.0)
    }
}
