//! Single-source shortest paths between two vertices
//!
//! Dijkstra when every weight is strictly positive, Bellman-Ford otherwise.

use super::build_view;
use crate::graph::{Edge, Graph, GraphError, GraphResult, Path, Vertex, VertexLabel};
use discrete_graph_algorithms::{bellman_ford, dijkstra, GraphView, NodeId, ShortestPaths};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which algorithm answers a shortest-path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShortestPathStrategy {
    /// Dijkstra if all weights are strictly positive, else Bellman-Ford
    #[default]
    Auto,
    /// Rejects graphs with negative weights
    Dijkstra,
    BellmanFord,
}

impl ShortestPathStrategy {
    /// Concrete algorithm for this view; never returns `Auto`
    pub fn resolve(self, view: &GraphView) -> Self {
        match self {
            ShortestPathStrategy::Auto if view.all_weights_positive() => {
                ShortestPathStrategy::Dijkstra
            }
            ShortestPathStrategy::Auto => ShortestPathStrategy::BellmanFord,
            other => other,
        }
    }
}

/// Shortest path configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathfindingConfig {
    pub strategy: ShortestPathStrategy,
}

impl PathfindingConfig {
    pub fn with_strategy(strategy: ShortestPathStrategy) -> Self {
        Self { strategy }
    }
}

impl<L: VertexLabel> Graph<L> {
    /// Minimum-weight path from `source` to `target`.
    ///
    /// Returns the empty path when both are the same vertex. Fails with
    /// `NegativeWeightCycle` if one is reachable from `source`, and with
    /// `Unreachable` if no path exists.
    pub fn shortest_path_between(&self, source: &Vertex<L>, target: &Vertex<L>) -> GraphResult<Path<L>> {
        self.shortest_path_with(source, target, &PathfindingConfig::default())
    }

    /// [`shortest_path_between`](Self::shortest_path_between) with an explicit strategy
    pub fn shortest_path_with(
        &self,
        source: &Vertex<L>,
        target: &Vertex<L>,
        config: &PathfindingConfig,
    ) -> GraphResult<Path<L>> {
        let source_idx = self.member_index(source.label())?;
        let target_idx = self.member_index(target.label())?;
        if source_idx == target_idx {
            return Ok(Path::empty());
        }

        let view = build_view(self);
        let strategy = config.strategy.resolve(&view);
        debug!(?strategy, source = ?source.label(), target = ?target.label(), "shortest path");

        let paths = self.run_strategy(&view, strategy, source_idx)?;
        let route = paths
            .path_to(target_idx)
            .ok_or_else(|| GraphError::Unreachable {
                start: format!("{:?}", source.label()),
                target: format!("{:?}", target.label()),
            })?;

        self.path_from_indices(&route.path)
    }

    fn run_strategy(
        &self,
        view: &GraphView,
        strategy: ShortestPathStrategy,
        source: NodeId,
    ) -> GraphResult<ShortestPaths> {
        let missing = || GraphError::VertexNotFound(format!("index {}", source));
        match strategy {
            ShortestPathStrategy::BellmanFord => bellman_ford(view, source)
                .ok_or_else(missing)?
                .map_err(|cycle| {
                    debug!(edge_source = cycle.source, edge_target = cycle.target, "negative cycle");
                    GraphError::NegativeWeightCycle {
                        start: self
                            .label_at(source)
                            .map(|l| format!("{:?}", l))
                            .unwrap_or_else(|_| source.to_string()),
                    }
                }),
            _ => {
                if !view.all_weights_non_negative() {
                    return Err(GraphError::InvalidArgument(
                        "Dijkstra requires non-negative edge weights".to_string(),
                    ));
                }
                dijkstra(view, source).ok_or_else(missing)
            }
        }
    }

    /// Rebuild a path from consecutive view indices
    fn path_from_indices(&self, nodes: &[NodeId]) -> GraphResult<Path<L>> {
        let mut edges: Vec<Edge<L>> = Vec::with_capacity(nodes.len().saturating_sub(1));
        for pair in nodes.windows(2) {
            let from = self.label_at(pair[0])?;
            let to = self.label_at(pair[1])?;
            edges.push(self.find_edge_by_labels(from, to)?.oriented_from(from));
        }
        Path::new(edges)
    }
}
