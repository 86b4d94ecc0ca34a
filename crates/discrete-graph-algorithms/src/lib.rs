pub mod common;
pub mod traversal;
pub mod pathfinding;
pub mod union_find;
pub mod mst;

pub use common::{GraphView, NodeId, WeightedEdge};
pub use traversal::{bfs_tree, dfs_tree, two_colouring, SearchNode, SearchTree};
pub use pathfinding::{bellman_ford, dijkstra, NegativeWeightCycle, PathResult, ShortestPaths};
pub use union_find::UnionFind;
pub use mst::{kruskal_mst, MSTResult};
