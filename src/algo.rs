//! Algorithms over a [`Network`](crate::Network).
//!
//! Every algorithm is configured by a builder created with `Algo::on(&network)`
//! and executed by its `run` method. The network is borrowed for the whole
//! computation, so it cannot change while an algorithm runs.

mod bfs;
pub mod connectivity;
pub mod hops;
pub mod nearby;
pub mod shortest_path;
pub mod spanning_tree;

pub use connectivity::{is_fully_connected, is_path_between, unreachable_vertices, Connectivity};
pub use hops::{hop_distances, HopDistances};
pub use nearby::{fleet_coverage, nearby, Coverage, NearbySite};
pub use shortest_path::{shortest_path, Route, ShortestPath};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree, TreeEdge};
