//! Route network of fuel and charging sites.
//!
//! Sites are vertices of an undirected [`Network`], direct routes between them
//! are edges with an optional [`Cost`]. On top of the network, the crate
//! answers two kinds of questions:
//!
//! * hop-based connectivity: [hop distances](algo::HopDistances) from a site
//!   within a radius, [shortest routes](algo::ShortestPath) between two sites
//!   and [partition detection](algo::Connectivity),
//! * the cheapest set of routes connecting every site, computed as a
//!   [minimum spanning tree](algo::SpanningTree).
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::SpanningTree, Network, Position, Site};
//!
//! let mut network = Network::new();
//!
//! let north = network.add_vertex(Site::new("North", "Exit 42", Position::new(38.90, -77.03)));
//! let west = network.add_vertex(Site::new("West", "Exit 57", Position::new(38.85, -77.28)));
//! let airport = network.add_vertex(Site::new("Airport", "Dulles", Position::new(38.94, -77.45)));
//!
//! network.add_route(north, west, 12.5).unwrap();
//! network.add_route(west, airport, 8.0).unwrap();
//! network.add_route(north, airport, 30.0).unwrap();
//!
//! let backbone = SpanningTree::on(&network).run(north).unwrap();
//! assert_eq!(backbone.total_cost(), 20.5);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;

pub use crate::core::{
    cost::Cost,
    id::{EdgeId, VertexId},
    site::{Locate, Position, Site},
};
pub use storage::Network;
