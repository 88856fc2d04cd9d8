//! Queries about sites around a given site, measured in hops.
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::nearby, Network, Position, Site};
//!
//! let mut network = Network::new();
//!
//! let depot = network.add_vertex(Site::new("Depot", "Main St", Position::new(40.0, -75.0)));
//! let diesel = network.add_vertex(
//!     Site::new("Truck Stop", "I-95", Position::new(40.1, -75.1)).with_service("diesel"),
//! );
//! let gas = network.add_vertex(
//!     Site::new("Corner", "Elm St", Position::new(40.0, -75.2)).with_service("regular"),
//! );
//!
//! network.add_route(depot, diesel, 10.0).unwrap();
//! network.add_route(diesel, gas, 5.0).unwrap();
//!
//! let found = nearby(&network, depot, 2, |site| site.has_service("diesel"));
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].vertex, diesel);
//! assert_eq!(found[0].hops, 1);
//! ```

use tracing::warn;

use crate::{core::id::VertexId, storage::Network};

use super::hops::HopDistances;

/// Site found within a hop radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearbySite {
    pub vertex: VertexId,
    pub hops: usize,
}

/// Sites within `max_hops` hops from `source` whose attributes satisfy the
/// predicate, nearest first and by id among equally distant ones.
///
/// The source itself is never part of the result.
pub fn nearby<V, F>(network: &Network<V>, source: VertexId, max_hops: usize, predicate: F) -> Vec<NearbySite>
where
    F: Fn(&V) -> bool,
{
    HopDistances::on(network)
        .max_hops(max_hops)
        .run(source)
        .by_distance()
        .into_iter()
        .filter(|(vertex, _)| *vertex != source)
        .filter(|(vertex, _)| network.vertex(*vertex).is_some_and(&predicate))
        .map(|(vertex, hops)| NearbySite { vertex, hops })
        .collect()
}

/// Number of sites a vehicle can reach from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub vertex: VertexId,
    /// Sites within the radius, including the position itself.
    pub reachable: usize,
}

/// Places vehicles of a fleet at evenly spaced sites and reports how many
/// sites each of them covers within `radius` hops.
///
/// Vehicle `i` is placed at vertex `i * n / fleet_size` where `n` is the
/// number of sites. Only the first `min(fleet_size, n)` vehicles are placed.
/// When the fleet is larger than the network, some of them share a site.
pub fn fleet_coverage<V>(network: &Network<V>, fleet_size: usize, radius: usize) -> Vec<Coverage> {
    let n = network.vertex_count();

    if fleet_size > n {
        warn!(
            fleet_size,
            sites = n,
            "fleet is larger than the network, vehicles will share sites"
        );
    }

    (0..fleet_size.min(n))
        .map(|i| {
            let vertex = VertexId::from_usize(i * n / fleet_size);
            let reachable = HopDistances::on(network).max_hops(radius).run(vertex).len();

            Coverage { vertex, reachable }
        })
        .collect()
}
