//! Find the route with the fewest hops between two sites.
//!
//! Route costs are ignored, every edge counts as a single hop. When several
//! routes have the same number of hops, the one going through lower vertex
//! ids first is returned.
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::ShortestPath, Network};
//!
//! let mut network = Network::<&str>::new();
//!
//! let depot = network.add_vertex("Depot");
//! let north = network.add_vertex("North");
//! let south = network.add_vertex("South");
//! let harbor = network.add_vertex("Harbor");
//!
//! network.add_route(depot, north, 4.0).unwrap();
//! network.add_route(depot, south, 1.0).unwrap();
//! network.add_route(north, harbor, 4.0).unwrap();
//! network.add_route(south, harbor, 1.0).unwrap();
//!
//! let route = ShortestPath::on(&network).run(depot, harbor).unwrap().unwrap();
//!
//! // Costs do not matter, both routes have two hops.
//! assert_eq!(route.hops(), 2);
//! assert_eq!(route.vertices(), &[depot, north, harbor]);
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{id::VertexId, site::Locate},
    storage::Network,
};

use super::bfs::bfs;

/// Sequence of vertices from the source to the target, consecutive vertices
/// being adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vertices: Vec<VertexId>,
}

impl Route {
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the route, zero for a route from a vertex to itself.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }

    /// Sum of rough geographic distances between consecutive sites, in
    /// kilometers. Vertices missing in the network contribute nothing.
    pub fn rough_length<V: Locate>(&self, network: &Network<V>) -> f64 {
        self.vertices
            .windows(2)
            .filter_map(|pair| Some((network.vertex(pair[0])?, network.vertex(pair[1])?)))
            .map(|(u, v)| u.position().rough_distance(&v.position()))
            .sum()
    }

    fn reconstruct(pred: &FxHashMap<VertexId, VertexId>, target: VertexId) -> Self {
        let mut vertices = vec![target];
        let mut curr = target;

        while let Some(prev) = pred.get(&curr) {
            vertices.push(*prev);
            curr = *prev;
        }

        vertices.reverse();
        Self { vertices }
    }
}

impl Index<usize> for Route {
    type Output = VertexId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

impl IntoIterator for Route {
    type Item = VertexId;
    type IntoIter = std::vec::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

/// The error encountered during a [`ShortestPath`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Source or target does not exist in the network.
    #[error("vertex {0} does not exist")]
    VertexAbsent(VertexId),
}

/// Fewest-hops route search between two vertices.
pub struct ShortestPath<'a, V> {
    network: &'a Network<V>,
}

impl<'a, V> ShortestPath<'a, V> {
    pub fn on(network: &'a Network<V>) -> Self {
        Self { network }
    }

    /// Finds the route with the fewest hops from `source` to `target`.
    ///
    /// Returns `Ok(None)` if the target is not reachable from the source and
    /// an error if any of them does not exist. The route from a vertex to
    /// itself consists of that single vertex.
    pub fn run(self, source: VertexId, target: VertexId) -> Result<Option<Route>, Error> {
        for vertex in [source, target] {
            if !self.network.contains_vertex(vertex) {
                return Err(Error::VertexAbsent(vertex));
            }
        }

        let traversal = bfs(self.network, source, None, Some(target));

        if !traversal.goal_reached {
            return Ok(None);
        }

        Ok(Some(Route::reconstruct(&traversal.pred, target)))
    }
}

/// Shorthand for `ShortestPath::on(network).run(source, target)`.
pub fn shortest_path<V>(
    network: &Network<V>,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Route>, Error> {
    ShortestPath::on(network).run(source, target)
}
