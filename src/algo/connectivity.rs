//! Detect whether every site of a network can reach every other site.
//!
//! In an undirected network, reachability is symmetric and transitive, so a
//! single traversal from any vertex decides whether the whole network is
//! connected. The vertices not reached by that traversal are reported as
//! unreachable.
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::Connectivity, Network};
//!
//! let mut network = Network::<&str>::new();
//!
//! let a = network.add_vertex("A");
//! let b = network.add_vertex("B");
//! let c = network.add_vertex("C");
//! let d = network.add_vertex("D");
//!
//! network.add_link(a, b).unwrap();
//! network.add_link(c, d).unwrap();
//!
//! let connectivity = Connectivity::on(&network).run();
//! assert!(!connectivity.is_fully_connected());
//! assert_eq!(connectivity.unreachable(), &[c, d]);
//! ```

use crate::{core::id::VertexId, storage::Network};

use super::bfs::bfs;

mod builder;

pub use builder::ConnectivityBuilder;

/// Result of a connectivity analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    origin: Option<VertexId>,
    vertex_count: usize,
    reachable_count: usize,
    unreachable: Vec<VertexId>,
}

impl Connectivity {
    /// Returns `true` if every vertex is reachable from the origin. An empty
    /// network is connected.
    pub fn is_fully_connected(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// Vertices not reachable from the origin, in increasing id order.
    pub fn unreachable(&self) -> &[VertexId] {
        &self.unreachable
    }

    /// Number of vertices reachable from the origin, including the origin.
    pub fn reachable_count(&self) -> usize {
        self.reachable_count
    }

    /// Vertex where the analysis started, `None` for an empty network.
    pub fn origin(&self) -> Option<VertexId> {
        self.origin
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

pub fn is_fully_connected<V>(network: &Network<V>) -> bool {
    Connectivity::on(network).run().is_fully_connected()
}

pub fn unreachable_vertices<V>(network: &Network<V>) -> Vec<VertexId> {
    Connectivity::on(network).run().unreachable
}

/// Returns `true` if there is a route between the two vertices. Unknown
/// vertices are not connected to anything, not even to themselves.
pub fn is_path_between<V>(network: &Network<V>, src: VertexId, dst: VertexId) -> bool {
    network.contains_vertex(dst) && bfs(network, src, None, Some(dst)).goal_reached
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::{
        proptest::network_undirected,
        testing::{create_complete, create_path, create_two_triangles},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn connected() {
        assert!(is_fully_connected(&create_complete::<()>(5)));
        assert!(is_fully_connected(&create_path::<()>(7)));
        assert!(unreachable_vertices(&create_path::<()>(7)).is_empty());
    }

    #[test]
    fn two_triangles() {
        let network = create_two_triangles::<()>();
        let connectivity = Connectivity::on(&network).run();

        assert!(!connectivity.is_fully_connected());
        assert_eq!(connectivity.origin(), Some(v(0)));
        assert_eq!(connectivity.reachable_count(), 3);
        assert_eq!(connectivity.unreachable(), &[v(3), v(4), v(5)]);
    }

    #[test]
    fn two_triangles_from_other_side() {
        let network = create_two_triangles::<()>();
        let connectivity = Connectivity::on(&network).from(v(4)).run();

        assert_eq!(connectivity.unreachable(), &[v(0), v(1), v(2)]);
        assert_eq!(connectivity.reachable_count(), 3);
    }

    #[test]
    fn disconnected_pairs() {
        let mut network = Network::new();
        let a = network.add_vertex("A");
        let b = network.add_vertex("B");
        let c = network.add_vertex("C");
        let d = network.add_vertex("D");

        network.add_link(a, b).unwrap();
        network.add_link(c, d).unwrap();

        assert!(!is_fully_connected(&network));
        assert_eq!(unreachable_vertices(&network), vec![c, d]);
        assert!(is_path_between(&network, b, a));
        assert!(!is_path_between(&network, a, d));
    }

    #[test]
    fn empty() {
        let network = Network::<()>::new();
        let connectivity = Connectivity::on(&network).run();

        assert!(connectivity.is_fully_connected());
        assert!(connectivity.unreachable().is_empty());
        assert_eq!(connectivity.origin(), None);
        assert_eq!(connectivity.reachable_count(), 0);
    }

    #[test]
    fn single_vertex() {
        let mut network = Network::new();
        let a = network.add_vertex(());

        assert!(is_fully_connected(&network));
        assert!(is_path_between(&network, a, a));
    }

    #[test]
    fn isolated_vertex() {
        let mut network = create_complete::<()>(3);
        network.add_vertex(());

        assert_eq!(unreachable_vertices(&network), vec![v(3)]);
    }

    #[test]
    fn unknown_origin() {
        let network = create_path::<()>(3);
        let connectivity = Connectivity::on(&network).from(v(10)).run();

        assert!(!connectivity.is_fully_connected());
        assert_eq!(connectivity.reachable_count(), 0);
        assert_eq!(connectivity.unreachable(), &[v(0), v(1), v(2)]);
    }

    #[test]
    fn path_between_unknown() {
        let network = create_path::<()>(3);

        assert!(!is_path_between(&network, v(0), v(3)));
        assert!(!is_path_between(&network, v(3), v(0)));
        assert!(!is_path_between(&network, v(3), v(3)));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_iff_path_between_all(network in network_undirected()) {
            let connected = is_fully_connected(&network);
            let all_pairs = network.vertex_ids().all(|u| {
                network.vertex_ids().all(|w| is_path_between(&network, u, w))
            });

            prop_assert_eq!(connected, all_pairs);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_reachable_and_unreachable_partition(network in network_undirected(), origin: usize) {
            let n = network.vertex_count();
            prop_assume!(n > 0);

            let origin = VertexId(origin % n);
            let connectivity = Connectivity::on(&network).from(origin).run();

            prop_assert_eq!(connectivity.reachable_count() + connectivity.unreachable().len(), n);

            for vertex in connectivity.unreachable() {
                prop_assert!(!is_path_between(&network, origin, *vertex));
            }
        }
    }
}
