//! Hop distances from a single source vertex, optionally bounded by a radius.
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::HopDistances, Network};
//!
//! let mut network = Network::<&str>::new();
//!
//! let a = network.add_vertex("A");
//! let b = network.add_vertex("B");
//! let c = network.add_vertex("C");
//!
//! network.add_link(a, b).unwrap();
//! network.add_link(b, c).unwrap();
//!
//! let all = HopDistances::on(&network).run(a);
//! assert_eq!(all.dist(c), Some(2));
//!
//! let close = HopDistances::on(&network).max_hops(1).run(a);
//! assert_eq!(close.dist(b), Some(1));
//! assert_eq!(close.dist(c), None);
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{core::id::VertexId, storage::Network};

use super::bfs::bfs;

/// Hop distances from a source vertex to every vertex reached.
///
/// Vertices that are unreachable or beyond the radius are absent.
#[derive(Debug, Clone)]
pub struct HopDistances {
    source: VertexId,
    dist: FxHashMap<VertexId, usize>,
}

impl HopDistances {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the number of hops between the source and the given vertex, or
    /// `None` if the vertex was not reached.
    pub fn dist(&self, to: VertexId) -> Option<usize> {
        self.dist.get(&to).copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.dist.contains_key(&vertex)
    }

    /// Number of vertices reached, including the source.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns `true` only when the source does not exist.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// The greatest distance among the reached vertices.
    pub fn max_dist(&self) -> Option<usize> {
        self.dist.values().copied().max()
    }

    /// Iterates the reached vertices and their distances in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.dist.iter().map(|(vertex, dist)| (*vertex, *dist))
    }

    /// Reached vertices in increasing id order.
    pub fn reachable(&self) -> Vec<VertexId> {
        let mut reachable = self.dist.keys().copied().collect::<Vec<_>>();
        reachable.sort_unstable();
        reachable
    }

    /// Reached vertices with their distances, nearest first. Vertices in the
    /// same distance are ordered by id.
    pub fn by_distance(&self) -> Vec<(VertexId, usize)> {
        let mut sorted = self.iter().collect::<Vec<_>>();
        sorted.sort_unstable_by_key(|(vertex, dist)| (*dist, *vertex));
        sorted
    }

    pub fn into_map(self) -> FxHashMap<VertexId, usize> {
        self.dist
    }
}

impl Index<VertexId> for HopDistances {
    type Output = usize;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.dist[&index]
    }
}

/// Builder for [`HopDistances`].
pub struct HopDistancesBuilder<'a, V> {
    network: &'a Network<V>,
    max_hops: Option<usize>,
}

impl HopDistances {
    pub fn on<V>(network: &Network<V>) -> HopDistancesBuilder<'_, V> {
        HopDistancesBuilder {
            network,
            max_hops: None,
        }
    }
}

impl<'a, V> HopDistancesBuilder<'a, V> {
    /// Limits the search to vertices at most `max_hops` hops from the source.
    pub fn max_hops(self, max_hops: usize) -> Self {
        Self {
            max_hops: Some(max_hops),
            ..self
        }
    }

    /// Same as [`max_hops`](HopDistancesBuilder::max_hops), with `None`
    /// meaning no limit.
    pub fn max_hops_opt(self, max_hops: Option<usize>) -> Self {
        Self { max_hops, ..self }
    }

    /// Runs the search. An unknown source yields an empty result.
    pub fn run(self, source: VertexId) -> HopDistances {
        let traversal = bfs(self.network, source, self.max_hops, None);

        HopDistances {
            source,
            dist: traversal.dist,
        }
    }
}

/// Shorthand for `HopDistances::on(network).max_hops_opt(max_hops).run(source)`.
pub fn hop_distances<V>(
    network: &Network<V>,
    source: VertexId,
    max_hops: Option<usize>,
) -> HopDistances {
    HopDistances::on(network).max_hops_opt(max_hops).run(source)
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

    // Distances by exhaustive enumeration of simple paths.
    fn brute_force_dist<V>(network: &Network<V>, source: VertexId, target: VertexId) -> Option<usize> {
        fn walk<V>(
            network: &Network<V>,
            vertex: VertexId,
            target: VertexId,
            on_path: &mut Vec<VertexId>,
            best: &mut Option<usize>,
        ) {
            if vertex == target {
                let hops = on_path.len() - 1;
                *best = Some(best.map_or(hops, |best| best.min(hops)));
                return;
            }

            for next in network.neighbors(vertex) {
                if !on_path.contains(&next) {
                    on_path.push(next);
                    walk(network, next, target, on_path, best);
                    on_path.pop();
                }
            }
        }

        let mut best = None;
        walk(network, source, target, &mut vec![source], &mut best);
        best
    }

    fn create_basic_network() -> Network<()> {
        let mut network = Network::new();

        let v0 = network.add_vertex(());
        let v1 = network.add_vertex(());
        let v2 = network.add_vertex(());
        let v3 = network.add_vertex(());
        let v4 = network.add_vertex(());
        let v5 = network.add_vertex(());

        network.add_link(v0, v1).unwrap();
        network.add_link(v0, v2).unwrap();
        network.add_link(v1, v2).unwrap();
        network.add_link(v1, v3).unwrap();
        network.add_link(v1, v4).unwrap();
        network.add_link(v2, v3).unwrap();
        network.add_link(v3, v4).unwrap();
        network.add_link(v4, v5).unwrap();

        network
    }

    #[test]
    fn basic() {
        let network = create_basic_network();
        let hops = HopDistances::on(&network).run(v(0));

        assert_eq!(hops.len(), 6);
        assert_eq!(hops.dist(v(0)), Some(0));
        assert_eq!(hops.dist(v(2)), Some(1));
        assert_eq!(hops.dist(v(3)), Some(2));
        assert_eq!(hops.dist(v(4)), Some(2));
        assert_eq!(hops[v(5)], 3);
        assert_eq!(hops.max_dist(), Some(3));
    }

    #[test]
    fn matches_brute_force() {
        let network = create_basic_network();

        for source in network.vertex_ids() {
            let hops = HopDistances::on(&network).run(source);

            for target in network.vertex_ids() {
                assert_eq!(
                    hops.dist(target),
                    brute_force_dist(&network, source, target)
                );
            }
        }
    }

    #[test]
    fn radius_cutoff() {
        let network = create_path::<()>(6);

        let hops = HopDistances::on(&network).max_hops(2).run(v(0));
        assert_eq!(hops.reachable(), vec![v(0), v(1), v(2)]);

        let hops = HopDistances::on(&network).max_hops(0).run(v(3));
        assert_eq!(hops.reachable(), vec![v(3)]);
    }

    #[test]
    fn unreachable_absent() {
        let network = create_two_triangles::<()>();
        let hops = hop_distances(&network, v(4), None);

        assert_eq!(hops.reachable(), vec![v(3), v(4), v(5)]);
        assert!(!hops.contains(v(0)));
    }

    #[test]
    fn unknown_source() {
        let network = create_complete::<()>(3);
        let hops = HopDistances::on(&network).run(v(9));

        assert!(hops.is_empty());
        assert_eq!(hops.source(), v(9));
    }

    #[test]
    fn empty_network() {
        let network = Network::<()>::new();
        assert!(HopDistances::on(&network).run(v(0)).is_empty());
    }

    #[test]
    fn by_distance_order() {
        let network = create_basic_network();
        let hops = HopDistances::on(&network).max_hops(1).run(v(1));

        assert_eq!(
            hops.by_distance(),
            vec![(v(1), 0), (v(0), 1), (v(2), 1), (v(3), 1), (v(4), 1)]
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_matches_brute_force(network in network_undirected().max_size(7), source: usize) {
            let n = network.vertex_count();
            prop_assume!(n > 0);

            let source = VertexId(source % n);
            let hops = HopDistances::on(&network).run(source);

            for target in network.vertex_ids() {
                prop_assert_eq!(hops.dist(target), brute_force_dist(&network, source, target));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_radius_cutoff(network in network_undirected(), source: usize, max_hops in 0usize..5) {
            let n = network.vertex_count();
            prop_assume!(n > 0);

            let source = VertexId(source % n);
            let full = HopDistances::on(&network).run(source);
            let bounded = HopDistances::on(&network).max_hops(max_hops).run(source);

            for (vertex, dist) in full.iter() {
                if dist <= max_hops {
                    prop_assert_eq!(bounded.dist(vertex), Some(dist));
                } else {
                    prop_assert_eq!(bounded.dist(vertex), None);
                }
            }

            prop_assert!(bounded.len() <= full.len());
        }
    }
}
