use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{core::id::VertexId, storage::Network};

/// Hop distances and BFS tree of a single traversal.
#[derive(Debug, Default)]
pub(crate) struct Traversal {
    pub dist: FxHashMap<VertexId, usize>,
    pub pred: FxHashMap<VertexId, VertexId>,
    pub goal_reached: bool,
}

/// Level-order traversal from `source`.
///
/// A vertex is marked visited and gets its distance when it is enqueued, not
/// when it is expanded. Vertices are expanded in non-decreasing distance
/// order, so the first enqueuing always carries the minimum hop count.
///
/// Vertices at distance `max_hops` are not expanded. When `goal` is given,
/// the traversal stops as soon as the goal is dequeued.
pub(crate) fn bfs<V>(
    network: &Network<V>,
    source: VertexId,
    max_hops: Option<usize>,
    goal: Option<VertexId>,
) -> Traversal {
    let mut traversal = Traversal::default();

    if !network.contains_vertex(source) {
        return traversal;
    }

    let mut visited = FixedBitSet::with_capacity(network.vertex_count());
    let mut queue = VecDeque::new();

    visited.insert(source.as_usize());
    traversal.dist.insert(source, 0);
    queue.push_back((source, 0));

    while let Some((vertex, hops)) = queue.pop_front() {
        if goal == Some(vertex) {
            traversal.goal_reached = true;
            break;
        }

        if max_hops.is_some_and(|max_hops| hops >= max_hops) {
            continue;
        }

        for next in network.neighbors(vertex) {
            if visited.put(next.as_usize()) {
                continue;
            }

            traversal.dist.insert(next, hops + 1);
            traversal.pred.insert(next, vertex);
            queue.push_back((next, hops + 1));
        }
    }

    debug!(
        source = %source,
        visited = traversal.dist.len(),
        goal_reached = traversal.goal_reached,
        "breadth-first search finished"
    );

    traversal
}
