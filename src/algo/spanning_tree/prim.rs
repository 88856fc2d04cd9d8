use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    core::{
        cost::Cost,
        facts,
        id::{EdgeId, VertexId},
    },
    storage::Network,
};

use super::{Error, SpanningTree, TreeEdge};

// Candidate edge in the queue. The sequence number makes equal costs pop in
// push order, so the selected edges do not depend on heap internals.
type Candidate = Reverse<(Cost, usize, VertexId, VertexId, EdgeId)>;

struct Frontier {
    queue: BinaryHeap<Candidate>,
    seq: usize,
}

impl Frontier {
    fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }

    // Pushes all edges of `vertex` leading outside of the tree.
    fn extend<V>(
        &mut self,
        network: &Network<V>,
        vertex: VertexId,
        in_tree: &FixedBitSet,
    ) -> Result<(), Error> {
        for (next, id) in network.incident_edges(vertex) {
            if in_tree.contains(next.as_usize()) {
                continue;
            }

            let cost = network
                .edge(id)
                .ok_or(Error::EdgeNotAvailable)?
                .cost()
                .ok_or(Error::MissingCost(id))?;

            self.queue.push(Reverse((cost, self.seq, vertex, next, id)));
            self.seq += 1;
        }

        Ok(())
    }
}

/// Lazy variant of Prim's algorithm.
///
/// Edges stay in the queue after one of their endpoints joins the tree by
/// another edge. Such stale edges are discarded when popped.
pub fn prim<V>(network: &Network<V>, start: VertexId) -> Result<SpanningTree, Error> {
    let vertex_count = network.vertex_count();

    if vertex_count == 0 {
        return Ok(SpanningTree::empty());
    }

    if !network.contains_vertex(start) {
        return Err(Error::VertexAbsent(start));
    }

    let mut in_tree = FixedBitSet::with_capacity(vertex_count);
    let mut frontier = Frontier::new();

    let mut vertices = vec![start];
    let mut edges = Vec::with_capacity(facts::spanning_tree_edge_count(vertex_count));
    let mut total_cost = Cost::ZERO;
    let mut stale = 0usize;

    in_tree.insert(start.as_usize());
    frontier.extend(network, start, &in_tree)?;

    while vertices.len() < vertex_count {
        let Some(Reverse((cost, _, from, to, id))) = frontier.queue.pop() else {
            break;
        };

        if in_tree.contains(to.as_usize()) {
            trace!(edge = %id, from = %from, to = %to, "stale edge discarded");
            stale += 1;
            continue;
        }

        edges.push(TreeEdge { id, from, to, cost });
        total_cost += cost;

        in_tree.insert(to.as_usize());
        vertices.push(to);
        frontier.extend(network, to, &in_tree)?;
    }

    debug!(
        start = %start,
        accepted = edges.len(),
        stale,
        total_cost = %total_cost,
        "spanning tree built"
    );

    Ok(SpanningTree {
        start: Some(start),
        vertex_count,
        vertices,
        edges,
        total_cost,
    })
}
