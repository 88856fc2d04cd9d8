use thiserror::Error;

use crate::{
    core::{facts, id::VertexId},
    storage::Network,
};

/// Creates a network with `vertex_count` vertices where every pair of vertices
/// is connected by an edge without cost.
pub fn create_complete<V: Default>(vertex_count: usize) -> Network<V> {
    let mut network = Network::with_capacity(
        vertex_count,
        facts::complete_graph_edge_count(vertex_count),
    );

    let vertices = (0..vertex_count)
        .map(|_| network.add_vertex(V::default()))
        .collect::<Vec<_>>();

    for (i, u) in vertices.iter().enumerate() {
        for v in &vertices[i + 1..] {
            // Fresh distinct vertices, the insertion cannot fail.
            let _ = network.add_link(*u, *v);
        }
    }

    network
}

/// Creates a path `0 -- 1 -- ... -- n-1` of edges without cost.
pub fn create_path<V: Default>(vertex_count: usize) -> Network<V> {
    let mut network = Network::with_capacity(
        vertex_count,
        facts::spanning_tree_edge_count(vertex_count),
    );

    let mut prev = None;

    for _ in 0..vertex_count {
        let curr = network.add_vertex(V::default());
        if let Some(prev) = prev {
            let _ = network.add_link(prev, curr);
        }
        prev = Some(curr);
    }

    network
}

/// Creates two disjoint triangles `{0, 1, 2}` and `{3, 4, 5}`.
pub fn create_two_triangles<V: Default>() -> Network<V> {
    let mut network = Network::with_capacity(6, 6);

    let v = (0..6)
        .map(|_| network.add_vertex(V::default()))
        .collect::<Vec<_>>();

    for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
        let _ = network.add_link(v[a], v[b]);
    }

    network
}

/// Creates a network from a vertex count and a list of weighted edges given as
/// vertex indices. Edges that the network rejects are skipped.
pub fn create_weighted<V: Default>(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Network<V> {
    let mut network = Network::with_capacity(vertex_count, edges.len());

    for _ in 0..vertex_count {
        network.add_vertex(V::default());
    }

    for &(u, v, cost) in edges {
        let _ = network.add_route(u.into(), v.into(), cost);
    }

    network
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("edge {0} is a self loop")]
    SelfLoop(usize),
    #[error("edge {0} has an endpoint that does not exist")]
    DanglingEndpoint(usize),
    #[error("edge {0} is not registered in the adjacency of both its endpoints")]
    EdgeNotAdjacent(usize),
    #[error("vertex {0} is adjacent to {1} but not the other way around")]
    Asymmetric(VertexId, VertexId),
    #[error("edge {0} has an invalid cost")]
    InvalidCost(usize),
}

/// Verifies all structural invariants of the network.
pub fn check_consistency<V>(network: &Network<V>) -> Result<(), ConsistencyCheckError> {
    let vertex_count = network.vertex_count();
    let vertices = network.vertices().count();

    if vertices != vertex_count {
        return Err(ConsistencyCheckError::VerticesVertexCountMismatch(
            vertices,
            vertex_count,
        ));
    }

    let edge_count = network.edge_count();
    let edges = network.edges().count();

    if edges != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges, edge_count,
        ));
    }

    for (id, edge) in network.edges() {
        let (u, v) = edge.endpoints();

        if u == v {
            return Err(ConsistencyCheckError::SelfLoop(id.as_usize()));
        }

        if !network.contains_vertex(u) || !network.contains_vertex(v) {
            return Err(ConsistencyCheckError::DanglingEndpoint(id.as_usize()));
        }

        if network.edge_between(u, v) != Some(id) || network.edge_between(v, u) != Some(id) {
            return Err(ConsistencyCheckError::EdgeNotAdjacent(id.as_usize()));
        }

        if edge.cost().is_some_and(|cost| !cost.get().is_finite() || cost.get() < 0.0) {
            return Err(ConsistencyCheckError::InvalidCost(id.as_usize()));
        }
    }

    for u in network.vertex_ids() {
        for v in network.neighbors(u) {
            if !network.are_adjacent(v, u) {
                return Err(ConsistencyCheckError::Asymmetric(u, v));
            }
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    let deg_sum = network
        .vertex_ids()
        .map(|id| network.degree(id))
        .sum::<usize>();

    if deg_sum != 2 * edges {
        return Err(ConsistencyCheckError::HandshakingLemma(deg_sum, 2 * edges));
    }

    Ok(())
}
