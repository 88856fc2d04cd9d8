//! Collection of simple utilities for various properties and calculations.

/// Returns the number of edges in an undirected [complete graph] with the
/// given vertex count.
///
/// [complete graph]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use hubnet::core::facts::complete_graph_edge_count;
///
/// assert_eq!(complete_graph_edge_count(5), 10);
/// assert_eq!(complete_graph_edge_count(0), 0);
/// ```
pub fn complete_graph_edge_count(vertex_count: usize) -> usize {
    vertex_count * vertex_count.saturating_sub(1) / 2
}

/// Returns the number of edges of a spanning tree over the given number of
/// vertices.
pub fn spanning_tree_edge_count(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(1)
}
