//! Find the [minimum spanning tree] of the sites reachable from a start site.
//!
//! The tree is the cheapest set of routes that keeps all sites of the
//! component connected. It is grown by the lazy variant of Prim's algorithm,
//! which needs a cost on every edge it encounters.
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use hubnet::{algo::SpanningTree, Network};
//!
//! let mut network = Network::<&str>::new();
//!
//! let a = network.add_vertex("A");
//! let b = network.add_vertex("B");
//! let c = network.add_vertex("C");
//! let d = network.add_vertex("D");
//! let e = network.add_vertex("E");
//!
//! network.add_route(a, b, 1.0).unwrap();
//! network.add_route(b, c, 2.0).unwrap();
//! network.add_route(a, c, 5.0).unwrap();
//! network.add_route(c, d, 1.0).unwrap();
//! network.add_route(d, e, 1.0).unwrap();
//!
//! let tree = SpanningTree::on(&network).run(a).unwrap();
//!
//! assert_eq!(tree.total_cost(), 5.0);
//! assert!(tree.spans_network());
//!
//! for edge in tree.edges_by_cost() {
//!     println!("{} -- {} ({})", network[edge.from], network[edge.to], edge.cost);
//! }
//! ```

use thiserror::Error;

use crate::{
    core::{
        cost::Cost,
        facts,
        id::{EdgeId, VertexId},
    },
    storage::Network,
};

mod builder;
mod prim;

pub use builder::SpanningTreeBuilder;

/// Edge selected into a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub id: EdgeId,
    /// Endpoint that was in the tree when the edge was selected.
    pub from: VertexId,
    /// Endpoint that joined the tree by this edge.
    pub to: VertexId,
    pub cost: Cost,
}

impl TreeEdge {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }
}

/// Minimum spanning tree of the component containing the start vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    start: Option<VertexId>,
    vertex_count: usize,
    vertices: Vec<VertexId>,
    edges: Vec<TreeEdge>,
    total_cost: Cost,
}

impl SpanningTree {
    fn empty() -> Self {
        Self {
            start: None,
            vertex_count: 0,
            vertices: Vec::new(),
            edges: Vec::new(),
            total_cost: Cost::ZERO,
        }
    }

    /// Vertex the tree was grown from, `None` for an empty network.
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Edges of the tree in the order they were selected.
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Vertices of the tree in the order they joined it, starting with the
    /// start vertex.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns `true` if the tree connects all vertices of the network, that
    /// is, if it has exactly one edge less than the network has vertices.
    pub fn spans_network(&self) -> bool {
        self.edges.len() == facts::spanning_tree_edge_count(self.vertex_count)
    }

    /// Number of tree edges incident to the vertex.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|edge| edge.contains(vertex)).count()
    }

    /// Edges of the tree from the cheapest. Edges of equal cost keep the
    /// selection order.
    pub fn edges_by_cost(&self) -> Vec<TreeEdge> {
        let mut edges = self.edges.clone();
        edges.sort_by_key(|edge| edge.cost);
        edges
    }
}

/// The error encountered during a [`SpanningTree`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The start vertex does not exist in a non-empty network.
    #[error("vertex {0} does not exist")]
    VertexAbsent(VertexId),

    /// An edge reached by the search has no cost.
    #[error("edge {0} has no cost")]
    MissingCost(EdgeId),

    /// An edge not available.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// means that the network is in an inconsistent state.
    #[error("edge not available")]
    EdgeNotAvailable,
}

/// Minimum spanning tree grown from the vertex with the lowest id.
pub fn minimum_spanning_tree<V>(network: &Network<V>) -> Result<SpanningTree, Error> {
    SpanningTree::on(network).run_any()
}
