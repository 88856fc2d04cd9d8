use crate::{core::id::VertexId, storage::Network};

use super::{prim::prim, Error, SpanningTree};

/// Builder for [`SpanningTree`].
pub struct SpanningTreeBuilder<'a, V> {
    network: &'a Network<V>,
}

impl SpanningTree {
    pub fn on<V>(network: &Network<V>) -> SpanningTreeBuilder<'_, V> {
        SpanningTreeBuilder { network }
    }
}

impl<'a, V> SpanningTreeBuilder<'a, V> {
    /// Grows the tree from the given vertex.
    ///
    /// Only the vertices reachable from `start` are spanned. On an empty
    /// network, the result is an empty tree regardless of `start`.
    pub fn run(self, start: VertexId) -> Result<SpanningTree, Error> {
        prim(self.network, start)
    }

    /// Grows the tree from the vertex with the lowest id.
    pub fn run_any(self) -> Result<SpanningTree, Error> {
        prim(self.network, VertexId::from_usize(0))
    }
}
