use std::{collections::BTreeMap, ops::Index};

use tracing::warn;

use crate::core::{
    cost::Cost,
    error::{AddEdgeError, AddEdgeErrorKind},
    facts,
    id::{EdgeId, VertexId},
    site::Site,
};

/// An undirected edge with an optional cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    endpoints: [VertexId; 2],
    cost: Option<Cost>,
}

impl Edge {
    /// Endpoints in the order they were given on insertion.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.endpoints[0], self.endpoints[1])
    }

    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.endpoints.contains(&vertex)
    }

    /// Returns the endpoint opposite to the given one, or `None` if the vertex
    /// is not an endpoint of this edge.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        match self.endpoints {
            [u, v] if u == vertex => Some(v),
            [u, v] if v == vertex => Some(u),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AdjVertex<V> {
    attr: V,
    adjacent: BTreeMap<VertexId, EdgeId>,
}

impl<V> AdjVertex<V> {
    fn new(attr: V) -> Self {
        Self {
            attr,
            adjacent: BTreeMap::new(),
        }
    }
}

/// Undirected network of sites connected by routes.
///
/// Vertex ids are assigned sequentially from zero. Neighbors are always
/// enumerated in increasing id order, which makes all traversals
/// deterministic.
///
/// # Examples
///
/// ```
/// use hubnet::Network;
///
/// let mut network = Network::<&str>::new();
///
/// let a = network.add_vertex("A");
/// let b = network.add_vertex("B");
///
/// network.add_link(a, b).unwrap();
///
/// // Inserting the same route again is rejected and changes nothing.
/// assert!(network.add_link(b, a).unwrap_err().is_duplicate());
/// assert_eq!(network.edge_count(), 1);
/// assert!(network.are_adjacent(b, a));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network<V = Site> {
    vertices: Vec<AdjVertex<V>>,
    edges: Vec<Edge>,
}

impl<V> Network<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Registers a new vertex and returns its id, which is the next one in
    /// sequence.
    pub fn add_vertex(&mut self, attr: V) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(AdjVertex::new(attr));
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Counts the edges from the adjacency sets, each undirected edge being
    /// present in exactly two of them.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|vertex| vertex.adjacent.len())
            .sum::<usize>()
            / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.attr)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices
            .get_mut(id.as_usize())
            .map(|vertex| &mut vertex.attr)
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::from_usize)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::from_usize(index), &vertex.attr))
    }

    /// Connects two vertices by an edge.
    ///
    /// The insertion is rejected if any of the vertices does not exist, if
    /// they are the same vertex or if they are already connected. A rejected
    /// insertion leaves the network untouched and is logged as a warning.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        cost: Option<Cost>,
    ) -> Result<EdgeId, AddEdgeError> {
        if !self.contains_vertex(src) {
            return Err(reject(src, dst, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(dst) {
            return Err(reject(src, dst, AddEdgeErrorKind::DestinationAbsent));
        }

        if src == dst {
            return Err(reject(src, dst, AddEdgeErrorKind::SelfLoop));
        }

        if self.are_adjacent(src, dst) {
            return Err(reject(src, dst, AddEdgeErrorKind::DuplicateEdge));
        }

        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(Edge {
            endpoints: [src, dst],
            cost,
        });

        self.vertices[src.as_usize()].adjacent.insert(dst, id);
        self.vertices[dst.as_usize()].adjacent.insert(src, id);

        Ok(id)
    }

    /// Connects two vertices by an edge with given cost.
    ///
    /// Besides the reasons of [`add_edge`](Network::add_edge), the insertion is
    /// rejected if the cost is negative, NaN or infinite.
    pub fn add_route(
        &mut self,
        src: VertexId,
        dst: VertexId,
        cost: f64,
    ) -> Result<EdgeId, AddEdgeError> {
        let cost = Cost::try_new(cost)
            .map_err(|err| reject(src, dst, AddEdgeErrorKind::InvalidCost(err)))?;
        self.add_edge(src, dst, Some(cost))
    }

    /// Connects two vertices by an edge without cost.
    pub fn add_link(&mut self, src: VertexId, dst: VertexId) -> Result<EdgeId, AddEdgeError> {
        self.add_edge(src, dst, None)
    }

    /// Removes the edge between two vertices.
    ///
    /// Returns `None` if any of the vertices does not exist or they are not
    /// connected. The id of the last edge in the network may change to the id
    /// of the removed edge.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Option<Edge> {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            return None;
        }

        let id = self.vertices[src.as_usize()].adjacent.remove(&dst)?;
        self.vertices[dst.as_usize()].adjacent.remove(&src);

        let edge = self.edges.swap_remove(id.as_usize());

        // If `swap_remove` actually moved an existing edge somewhere, we need
        // to fix its id in the adjacency of both its endpoints.
        if id.as_usize() < self.edges.len() {
            self.relocate_edge(EdgeId::from_usize(self.edges.len()), id);
        }

        Some(edge)
    }

    fn relocate_edge(&mut self, old_id: EdgeId, new_id: EdgeId) {
        let [u, v] = self.edges[new_id.as_usize()].endpoints;

        for (vertex, neighbor) in [(u, v), (v, u)] {
            if let Some(slot) = self.vertices[vertex.as_usize()].adjacent.get_mut(&neighbor) {
                debug_assert_eq!(*slot, old_id);
                *slot = new_id;
            }
        }
    }

    /// Removes all edges, keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();

        for vertex in self.vertices.iter_mut() {
            vertex.adjacent.clear();
        }
    }

    /// Returns neighbors of the vertex in increasing id order.
    ///
    /// An unknown vertex has no neighbors.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(id.as_usize())
            .into_iter()
            .flat_map(|vertex| vertex.adjacent.keys().copied())
    }

    /// Returns neighbors of the vertex together with the ids of connecting
    /// edges, in increasing neighbor id order.
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.vertices
            .get(id.as_usize())
            .into_iter()
            .flat_map(|vertex| vertex.adjacent.iter().map(|(v, e)| (*v, *e)))
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices
            .get(id.as_usize())
            .map_or(0, |vertex| vertex.adjacent.len())
    }

    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_between(u, v).is_some()
    }

    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.vertices
            .get(u.as_usize())
            .and_then(|vertex| vertex.adjacent.get(&v).copied())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::from_usize(index), edge))
    }

    pub fn average_degree(&self) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }

        2.0 * self.edge_count() as f64 / self.vertex_count() as f64
    }

    /// Ratio of the edge count to the edge count of the complete graph on the
    /// same vertices.
    pub fn density(&self) -> f64 {
        match facts::complete_graph_edge_count(self.vertex_count()) {
            0 => 0.0,
            complete => self.edge_count() as f64 / complete as f64,
        }
    }
}

fn reject(src: VertexId, dst: VertexId, kind: AddEdgeErrorKind) -> AddEdgeError {
    warn!(source = %src, destination = %dst, reason = %kind, "edge insertion rejected");
    AddEdgeError::new(src, dst, kind)
}

impl<V> Default for Network<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<VertexId> for Network<V> {
    type Output = V;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.vertices[index.as_usize()].attr
    }
}
