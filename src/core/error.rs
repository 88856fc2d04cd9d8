use std::fmt;

use thiserror::Error;

use super::{cost::InvalidCost, id::VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("adding edge {src} -- {dst} failed: {kind}")]
pub struct AddEdgeError {
    pub src: VertexId,
    pub dst: VertexId,
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(src: VertexId, dst: VertexId, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }

    /// Returns `true` if the edge was rejected only because it already
    /// exists. Such a rejection leaves the network unchanged.
    pub fn is_duplicate(&self) -> bool {
        self.kind == AddEdgeErrorKind::DuplicateEdge
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    DuplicateEdge,
    InvalidCost(InvalidCost),
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddEdgeErrorKind::SourceAbsent => f.write_str("source does not exist"),
            AddEdgeErrorKind::DestinationAbsent => f.write_str("destination does not exist"),
            AddEdgeErrorKind::SelfLoop => f.write_str("an edge cannot connect a vertex to itself"),
            AddEdgeErrorKind::DuplicateEdge => f.write_str("the edge already exists"),
            AddEdgeErrorKind::InvalidCost(err) => write!(f, "{err}"),
        }
    }
}
