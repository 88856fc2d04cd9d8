//! Identifiers of vertices and edges in a [`Network`](crate::Network).
//!
//! Both identifiers are dense integers. Vertex ids are assigned sequentially
//! from zero and never change, because the network does not support vertex
//! removal. Edge ids index the edge list and may be reassigned when another
//! edge is removed.

use std::fmt;

macro_rules! impl_id {
    ($name:ident, $prefix:literal) => {
        impl $name {
            /// Converts an `usize` into the corresponding id.
            pub const fn from_usize(index: usize) -> Self {
                Self(index)
            }

            /// Converts the id into the corresponding `usize`.
            pub const fn as_usize(&self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

/// Vertex (site) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(pub usize);

/// Edge (route) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EdgeId(pub usize);

impl_id!(VertexId, "v");
impl_id!(EdgeId, "e");
