//! Storage of the route network.
//!
//! The [`Network`] is an undirected adjacency list. Each vertex keeps an
//! ordered map from neighbor to the id of the connecting edge, and all edges
//! are stored once in an edge list together with their cost.
//!
//! |                  | **[Network]**  |
//! |------------------|----------------|
//! | add vertex       | _O*(1)_        |
//! | add edge         | _O(log d)_     |
//! | get neighbors    | _O(d)_         |
//! | adjacency check  | _O(log d)_     |
//! | remove edge      | _O(log d)_     |
//! | space            | _O(V + E)_     |
//! | multi edge       | NO             |
//! | self loop        | NO             |
//! | stable edge IDs  | NO             |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity

pub mod network;

pub use network::{Edge, Network};
