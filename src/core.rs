pub mod cost;
pub mod error;
pub mod facts;
pub mod id;
pub mod site;

pub use cost::Cost;
pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use id::{EdgeId, VertexId};
pub use site::{Locate, Position, Site};
