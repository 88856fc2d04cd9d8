use crate::{algo::hops::HopDistances, core::id::VertexId, storage::Network};

use super::Connectivity;

/// Builder for [`Connectivity`].
pub struct ConnectivityBuilder<'a, V> {
    network: &'a Network<V>,
    origin: Option<VertexId>,
}

impl Connectivity {
    pub fn on<V>(network: &Network<V>) -> ConnectivityBuilder<'_, V> {
        ConnectivityBuilder {
            network,
            origin: None,
        }
    }
}

impl<'a, V> ConnectivityBuilder<'a, V> {
    /// Starts the analysis from the given vertex instead of the one with the
    /// lowest id.
    ///
    /// In a network that is not fully connected, the set of unreachable
    /// vertices depends on the origin.
    pub fn from(self, origin: VertexId) -> Self {
        Self {
            origin: Some(origin),
            ..self
        }
    }

    pub fn run(self) -> Connectivity {
        let vertex_count = self.network.vertex_count();

        let origin = match self.origin {
            Some(origin) => origin,
            None if vertex_count == 0 => {
                return Connectivity {
                    origin: None,
                    vertex_count,
                    reachable_count: 0,
                    unreachable: Vec::new(),
                };
            }
            None => VertexId::from_usize(0),
        };

        let reached = HopDistances::on(self.network).run(origin);

        let unreachable = self
            .network
            .vertex_ids()
            .filter(|vertex| !reached.contains(*vertex))
            .collect();

        Connectivity {
            origin: Some(origin),
            vertex_count,
            reachable_count: reached.len(),
            unreachable,
        }
    }
}
