use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::storage::Network;

/// Random undirected networks with integral costs on every edge.
///
/// Integral costs keep sums of costs exact, so totals can be compared without
/// tolerance.
pub fn network_undirected() -> NetworkStrategy {
    NetworkStrategy::default()
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkStrategy {
    max_size: usize,
    max_cost: u32,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for NetworkStrategy {
    fn default() -> Self {
        Self {
            max_size: 64,
            max_cost: 100,
            density: 1.0,
        }
    }
}

impl NetworkStrategy {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn max_cost(self, max_cost: u32) -> Self {
        Self { max_cost, ..self }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.1)
    }
}

impl Strategy for NetworkStrategy {
    type Tree = NetworkValueTree;
    type Value = Network<()>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.max_size);
        let p = runner.rng().gen::<f32>() * self.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let mut edges = Vec::new();

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            while w >= v && v < n {
                w -= v;
                v += 1;
            }

            if v < n {
                let cost = runner.rng().gen_range(0..=self.max_cost);

                // Randomize the endpoint order so that both orientations are
                // exercised on insertion.
                let (s, t) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, cost));
            }
        }

        Ok(NetworkValueTree {
            vertex_count: n,
            edges,
            removed: FxHashSet::default(),
            next: 0,
            last: None,
        })
    }
}

/// Shrinks by removing edges one at a time. Vertices are kept so that ids stay
/// stable across shrinking steps.
#[derive(Debug, Clone)]
pub struct NetworkValueTree {
    vertex_count: usize,
    edges: Vec<(usize, usize, u32)>,
    removed: FxHashSet<usize>,
    next: usize,
    last: Option<usize>,
}

impl ValueTree for NetworkValueTree {
    type Value = Network<()>;

    fn current(&self) -> Self::Value {
        let mut network = Network::with_capacity(self.vertex_count, self.edges.len());

        for _ in 0..self.vertex_count {
            network.add_vertex(());
        }

        for (e, &(src, dst, cost)) in self.edges.iter().enumerate() {
            if !self.removed.contains(&e) {
                // The generator never produces loops nor multi edges.
                let _ = network.add_route(src.into(), dst.into(), cost as f64);
            }
        }

        network
    }

    fn simplify(&mut self) -> bool {
        while self.next < self.edges.len() {
            let e = self.next;
            self.next += 1;

            if self.removed.insert(e) {
                self.last = Some(e);
                return true;
            }
        }

        false
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(e) => {
                self.removed.remove(&e);
                true
            }
            None => false,
        }
    }
}
