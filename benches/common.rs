#![allow(dead_code)]

use fastrand::Rng;
use hubnet::{Network, VertexId};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5eed_0f_5172e5;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in hubnet::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn hubnet_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Network<()> {
    let mut network = Network::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        network.add_vertex(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let _ = network.add_route(VertexId(u), VertexId(v), rng.f64() * 100.0);
    }

    network
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), f64> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f64() * 100.0);
    }

    graph
}
