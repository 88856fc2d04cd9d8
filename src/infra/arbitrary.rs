use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{
        cost::Cost,
        error::AddEdgeError,
        id::{EdgeId, VertexId},
    },
    storage::{Edge, Network},
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn map(self, m: usize) -> Option<Index> {
        self.get(m).map(Index)
    }

    fn vertex(self, m: usize) -> VertexId {
        VertexId::from_usize(self.get(m).unwrap_or_default())
    }
}

/// Single mutation of a network. Vertex indices are taken modulo the vertex
/// count at the time of application.
#[derive(Debug, Arbitrary, Clone, PartialEq)]
pub enum MutOp {
    AddVertex,
    AddEdge(Index, Index, Option<u16>),
    RemoveEdge(Index, Index),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    AddVertex(VertexId),
    AddEdge(Result<EdgeId, AddEdgeError>),
    RemoveEdge(Option<Edge>),
    ClearEdges,
}

impl MutOp {
    pub fn apply<V: Default>(self, network: &mut Network<V>) -> MutOpResult {
        let n = network.vertex_count();

        match self {
            MutOp::AddVertex => MutOpResult::AddVertex(network.add_vertex(V::default())),
            MutOp::AddEdge(src, dst, cost) => {
                let cost = cost.and_then(|cost| Cost::new(f64::from(cost)));
                MutOpResult::AddEdge(network.add_edge(src.vertex(n), dst.vertex(n), cost))
            }
            MutOp::RemoveEdge(src, dst) => {
                MutOpResult::RemoveEdge(network.remove_edge(src.vertex(n), dst.vertex(n)))
            }
            MutOp::ClearEdges => {
                network.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MutOpsSeq {
    /// Applies the operations while printing them as code that can be pasted
    /// into a test.
    pub fn replay<V: Default>(self, network: &mut Network<V>) {
        println!("let mut network = Network::<()>::new();");
        println!();

        for op in self {
            let n = network.vertex_count();

            let op = match op {
                MutOp::AddEdge(src, dst, cost) => MutOp::AddEdge(
                    src.map(n).unwrap_or_default(),
                    dst.map(n).unwrap_or_default(),
                    cost,
                ),
                MutOp::RemoveEdge(src, dst) => MutOp::RemoveEdge(
                    src.map(n).unwrap_or_default(),
                    dst.map(n).unwrap_or_default(),
                ),
                op => op,
            };

            match &op {
                MutOp::AddVertex => println!("network.add_vertex(());"),
                MutOp::AddEdge(src, dst, Some(cost)) => {
                    println!("network.add_route(VertexId({}), VertexId({}), {cost}.0);", src.0, dst.0)
                }
                MutOp::AddEdge(src, dst, None) => {
                    println!("network.add_link(VertexId({}), VertexId({}));", src.0, dst.0)
                }
                MutOp::RemoveEdge(src, dst) => {
                    println!("network.remove_edge(VertexId({}), VertexId({}));", src.0, dst.0)
                }
                MutOp::ClearEdges => println!("network.clear_edges();"),
            }

            op.apply(network);
        }

        println!();
        println!("check_consistency(&network).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut network);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveEdge,
    ClearEdges,
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=500)?;
        let r = u.nice_f64()?;

        // Road networks are sparse, aim for at most a few edges per vertex.
        let m_target = ((n_target * 3) as f64 * r).round().max(1.0) as usize;

        let total = u.len();

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, rv, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddVertex => n += 1,
                MutOp::AddEdge(_, _, _) => m += 1,
                MutOp::RemoveEdge(_, _) => m = m.saturating_sub(1),
                MutOp::ClearEdges => m = 0,
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op(u: &mut Unstructured<'_>, rv: f64, re: f64, r: f64) -> arbitrary::Result<MutOp> {
    // Vertices are added mostly at the beginning, edges keep being added
    // during the whole process.
    let wv = non_linear_decrease(0.4 * rv + 0.6 * r);
    let we = non_linear_decrease(0.6 * re + 0.4 * r);

    u.choose_weighted(
        &[
            OpKind::AddVertex,
            OpKind::AddEdge,
            OpKind::RemoveEdge,
            OpKind::ClearEdges,
        ],
        &[wv, we, (1.0 - we) * 0.5, 0.01],
    )
    .and_then(|kind| match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex),
        OpKind::AddEdge => Ok(MutOp::AddEdge(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::RemoveEdge => Ok(MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::ClearEdges => Ok(MutOp::ClearEdges),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the accumulated sum.
        Ok(&choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
