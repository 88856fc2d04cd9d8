#![no_main]

use libfuzzer_sys::fuzz_target;

use hubnet::{
    algo::{
        is_fully_connected, minimum_spanning_tree, shortest_path, spanning_tree, HopDistances,
    },
    infra::arbitrary::{Index, MutOpsSeq},
    Network, VertexId,
};

fuzz_target!(|input: (Index, Index, MutOpsSeq)| {
    let (source, target, ops) = input;
    let mut network = Network::<()>::new();

    for op in ops {
        op.apply(&mut network);
    }

    let n = network.vertex_count();
    let source = VertexId(source.get(n).unwrap_or_default());
    let target = VertexId(target.get(n).unwrap_or_default());

    let hops = HopDistances::on(&network).run(source);

    match shortest_path(&network, source, target) {
        Ok(Some(route)) => assert_eq!(Some(route.hops()), hops.dist(target)),
        Ok(None) => assert_eq!(hops.dist(target), None),
        Err(_) => assert_eq!(n, 0),
    }

    match minimum_spanning_tree(&network) {
        Ok(tree) => {
            if is_fully_connected(&network) {
                assert!(tree.spans_network());
            }
        }
        Err(spanning_tree::Error::MissingCost(_)) => {}
        Err(err) => panic!("{err}"),
    }
});
