#![no_main]

use libfuzzer_sys::fuzz_target;

use hubnet::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Network,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut network = Network::<()>::new();

    for op in ops {
        op.apply(&mut network);
        check_consistency(&network)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
