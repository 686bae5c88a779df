#![no_main]

use libfuzzer_sys::fuzz_target;
use pdgslice::{
    cfg::{CfgBuilder, Node},
    pdg::ProgramDependenceGraph,
    utils::graph::NodeId,
};

const SYMBOLS: [&str; 4] = ["a", "b", "c", "d"];

// Input layout: node count, then per statement one def/ref mask byte, then edge pairs.
// Edges may create unreachable statements or statements that never reach end; the
// analyses must cope with both without panicking.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let statements = usize::from(count % 32);
    if rest.len() < statements {
        return;
    }
    let (masks, edges) = rest.split_at(statements);

    let mut builder = CfgBuilder::new();
    let start = builder.add_node(Node::start());
    for (line, &mask) in masks.iter().enumerate() {
        let defs = (0..4).filter(|bit| mask & (1 << bit) != 0).map(|bit| SYMBOLS[bit]);
        let refs = (0..4).filter(|bit| mask & (0x10 << bit) != 0).map(|bit| SYMBOLS[bit]);
        builder.add_node(
            Node::statement(line + 1, 1, line + 1, 8)
                .with_definitions(defs)
                .with_references(refs),
        );
    }
    let end = builder.add_node(Node::end());
    let nodes = statements + 2;

    builder.add_edge(start, NodeId::new(1 % nodes));
    for pair in edges.chunks_exact(2) {
        let from = NodeId::new(usize::from(pair[0]) % nodes);
        let to = NodeId::new(usize::from(pair[1]) % nodes);
        if from != end {
            builder.add_edge(from, to);
        }
    }

    let Ok(cfg) = builder.build() else {
        return;
    };
    if let Ok(pdg) = ProgramDependenceGraph::build(&cfg) {
        for node in pdg.nodes() {
            let slice = pdg.slice(node);
            assert!(slice.contains(&node));
            assert!(!slice.contains(&end));
        }
        let _ = pdg.slice_at(1, 1);
    }
});
