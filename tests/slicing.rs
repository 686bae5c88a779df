//! Slicing integration tests.
//!
//! These tests drive the complete pipeline through the public API:
//! 1. Describe a function as statements with source ranges, definitions and references
//! 2. Build the complete CFG
//! 3. Build the program dependence graph
//! 4. Slice by node and by source position, and list the result in source order

use pdgslice::{
    analysis::{control_dependents, data_dependents, NodeOrdering, NoopObserver},
    cfg::{CfgBuilder, CompleteCfg, Node},
    pdg::{PdgConfig, PdgEdge, PositionTieBreak, ProgramDependenceGraph},
    utils::graph::{algorithms::compute_postdominators, NodeId},
    Error, Result,
};
use rustc_hash::FxHashSet;

/// Handles of the statements in [`sum_and_product`], named after what they do.
struct SumAndProduct {
    cfg: CompleteCfg,
    read_n: NodeId,
    init_i: NodeId,
    init_sum: NodeId,
    init_product: NodeId,
    loop_head: NodeId,
    add: NodeId,
    multiply: NodeId,
    increment: NodeId,
    write_sum: NodeId,
    write_product: NodeId,
}

fn stmt(line: usize, text: &str, defs: &[&str], refs: &[&str]) -> Node {
    Node::statement(line, 1, line, text.len())
        .with_definitions(defs.iter().copied())
        .with_references(refs.iter().copied())
        .with_text(text)
}

/// ```text
///  1 read(n)
///  2 i = 1
///  3 sum = 0
///  4 product = 1
///  5 while i <= n {
///  6     sum = sum + i
///  7     product = product * i
///  8     i = i + 1
///  9 }
/// 10 write(sum)
/// 11 write(product)
/// ```
fn sum_and_product() -> Result<SumAndProduct> {
    let mut b = CfgBuilder::new();
    let start = b.add_node(Node::start());
    let read_n = b.add_node(stmt(1, "read(n)", &["n"], &[]));
    let init_i = b.add_node(stmt(2, "i = 1", &["i"], &[]));
    let init_sum = b.add_node(stmt(3, "sum = 0", &["sum"], &[]));
    let init_product = b.add_node(stmt(4, "product = 1", &["product"], &[]));
    let loop_head = b.add_node(
        Node::statement(5, 1, 9, 1)
            .with_references(["i", "n"])
            .with_text("while i <= n"),
    );
    let add = b.add_node(
        Node::statement(6, 5, 6, 18)
            .with_definitions(["sum"])
            .with_references(["sum", "i"])
            .with_text("sum = sum + i"),
    );
    let multiply = b.add_node(
        Node::statement(7, 5, 7, 26)
            .with_definitions(["product"])
            .with_references(["product", "i"])
            .with_text("product = product * i"),
    );
    let increment = b.add_node(
        Node::statement(8, 5, 8, 14)
            .with_definitions(["i"])
            .with_references(["i"])
            .with_text("i = i + 1"),
    );
    let write_sum = b.add_node(stmt(10, "write(sum)", &[], &["sum"]));
    let write_product = b.add_node(stmt(11, "write(product)", &[], &["product"]));
    let end = b.add_node(Node::end());

    b.add_edge(start, read_n);
    b.add_edge(read_n, init_i);
    b.add_edge(init_i, init_sum);
    b.add_edge(init_sum, init_product);
    b.add_edge(init_product, loop_head);
    b.add_edge(loop_head, add);
    b.add_edge(add, multiply);
    b.add_edge(multiply, increment);
    b.add_edge(increment, loop_head);
    b.add_edge(loop_head, write_sum);
    b.add_edge(write_sum, write_product);
    b.add_edge(write_product, end);

    Ok(SumAndProduct {
        cfg: b.build()?,
        read_n,
        init_i,
        init_sum,
        init_product,
        loop_head,
        add,
        multiply,
        increment,
        write_sum,
        write_product,
    })
}

fn set(nodes: &[NodeId]) -> FxHashSet<NodeId> {
    nodes.iter().copied().collect()
}

#[test]
fn test_slice_on_product_excludes_sum() -> Result<()> {
    let p = sum_and_product()?;
    let pdg = ProgramDependenceGraph::build(&p.cfg)?;

    let slice = pdg.slice(p.write_product);
    assert_eq!(
        slice,
        set(&[
            p.read_n,
            p.init_i,
            p.init_product,
            p.loop_head,
            p.multiply,
            p.increment,
            p.write_product,
        ])
    );
    assert!(!slice.contains(&p.init_sum));
    assert!(!slice.contains(&p.add));
    assert!(!slice.contains(&p.write_sum));
    Ok(())
}

#[test]
fn test_slice_on_sum_excludes_product() -> Result<()> {
    let p = sum_and_product()?;
    let pdg = ProgramDependenceGraph::build(&p.cfg)?;

    assert_eq!(
        pdg.slice(p.write_sum),
        set(&[
            p.read_n,
            p.init_i,
            p.init_sum,
            p.loop_head,
            p.add,
            p.increment,
            p.write_sum,
        ])
    );
    Ok(())
}

#[test]
fn test_slice_at_position_lists_in_source_order() -> Result<()> {
    let p = sum_and_product()?;
    let pdg = ProgramDependenceGraph::build(&p.cfg)?;

    let slice = pdg.slice_at(11, 3).expect("line 11 holds write(product)");
    let by_position = NodeOrdering::by_source_position(&p.cfg);
    let listing = NodeOrdering::new(by_position.sort(slice)?)?.describe(&p.cfg)?;

    assert_eq!(
        listing,
        "read(n)\n\
         i = 1\n\
         product = 1\n\
         while i <= n\n\
         product = product * i\n\
         i = i + 1\n\
         write(product)\n"
    );
    Ok(())
}

#[test]
fn test_position_inside_loop_body() -> Result<()> {
    let p = sum_and_product()?;

    let innermost = ProgramDependenceGraph::build(&p.cfg)?;
    assert_eq!(innermost.node_at(7, 10), Some(p.multiply));
    // Line 9 only holds the closing brace of the loop
    assert_eq!(innermost.node_at(9, 1), Some(p.loop_head));
    assert_eq!(innermost.node_at(9, 2), None);
    assert!(innermost.slice_at(12, 1).is_none());

    let config = PdgConfig::new().with_position_tie_break(PositionTieBreak::First);
    let first = ProgramDependenceGraph::build_with(&p.cfg, config, &NoopObserver)?;
    assert_eq!(first.node_at(7, 10), Some(p.loop_head));
    Ok(())
}

#[test]
fn test_loop_dependences() -> Result<()> {
    let p = sum_and_product()?;
    let tree = compute_postdominators(&p.cfg)?;

    let controlled = control_dependents(p.loop_head, &p.cfg, &tree);
    assert_eq!(controlled, set(&[p.loop_head, p.add, p.multiply, p.increment]));
    assert!(control_dependents(p.add, &p.cfg, &tree).is_empty());

    assert_eq!(
        data_dependents(p.increment, &p.cfg),
        set(&[p.loop_head, p.add, p.multiply, p.increment])
    );
    assert_eq!(data_dependents(p.init_sum, &p.cfg), set(&[p.add, p.write_sum]));
    Ok(())
}

#[test]
fn test_pdg_edges_are_mirrored() -> Result<()> {
    let p = sum_and_product()?;
    let pdg = ProgramDependenceGraph::build(&p.cfg)?;

    for node in pdg.nodes() {
        for edge in pdg.dependents(node) {
            let back = match edge {
                PdgEdge::Data(_) => PdgEdge::Data(node),
                PdgEdge::Control(_) => PdgEdge::Control(node),
            };
            assert!(pdg.dependencies(edge.node()).any(|e| e == back));
        }
    }
    assert!(pdg.nodes().all(|node| node != p.cfg.end()));
    Ok(())
}

#[test]
fn test_straight_line_postdominators() -> Result<()> {
    // a -> b -> end
    let mut b = CfgBuilder::new();
    let start = b.add_node(Node::start());
    let first = b.add_node(Node::statement(1, 1, 1, 2));
    let second = b.add_node(Node::statement(2, 1, 2, 2));
    let end = b.add_node(Node::end());
    b.add_edge(start, first);
    b.add_edge(first, second);
    b.add_edge(second, end);
    let cfg = b.build()?;

    let tree = compute_postdominators(&cfg)?;
    assert_eq!(tree.immediate_postdominator(first), Some(second));
    assert_eq!(tree.immediate_postdominator(second), Some(end));
    assert_eq!(tree.immediate_postdominator(end), Some(end));
    Ok(())
}

#[test]
fn test_kill_through_pdg() -> Result<()> {
    // A: x = 1; B: x = 2; C: print(x)
    let mut b = CfgBuilder::new();
    let start = b.add_node(Node::start());
    let a = b.add_node(stmt(1, "x = 1", &["x"], &[]));
    let kill = b.add_node(stmt(2, "x = 2", &["x"], &[]));
    let c = b.add_node(stmt(3, "print(x)", &[], &["x"]));
    let end = b.add_node(Node::end());
    b.add_edge(start, a);
    b.add_edge(a, kill);
    b.add_edge(kill, c);
    b.add_edge(c, end);
    let cfg = b.build()?;

    let pdg = ProgramDependenceGraph::build(&cfg)?;
    assert_eq!(pdg.slice(c), set(&[kill, c]));
    assert_eq!(pdg.edge_count(), 1);
    Ok(())
}

#[test]
fn test_malformed_input_is_rejected() {
    let mut b = CfgBuilder::new();
    let start = b.add_node(Node::start());
    b.add_node(Node::end());
    b.add_edge(start, NodeId::new(3));
    assert!(matches!(b.build(), Err(Error::GraphError(_))));
}
