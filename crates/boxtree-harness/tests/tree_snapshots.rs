//! Snapshot tests for rendered trees.
//!
//! Snapshots live in `tests/snapshots/`; run with `BLESS=1` to rewrite them.

use boxtree::prelude::*;
use boxtree_harness::sample::{ExprSource, sample};
use boxtree_harness::{MatchMode, assert_ansi_snapshot, assert_text_snapshot};

#[derive(Debug, Clone)]
struct Node {
    value: &'static str,
    kids: Vec<Node>,
}

fn leaf(value: &'static str) -> Node {
    Node {
        value,
        kids: Vec::new(),
    }
}

fn node(value: &'static str, kids: Vec<Node>) -> Node {
    Node { value, kids }
}

fn printer() -> PrettyTree<impl TreeSource<Node>> {
    PrettyTree::new(|n: &Node| n.kids.clone(), |n: &Node| n.value)
}

#[test]
fn parent_two_children() {
    let tree = node("A", vec![leaf("B"), node("C", vec![leaf("D")])]);
    assert_text_snapshot!("parent_two_children", &printer().render(&tree));
}

#[test]
fn bordered_multiline() {
    let tree = node("root", vec![leaf("L1\nL2"), leaf("x")]);
    let out = printer().with_border(true).render(&tree);
    assert_text_snapshot!("bordered_multiline", &out);
}

#[test]
fn red_leaf_escapes() {
    let out = printer().with_color(BoxColor::Red).render(&leaf("X"));
    assert_ansi_snapshot!("red_leaf", &out);
}

#[test]
fn expression_full() {
    let expr = sample();
    let out = PrettyTree::from_source(ExprSource).render(&&expr);
    assert_text_snapshot!("expression_full", &out);
}

#[test]
fn expression_depth_two() {
    let expr = sample();
    let out = PrettyTree::from_source(ExprSource)
        .with_max_depth(2usize)
        .render(&&expr);
    assert_text_snapshot!("expression_depth_two", &out);
}

#[test]
fn expression_ignores_color_in_text_mode() {
    let expr = sample();
    let plain = PrettyTree::from_source(ExprSource)
        .with_color(BoxColor::None)
        .render(&&expr);
    assert_text_snapshot!("expression_full", &plain, MatchMode::TrimTrailing);
}
