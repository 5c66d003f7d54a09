// File: crates/chartsmith-core/tests/boundary.rs
// Purpose: Validate fault latching, reset, and per-instance isolation.

use std::rc::Rc;

use chartsmith_core::boundary::{BoundaryState, FailureBoundary};
use chartsmith_core::document::ChartDocument;
use chartsmith_core::options::RenderOptions;
use chartsmith_core::tree::{Forest, TreeNode};

fn forest() -> Forest {
    vec![Rc::new(TreeNode::leaf("only", 1.0))]
}

#[test]
fn healthy_boundary_passes_results_through() {
    let mut boundary = FailureBoundary::new();
    let spec = boundary.compile(&ChartDocument::new("Ok"), &RenderOptions::default());
    assert_eq!(spec.title, "Ok");
    assert_eq!(boundary.state(), BoundaryState::Healthy);
    assert!(boundary.last_fault().is_none());
}

#[test]
fn panic_latches_and_surfaces_fallback() {
    let mut boundary = FailureBoundary::new();
    let n: i32 = boundary.guard(|| -1, || panic!("exploded"));
    assert_eq!(n, -1);
    assert!(boundary.is_faulted());
    assert_eq!(boundary.last_fault(), Some("exploded"));

    // While faulted, even a well-behaved call gets the fallback.
    let spec = boundary.compile(&ChartDocument::new("Ok"), &RenderOptions::default());
    assert_eq!(spec.title, "Chart Error");
}

#[test]
fn reset_is_the_only_way_back_to_healthy() {
    let mut boundary = FailureBoundary::new();
    let _: () = boundary.guard(|| (), || panic!("once"));
    assert!(boundary.is_faulted());
    let _: i32 = boundary.guard(|| 0, || 5);
    assert!(boundary.is_faulted(), "boundary must not self-heal");

    boundary.reset();
    assert_eq!(boundary.state(), BoundaryState::Healthy);
    let n: i32 = boundary.guard(|| 0, || 5);
    assert_eq!(n, 5);
}

#[test]
fn faulted_mutation_is_a_no_op() {
    let mut boundary = FailureBoundary::new();
    let _: () = boundary.guard(|| (), || panic!("down"));
    let input = forest();
    let out = boundary.update_at_path(&input, &[0], |n| TreeNode {
        value: Some(9.0),
        ..n.clone()
    });
    assert!(Rc::ptr_eq(&out[0], &input[0]));
}

#[test]
fn path_miss_does_not_latch() {
    let mut boundary = FailureBoundary::new();
    let input = forest();
    let out = boundary.insert_child_at_path(&input, &[3], TreeNode::leaf("x", 0.0));
    assert!(Rc::ptr_eq(&out[0], &input[0]));
    assert!(!boundary.is_faulted());
}

#[test]
fn boundaries_are_isolated_per_instance() {
    let mut left = FailureBoundary::new();
    let mut right = FailureBoundary::new();
    let _: () = left.guard(|| (), || panic!("left only"));
    assert!(left.is_faulted());
    assert!(!right.is_faulted());

    let spec = right.compile(&ChartDocument::new("Sibling"), &RenderOptions::default());
    assert_eq!(spec.title, "Sibling");
}
