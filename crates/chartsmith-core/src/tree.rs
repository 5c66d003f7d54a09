// File: crates/chartsmith-core/src/tree.rs
// Summary: Immutable path-addressed editing of rooted node forests.
// Notes:
// - Nodes are shared via `Rc` between forest versions: an edit shallow-copies
//   the ancestors along the path and leaves every other branch pointer-equal
//   to the input. Within any single forest value ownership stays strictly
//   parent -> child.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One node of a hierarchical document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub value: Option<f64>,
    /// Style token (typically a color); interpreted by the renderer.
    pub style: Option<String>,
    pub children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children.into_iter().map(Rc::new).collect();
        self
    }
}

/// An ordered list of root nodes, addressed by child-index paths.
pub type Forest = Vec<Rc<TreeNode>>;

/// Named outcome of a mutation. An out-of-range path is a no-op, not an
/// error: the returned forest is the input forest unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    PathNotFound,
}

/// A mutation result: the (possibly unchanged) forest plus its outcome.
#[derive(Clone, Debug)]
pub struct Mutation {
    pub forest: Forest,
    pub outcome: MutationOutcome,
}

impl Mutation {
    fn applied(forest: Forest) -> Self {
        Self {
            forest,
            outcome: MutationOutcome::Applied,
        }
    }

    fn not_found(forest: &Forest) -> Self {
        Self {
            forest: forest.clone(),
            outcome: MutationOutcome::PathNotFound,
        }
    }
}

/// Replace the node addressed by `path` with `f(node)`.
///
/// An empty path addresses forest root 0. Ancestors along the path are
/// shallow-copied; untouched siblings keep their identity (`Rc::ptr_eq`).
pub fn update_at_path(
    forest: &Forest,
    path: &[usize],
    f: impl FnOnce(&TreeNode) -> TreeNode,
) -> Mutation {
    let effective: &[usize] = if path.is_empty() { &[0] } else { path };
    match rewrite(forest, effective, f) {
        Some(new_forest) => Mutation::applied(new_forest),
        None => Mutation::not_found(forest),
    }
}

/// Append `child` to the node addressed by `path`, or to the forest root list
/// when `path` is empty.
pub fn insert_child_at_path(forest: &Forest, path: &[usize], child: TreeNode) -> Mutation {
    if path.is_empty() {
        let mut out = forest.clone();
        out.push(Rc::new(child));
        return Mutation::applied(out);
    }
    let appended = move |node: &TreeNode| {
        let mut copy = node.clone();
        copy.children.push(Rc::new(child));
        copy
    };
    match rewrite(forest, path, appended) {
        Some(new_forest) => Mutation::applied(new_forest),
        None => Mutation::not_found(forest),
    }
}

/// Rebuild the sibling list with the path target replaced. Returns `None` as
/// soon as any segment is out of range, leaving the caller's forest intact.
fn rewrite(
    nodes: &[Rc<TreeNode>],
    path: &[usize],
    f: impl FnOnce(&TreeNode) -> TreeNode,
) -> Option<Forest> {
    let (&idx, rest) = path.split_first()?;
    let node = nodes.get(idx)?;
    let replacement = if rest.is_empty() {
        Rc::new(f(node))
    } else {
        let children = rewrite(&node.children, rest, f)?;
        let mut copy = node.as_ref().clone();
        copy.children = children;
        Rc::new(copy)
    };
    // Rc clones only: every sibling stays pointer-identical to the input.
    let mut out: Forest = nodes.to_vec();
    out[idx] = replacement;
    Some(out)
}
