// File: crates/chartsmith-core/src/boundary.rs
// Summary: Per-instance failure boundary latching faults around pipeline calls.
// Notes:
// - One boundary per chart instance. A fault in one builder never changes a
//   sibling builder's state.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::compile;
use crate::document::ChartDocument;
use crate::options::RenderOptions;
use crate::spec::RenderSpec;
use crate::tree::{self, Forest, MutationOutcome, TreeNode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Faulted,
}

/// Fault-isolation wrapper for compile/mutate/import calls. Compile and the
/// mutations have convenience wrappers below; import calls go through
/// `guard` with the caller's own fallback.
///
/// Healthy -> Faulted when a guarded call panics past its own internal
/// guards; while Faulted every call surfaces its fallback result. The
/// boundary never self-heals: only an explicit `reset` returns it to Healthy.
#[derive(Debug, Default)]
pub struct FailureBoundary {
    state: BoundaryState,
    last_fault: Option<String>,
}

impl FailureBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn is_faulted(&self) -> bool {
        self.state == BoundaryState::Faulted
    }

    /// The message of the fault that latched the boundary, for diagnostics.
    pub fn last_fault(&self) -> Option<&str> {
        self.last_fault.as_deref()
    }

    /// Explicit retry signal: clears the latch and cached fault.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Healthy;
        self.last_fault = None;
    }

    /// Run `op`, surfacing `fallback()` instead when the boundary is already
    /// Faulted or when `op` panics. Panics latch the boundary.
    pub fn guard<T>(&mut self, fallback: impl FnOnce() -> T, op: impl FnOnce() -> T) -> T {
        if self.is_faulted() {
            return fallback();
        }
        match catch_unwind(AssertUnwindSafe(op)) {
            Ok(value) => value,
            Err(payload) => {
                let message = panic_message(payload);
                warn!(fault = %message, "boundary latched to faulted");
                self.state = BoundaryState::Faulted;
                self.last_fault = Some(message);
                fallback()
            }
        }
    }

    /// Guarded compile: the fallback spec on fault.
    pub fn compile(&mut self, document: &ChartDocument, options: &RenderOptions) -> RenderSpec {
        self.guard(RenderSpec::fallback, || compile::compile(document, options))
    }

    /// Guarded path update: the input forest unchanged on fault or miss.
    pub fn update_at_path(
        &mut self,
        forest: &Forest,
        path: &[usize],
        f: impl FnOnce(&TreeNode) -> TreeNode,
    ) -> Forest {
        self.guard(
            || forest.clone(),
            || {
                let m = tree::update_at_path(forest, path, f);
                if m.outcome == MutationOutcome::PathNotFound {
                    debug!(?path, "update addressed no node; forest unchanged");
                }
                m.forest
            },
        )
    }

    /// Guarded child insert: the input forest unchanged on fault or miss.
    pub fn insert_child_at_path(
        &mut self,
        forest: &Forest,
        path: &[usize],
        child: TreeNode,
    ) -> Forest {
        self.guard(
            || forest.clone(),
            || {
                let m = tree::insert_child_at_path(forest, path, child);
                if m.outcome == MutationOutcome::PathNotFound {
                    debug!(?path, "insert addressed no node; forest unchanged");
                }
                m.forest
            },
        )
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
