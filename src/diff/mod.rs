mod align;
mod engine;
mod fingerprint;
mod moves;
mod ops;
mod options;
mod patch_operations;
mod rebase;
mod replace;
#[cfg(test)]
pub(crate) mod test_util;

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use options::{
    AlignmentStrategy, DEFAULT_OPTIMIZATION_ITERATIONS, DEFAULT_SEQUENCE_ALIGNMENT_MAX_LENGTH,
    DiffOptions,
};
pub use patch_operations::PatchOp;

use crate::path::Pointer;

/// An ordered list of operations. Every path is relative to the document as
/// it stands right before that operation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(Vec<PatchOp>);

impl Patch {
    pub fn new(operations: Vec<PatchOp>) -> Self {
        Patch(operations)
    }
}

impl Deref for Patch {
    type Target = Vec<PatchOp>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Patch {
    type Item = PatchOp;
    type IntoIter = std::vec::IntoIter<PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a PatchOp;
    type IntoIter = std::slice::Iter<'a, PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Computes a patch turning `left` into `right` with default options.
pub fn diff(left: &Value, right: &Value) -> Patch {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Computes a patch turning `left` into `right`.
///
/// The structural comparison is followed by alternating move and replace
/// passes, at most `options.optimization_iterations` rounds of them.
pub fn diff_with_options(left: &Value, right: &Value, options: &DiffOptions) -> Patch {
    let mut ops = Vec::new();
    let mut path_pos = Pointer::root();

    engine::diff_recursive(left, right, options, &mut path_pos, &mut ops);
    tracing::debug!(ops = ops.len(), "structural comparison done");

    for round in 0..options.optimization_iterations {
        let fused = moves::optimize(&mut ops);
        let replaced = replace::optimize(&mut ops, options);
        tracing::debug!(round, fused, replaced, ops = ops.len(), "optimization round");

        if fused == 0 && replaced == 0 {
            break;
        }
    }

    ops::execute(ops)
}
