use serde_json::Value;

use crate::path::Pointer;

use super::{Patch, PatchOp};

/// An entry of the diff buffer.
///
/// `Remove` keeps the removed value so the optimizers can pair it with an
/// equal `Add`. Fused entries become `Tombstone` instead of being taken out
/// of the buffer, so slot numbers stay valid for the rest of a pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Add { path: Pointer, value: Value },
    Remove { path: Pointer, value: Value },
    Replace { path: Pointer, value: Value },
    Move { from: Pointer, path: Pointer },
    Tombstone,
}

impl Op {
    pub(crate) fn add(path: Pointer, value: Value) -> Self {
        Op::Add { path, value }
    }

    pub(crate) fn remove(path: Pointer, value: Value) -> Self {
        Op::Remove { path, value }
    }

    pub(crate) fn replace(path: Pointer, value: Value) -> Self {
        Op::Replace { path, value }
    }

    pub(crate) fn move_op(from: Pointer, path: Pointer) -> Self {
        Op::Move { from, path }
    }

    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Op::Tombstone)
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Remove { value, .. } | Op::Replace { value, .. } => {
                Some(value)
            }
            Op::Move { .. } | Op::Tombstone => None,
        }
    }

    /// Rebuilds the op with every pointer passed through `f`.
    pub(crate) fn map_paths(&self, f: impl Fn(&Pointer) -> Option<Pointer>) -> Option<Op> {
        Some(match self {
            Op::Add { path, value } => Op::add(f(path)?, value.clone()),
            Op::Remove { path, value } => Op::remove(f(path)?, value.clone()),
            Op::Replace { path, value } => Op::replace(f(path)?, value.clone()),
            Op::Move { from, path } => Op::move_op(f(from)?, f(path)?),
            Op::Tombstone => Op::Tombstone,
        })
    }

    fn into_patch_op(self) -> Option<PatchOp> {
        match self {
            Op::Add { path, value } => Some(PatchOp::add(path, value)),
            Op::Remove { path, .. } => Some(PatchOp::remove(path)),
            Op::Replace { path, value } => Some(PatchOp::replace(path, value)),
            Op::Move { from, path } => Some(PatchOp::move_op(from, path)),
            Op::Tombstone => None,
        }
    }
}

/// Drops tombstones and renders the remaining entries as patch records.
pub(crate) fn execute(ops: Vec<Op>) -> Patch {
    Patch::new(ops.into_iter().filter_map(Op::into_patch_op).collect())
}
