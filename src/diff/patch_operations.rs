use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::Pointer;

/// One RFC 6902 operation record as emitted by the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add {
        path: Pointer,
        value: serde_json::Value,
    },
    Remove {
        path: Pointer,
    },
    Replace {
        path: Pointer,
        value: serde_json::Value,
    },
    Move {
        path: Pointer,
        from: Pointer,
    },
}

impl PatchOp {
    pub fn replace(path: Pointer, value: serde_json::Value) -> Self {
        PatchOp::Replace { path, value }
    }

    pub fn remove(path: Pointer) -> Self {
        PatchOp::Remove { path }
    }

    pub fn add(path: Pointer, value: serde_json::Value) -> Self {
        PatchOp::Add { path, value }
    }

    pub fn move_op(from: Pointer, path: Pointer) -> Self {
        PatchOp::Move { path, from }
    }

    /// The location the operation writes to.
    pub fn path(&self) -> &Pointer {
        match self {
            PatchOp::Add { path, .. }
            | PatchOp::Remove { path }
            | PatchOp::Replace { path, .. }
            | PatchOp::Move { path, .. } => path,
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
