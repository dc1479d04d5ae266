mod add;
mod error;
mod move_op;
mod remove;
mod replace;

pub use add::add;
pub use error::PatchError;
pub use move_op::move_op;
pub use remove::remove;
pub use replace::replace;
use serde_json::Value;

use crate::diff::PatchOp;

/// Applies `patch` to a copy of `doc`, operation by operation.
///
/// Every operation is attempted; failures are collected and returned
/// together so a caller sees all broken operations at once.
pub fn apply(doc: &Value, patch: &[PatchOp]) -> Result<Value, PatchError> {
    let mut doc = doc.clone();
    let mut failures = Vec::new();
    for op in patch {
        let result = match op {
            PatchOp::Add { path, value } => add(&mut doc, path.clone(), value.clone()),
            PatchOp::Remove { path } => remove(&mut doc, path.clone()).map(|_| ()),
            PatchOp::Replace { path, value } => replace(&mut doc, path.clone(), value.clone()),
            PatchOp::Move { from, path } => move_op(&mut doc, from.clone(), path.clone()),
        };

        if let Err(e) = result {
            tracing::debug!(path = %op.path(), op = %op, error = %e, "patch operation failed");
            failures.push(e);
        }
    }

    if !failures.is_empty() {
        Err(PatchError::MultipleErrors(failures))
    } else {
        Ok(doc)
    }
}
