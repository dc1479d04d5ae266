use serde_json::Value;

use crate::{patch::error::PatchError, path::Pointer, resolve::resolve_mut};

/// Applies an RFC 6902 "replace": the target must exist and is overwritten
/// with `value`. An empty path replaces the whole document.
pub fn replace(doc: &mut Value, path: Pointer, value: Value) -> Result<(), PatchError> {
    let target = resolve_mut(doc, &path)?;
    *target = value;
    Ok(())
}
