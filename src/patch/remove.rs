use serde_json::Value;

use crate::{
    patch::error::PatchError,
    path::{Pointer, Segment},
    resolve::{parse_array_index, resolve_mut, value_type_desc},
};

/// Applies an RFC 6902 "remove".
///
/// The target must exist. Removing an array element shifts every later
/// element one position to the left.
pub fn remove(doc: &mut Value, path: Pointer) -> Result<Value, PatchError> {
    if path.is_empty() {
        return Err(PatchError::CannotRemoveRoot);
    }

    let parent = path.parent().ok_or(PatchError::missing_parent(&path))?;
    let segment = path.last_segment().ok_or(PatchError::CannotRemoveRoot)?;

    let target = resolve_mut(doc, &parent)?;

    match target {
        Value::Object(map) => map
            .remove(&segment.token())
            .ok_or(PatchError::target_not_found(&path)),
        Value::Array(arr) => {
            let index = match segment {
                Segment::Index(index) => *index,
                Segment::Field(field) => parse_array_index(field)
                    .ok_or_else(|| PatchError::invalid_array_index_token(&path, field))?,
            };

            if index >= arr.len() {
                return Err(PatchError::index_out_of_bounds(&path, index, arr.len()));
            }
            Ok(arr.remove(index))
        }
        val => Err(PatchError::not_a_container(&parent, &value_type_desc(val))),
    }
}
