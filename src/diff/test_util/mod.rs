use serde_json::Value;

use crate::{
    patch::apply,
    path::{Pointer, Segment},
    resolve::parse_array_index,
};

use super::{Patch, ops};

/// Parses `raw` the way the diff engine builds pointers: canonical
/// array-index tokens become `Segment::Index`.
pub(crate) fn indexed(raw: &str) -> Pointer {
    let parsed: Pointer = raw.try_into().unwrap();
    let segments = parsed
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Field(token) => match parse_array_index(token) {
                Some(index) => Segment::Index(index),
                None => segment.clone(),
            },
            Segment::Index(_) => segment.clone(),
        })
        .collect();
    Pointer::new(segments)
}

/// Applies `patch` to a copy of `doc`, panicking on any failure.
pub(crate) fn replay(doc: &Value, patch: &Patch) -> Value {
    match apply(doc, patch) {
        Ok(result) => result,
        Err(e) => panic!("patch {} does not apply to {doc}: {e}", render(patch)),
    }
}

/// Renders a raw operation buffer and replays it against `doc`.
pub(crate) fn replay_ops(doc: &Value, buffer: &[ops::Op]) -> Value {
    replay(doc, &ops::execute(buffer.to_vec()))
}

fn render(patch: &Patch) -> String {
    serde_json::to_string(patch).unwrap_or_else(|_| format!("{patch:?}"))
}
