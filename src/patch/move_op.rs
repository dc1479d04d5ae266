use serde_json::Value;

use crate::{
    patch::{add, error::PatchError, remove},
    path::Pointer,
};

/// Applies an RFC 6902 "move": a "remove" at `from` followed by an "add" of
/// the removed value at `path`.
///
/// The "from" location MUST NOT be a proper prefix of the "path"
/// location; i.e., a location cannot be moved into one of its children.
pub fn move_op(doc: &mut Value, from: Pointer, path: Pointer) -> Result<(), PatchError> {
    if from.is_parent_of(&path) {
        return Err(PatchError::CannotMoveIntoChild);
    }
    if from == path {
        crate::resolve::resolve_ref(doc, &from)?;
        return Ok(());
    }

    // Work on a copy so that a failing "add" leaves the document untouched.
    let mut doc_cloned = doc.clone();

    let value = remove(&mut doc_cloned, from)?;
    add(&mut doc_cloned, path, value)?;

    *doc = doc_cloned;

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use crate::resolve::ResolveError;

    use super::*;

    #[test]
    fn move_of_the_root_should_fail() {
        let mut doc = json!({"a": 1, "b": 2});
        let_assert!(
            Err(PatchError::CannotMoveIntoChild) =
                move_op(&mut doc, "".try_into().unwrap(), "/a".try_into().unwrap())
        );

        check!(doc == json!({"a": 1, "b": 2}));
    }

    #[test]
    fn move_into_child_should_fail() {
        let mut doc = json!({"a": {"b": 2}, "c": 3});
        let_assert!(
            Err(PatchError::CannotMoveIntoChild) = move_op(
                &mut doc,
                "/a".try_into().unwrap(),
                "/a/b".try_into().unwrap()
            )
        );

        check!(doc == json!({"a": {"b": 2}, "c": 3}));
    }

    #[test]
    fn move_existing_field_should_succeed() {
        let mut doc = json!({"a": 1, "b": 2});

        let_assert!(Ok(()) = move_op(&mut doc, "/a".try_into().unwrap(), "/c".try_into().unwrap()));
        check!(doc == json!({"b": 2, "c": 1}));
    }

    #[test]
    fn move_within_array_uses_post_removal_indices() {
        let mut doc = json!(["a", "b", "c"]);

        let_assert!(Ok(()) = move_op(&mut doc, "/0".try_into().unwrap(), "/2".try_into().unwrap()));
        check!(doc == json!(["b", "c", "a"]));
    }

    #[test]
    fn move_to_the_same_location_is_a_no_op() {
        let mut doc = json!({"a": [1, 2]});

        let_assert!(
            Ok(()) = move_op(&mut doc, "/a/1".try_into().unwrap(), "/a/1".try_into().unwrap())
        );
        check!(doc == json!({"a": [1, 2]}));
    }

    #[test]
    fn move_from_missing_location_should_fail() {
        let mut doc = json!({"a": 1});

        let result = move_op(&mut doc, "/x".try_into().unwrap(), "/y".try_into().unwrap());
        let_assert!(Err(PatchError::TargetNotFound { path }) = result);
        check!(path.to_string() == "/x");
        check!(doc == json!({"a": 1}));
    }

    #[test]
    fn move_into_missing_parent_should_leave_document_untouched() {
        let mut doc = json!({"a": 1});

        let result = move_op(&mut doc, "/a".try_into().unwrap(), "/x/y".try_into().unwrap());
        check!(result == Err(PatchError::ResolveError(ResolveError::NotFound)));
        check!(doc == json!({"a": 1}));
    }
}
