use serde_json::Value;

use crate::{
    patch::error::PatchError,
    path::{Pointer, Segment},
    resolve::{parse_array_index, resolve_mut, value_type_desc},
};

/// Applies an RFC 6902 "add".
///
/// An empty path replaces the whole document. On an object the member is
/// inserted or overwritten. On an array the value is inserted at the index,
/// shifting later elements right; the index may equal the array length, and
/// the token `-` appends.
///
/// The parent of the target must already exist.
pub fn add(doc: &mut Value, path: Pointer, value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }

    let parent = path.parent().ok_or(PatchError::missing_parent(&path))?;
    let segment = path
        .last_segment()
        .ok_or(PatchError::missing_final_token(&path))?;

    let target = resolve_mut(doc, &parent)?;

    match target {
        Value::Object(obj) => {
            obj.insert(segment.token(), value);
        }
        Value::Array(arr) => {
            let index = match segment {
                Segment::Index(index) => *index,
                Segment::Field(field) if field == "-" => arr.len(),
                Segment::Field(field) => parse_array_index(field)
                    .ok_or_else(|| PatchError::invalid_array_index_token(&path, field))?,
            };

            // index may equal the length (append), never exceed it
            if index > arr.len() {
                return Err(PatchError::index_out_of_bounds(&path, index, arr.len()));
            }
            arr.insert(index, value);
        }
        val => {
            return Err(PatchError::not_a_container(&parent, &value_type_desc(val)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use crate::resolve::ResolveError;

    use super::*;

    #[test]
    fn add_an_object_at_root() {
        let mut doc = json!({"a": 1});

        add(&mut doc, "".try_into().unwrap(), json!({"foo": "bar"})).unwrap();

        check!(doc == json!({"foo": "bar"}));
    }

    #[test]
    fn add_an_object_at_member_with_empty_name() {
        let mut doc = json!({"a": 1});

        add(&mut doc, "/".try_into().unwrap(), json!({"foo": "bar"})).unwrap();

        check!(doc == json!({"a": 1, "": {"foo": "bar"}}));
    }

    #[test]
    fn add_an_object_at_an_existing_path_overwrites_it() {
        let mut doc = json!({"a": {"foo": 1, "bar": 123}});

        add(&mut doc, "/a/bar".try_into().unwrap(), json!({"foo": "bar"})).unwrap();

        check!(doc == json!({"a": {"foo": 1, "bar": {"foo": "bar"}}}));
    }

    #[test]
    fn add_an_object_to_non_existent_path_should_fail() {
        let mut doc = json!({"a": 1});

        let result = add(&mut doc, "/b/c".try_into().unwrap(), json!({"foo": "bar"}));

        let_assert!(Err(PatchError::ResolveError(e)) = result);
        check!(e == ResolveError::NotFound);
    }

    #[test]
    fn add_to_array_at_specific_index() {
        let mut doc = json!({"a": [1, 2, 3]});

        add(&mut doc, "/a/1".try_into().unwrap(), json!(99)).unwrap();

        check!(doc == json!({"a": [1, 99, 2, 3]}));
    }

    #[test]
    fn add_to_array_at_end() {
        let mut doc = json!({"a": [1, 2, 3]});

        add(&mut doc, "/a/3".try_into().unwrap(), json!(99)).unwrap();

        check!(doc == json!({"a": [1, 2, 3, 99]}));
    }

    #[test]
    fn add_to_array_using_append() {
        let mut doc = json!({"a": [1, 2]});

        add(&mut doc, "/a/-".try_into().unwrap(), json!(3)).unwrap();

        check!(doc == json!({"a": [1, 2, 3]}));
    }

    #[test]
    fn add_to_array_with_index_segment() {
        let mut doc = json!(["x", "z"]);
        let path = Pointer::new(vec![Segment::Index(1)]);

        add(&mut doc, path, json!("y")).unwrap();

        check!(doc == json!(["x", "y", "z"]));
    }

    #[test]
    fn add_to_array_at_out_of_bounds_index_should_fail() {
        let mut doc = json!({"a": [1]});

        let result = add(&mut doc, "/a/5".try_into().unwrap(), json!(0));

        let_assert!(Err(PatchError::ArrayIndexOutOfBounds { index, len, .. }) = result);
        check!(index == 5);
        check!(len == 1);
    }

    #[test]
    fn add_to_array_with_non_numeric_index_should_fail() {
        let mut doc = json!({"a": [1]});

        let result = add(&mut doc, "/a/x".try_into().unwrap(), json!(0));

        let_assert!(Err(PatchError::InvalidArrayIndexToken { token, .. }) = result);
        check!(token == "x");
    }

    #[test]
    fn add_when_parent_is_scalar_should_fail() {
        let mut doc = json!({"a": 1});

        let result = add(&mut doc, "/a/b".try_into().unwrap(), json!(0));

        let_assert!(Err(PatchError::NotAContainer { parent, actual }) = result);
        check!(parent.to_string() == "/a");
        check!(actual == "number(1)");
    }

    #[test]
    fn add_object_key_with_json_pointer_escapes() {
        let mut doc = json!({});

        add(&mut doc, "/a~1b~0c".try_into().unwrap(), json!(1)).unwrap();

        check!(doc == json!({"a/b~c": 1}));
    }
}
