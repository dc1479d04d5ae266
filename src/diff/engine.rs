use serde_json::Value;

use crate::path::Pointer;

use super::{DiffOptions, align, ops::Op};

/// Compares `left` and `right` below `path_pos`, appending raw operations.
///
/// Objects are compared member by member and arrays are handed to the
/// aligner. Anything else that differs, including values of different
/// kinds, becomes a single replace.
pub(super) fn diff_recursive(
    left: &Value,
    right: &Value,
    options: &DiffOptions,
    path_pos: &mut Pointer,
    ops: &mut Vec<Op>,
) {
    match (left, right) {
        (left, right) if left == right => {} // Values are equal, no diff needed
        (Value::Object(left_map), Value::Object(right_map)) => {
            diff_object(left_map, right_map, options, path_pos, ops)
        }
        (Value::Array(left_array), Value::Array(right_array)) => {
            align::diff_array(left_array, right_array, options, path_pos, ops)
        }
        (_, right) => ops.push(Op::replace(path_pos.clone(), right.clone())),
    }
}

fn diff_object(
    left_map: &serde_json::Map<String, Value>,
    right_map: &serde_json::Map<String, Value>,
    options: &DiffOptions,
    path_pointer: &mut Pointer,
    ops: &mut Vec<Op>,
) {
    // Removals first, then additions. Member order does not affect the
    // result, but it lets a renamed member pair up as remove -> add.
    for (key, left_value) in left_map {
        if !right_map.contains_key(key) {
            path_pointer.push_field(key.as_str());
            ops.push(Op::remove(path_pointer.clone(), left_value.clone()));
            path_pointer.pop();
        }
    }

    for (key, right_value) in right_map {
        if !left_map.contains_key(key) {
            path_pointer.push_field(key.as_str());
            ops.push(Op::add(path_pointer.clone(), right_value.clone()));
            path_pointer.pop();
        }
    }

    for (key, left_value) in left_map {
        if let Some(right_value) = right_map.get(key) {
            path_pointer.push_field(key.as_str());
            diff_recursive(left_value, right_value, options, path_pointer, ops);
            path_pointer.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use crate::diff::test_util::indexed;

    use super::*;

    fn raw_diff(left: &Value, right: &Value) -> Vec<Op> {
        let mut path_pos = Pointer::root();
        let mut ops = Vec::new();

        diff_recursive(left, right, &DiffOptions::default(), &mut path_pos, &mut ops);

        ops
    }

    #[test]
    fn test_diff_recursive_equal_values() {
        let ops = raw_diff(&json!("foo"), &json!("foo"));

        // No patch operations should be generated for equal values
        check!(ops.is_empty());
    }

    #[test]
    fn test_diff_recursive_equal_documents() {
        let doc = json!({"a": [1, {"b": null}], "c": "d"});

        check!(raw_diff(&doc, &doc).is_empty());
    }

    #[test]
    fn test_diff_recursive_non_equal_values() {
        let ops = raw_diff(&json!("foo"), &json!("bar"));

        check!(ops == vec![Op::replace(Pointer::root(), json!("bar"))]);
    }

    #[test]
    fn test_diff_recursive_with_left_string_and_right_object() {
        let right = json!({"baz": 42});
        let ops = raw_diff(&json!("foo"), &right);

        check!(ops == vec![Op::replace(Pointer::root(), right)]);
    }

    #[test]
    fn test_diff_recursive_with_array_and_object_is_a_replace() {
        let ops = raw_diff(&json!({"a": [1, 2]}), &json!({"a": {"0": 1}}));

        check!(ops == vec![Op::replace(indexed("/a"), json!({"0": 1}))]);
    }

    #[test]
    fn test_diff_recursive_null_leaf_is_an_ordinary_value() {
        let ops = raw_diff(&json!({"a": null}), &json!({"a": 0}));

        check!(ops == vec![Op::replace(indexed("/a"), json!(0))]);
    }

    #[test]
    fn test_diff_recursive_with_both_objects() {
        let ops = raw_diff(&json!({"foo": 43}), &json!({"foo": 42}));

        check!(ops == vec![Op::replace(indexed("/foo"), json!(42))]);
    }

    #[test]
    fn test_diff_recursive_with_both_objects_should_remove() {
        let ops = raw_diff(&json!({"foo": 43, "bar": 1}), &json!({"foo": 43}));

        check!(ops == vec![Op::remove(indexed("/bar"), json!(1))]);
    }

    #[test]
    fn test_diff_recursive_with_both_objects_should_add() {
        let ops = raw_diff(&json!({"foo": 43}), &json!({"foo": 43, "bar": 1}));

        check!(ops == vec![Op::add(indexed("/bar"), json!(1))]);
    }

    #[test]
    fn test_diff_recursive_emits_removals_before_additions() {
        let ops = raw_diff(&json!({"a": 1, "k": 0}), &json!({"b": 1, "k": 0}));

        check!(
            ops == vec![
                Op::remove(indexed("/a"), json!(1)),
                Op::add(indexed("/b"), json!(1)),
            ]
        );
    }

    #[test]
    fn test_diff_recursive_nested_change_is_addressed_at_the_leaf() {
        let ops = raw_diff(
            &json!({"a": {"x": 1, "y": 2}}),
            &json!({"a": {"x": 1, "y": 3}}),
        );

        check!(ops == vec![Op::replace(indexed("/a/y"), json!(3))]);
    }

    #[test]
    fn test_diff_recursive_keeps_special_characters_in_keys() {
        let ops = raw_diff(&json!({}), &json!({"a/b~c": true}));

        check!(ops == vec![Op::add(indexed("/a~1b~0c"), json!(true))]);
    }
}
