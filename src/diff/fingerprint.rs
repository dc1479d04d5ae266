use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde_json::{Number, Value};

/// Structural hash of a JSON value, consistent with `Value`'s `PartialEq`.
///
/// Object members are combined order-independently so that maps comparing
/// equal always hash equal, whatever their iteration order. Equal hashes do
/// not imply equal values; callers confirm candidates with `==`.
pub(super) fn fingerprint(value: &Value) -> u64 {
    let mut hasher = FxHasher::default();
    write_value(value, &mut hasher);
    hasher.finish()
}

fn write_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            state.write_u8(u8::from(*b));
        }
        Value::Number(n) => {
            state.write_u8(2);
            write_number(n, state);
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                write_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            let members = map.iter().fold(0u64, |acc, (key, member)| {
                let mut entry = FxHasher::default();
                key.hash(&mut entry);
                write_value(member, &mut entry);
                acc.wrapping_add(entry.finish())
            });
            state.write_u64(members);
        }
    }
}

// serde_json keeps unsigned, signed and float numbers apart and only
// compares numbers of the same kind as equal.
fn write_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        state.write_u8(0);
        state.write_u64(u);
    } else if let Some(i) = n.as_i64() {
        state.write_u8(1);
        state.write_i64(i);
    } else if let Some(f) = n.as_f64() {
        state.write_u8(2);
        // 0.0 == -0.0
        let bits = if f == 0.0 { 0 } else { f.to_bits() };
        state.write_u64(bits);
    }
}
