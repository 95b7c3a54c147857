//! Deep structural equality for [`Value`](crate::Value).
//!
//! Ported idiom from the teacher's `json-joy-util::json_equal::deep_equal`:
//! recursive variant-and-contents comparison, no cross-type coercion (a
//! `Number` is never equal to the `String` holding the same digits).

use crate::Value;

/// Recursively compares two values for exact structural equality.
///
/// Object key order does not affect the result; array order does.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|bv| deep_equal(v, bv)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(j: serde_json::Value) -> Value {
        j.into()
    }

    #[test]
    fn null_equals_null() {
        assert!(deep_equal(&v(json!(null)), &v(json!(null))));
    }

    #[test]
    fn number_and_string_never_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!("1"))));
    }

    #[test]
    fn zero_and_null_not_equal() {
        assert!(!deep_equal(&v(json!(0)), &v(json!(null))));
    }

    #[test]
    fn objects_ignore_key_order() {
        assert!(deep_equal(
            &v(json!({"a": 1, "b": 2})),
            &v(json!({"b": 2, "a": 1}))
        ));
    }

    #[test]
    fn arrays_respect_order() {
        assert!(!deep_equal(&v(json!([1, 2])), &v(json!([2, 1]))));
    }

    #[test]
    fn nested_structures() {
        let a = v(json!({"items": [{"k": 1}, {"k": 2}]}));
        let b = v(json!({"items": [{"k": 1}, {"k": 2}]}));
        let c = v(json!({"items": [{"k": 1}, {"k": 3}]}));
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }
}
