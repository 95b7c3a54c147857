//! Numeric coercion, localized in one place per spec design note 9
//! ("All coercions ... must be localized in a single helper; callers
//! inspect variants via pattern matching, not by catching type errors.").

use crate::Value;

/// Attempts to view a value as an `f64`, coercing a numeric string.
///
/// `Bool`, `Array`, `Object` and `Null` never coerce — only `Number` and a
/// parseable `String` do.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerces a string to `bool` the way the policy DSL's literal grammar does
/// (`"true"`/`"false"`, case-sensitive) — used by the schema formatter.
pub fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
