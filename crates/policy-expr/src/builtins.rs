//! Built-in functions: `COUNT`, `SUM`, `MAX`, `MIN`, `AVERAGE`, `map`.
//!
//! Per DESIGN.md's Open Question resolution, the reductions here take a flat
//! numeric array and error on the first non-numeric element rather than
//! silently dropping it.

use crate::error::EvalError;
use crate::resolve::resolve;
use crate::scan::split_top_level;
use policy_value::{to_number, Value};

/// Dispatches a recognized `name(args)` call shape. `args_str` is the raw,
/// unsplit text between the parentheses.
pub fn call(name: &str, args_str: &str, tree: &Value) -> Result<Value, EvalError> {
    match name {
        "COUNT" => count(args_str, tree),
        "SUM" => reduce(args_str, tree, "SUM", 0.0, |acc, n| acc + n),
        "MAX" => fold_non_empty(args_str, tree, "MAX", f64::max),
        "MIN" => fold_non_empty(args_str, tree, "MIN", f64::min),
        "AVERAGE" => average(args_str, tree),
        "map" => map(args_str, tree),
        other => Err(EvalError::UnknownBuiltin(other.to_string())),
    }
}

fn single_array_arg(args_str: &str, tree: &Value, fn_name: &str) -> Result<Vec<Value>, EvalError> {
    let args = split_top_level(args_str.trim(), ",");
    if args.len() != 1 {
        return Err(EvalError::Arity(fn_name.to_string(), "1", args.len()));
    }
    let v = resolve(args[0].trim(), tree)?;
    match v {
        Value::Array(items) => Ok(items),
        other => Err(EvalError::NotArray(other.kind().to_string())),
    }
}

fn count(args_str: &str, tree: &Value) -> Result<Value, EvalError> {
    let items = single_array_arg(args_str, tree, "COUNT")?;
    Ok(Value::Number(items.len() as f64))
}

fn reduce(
    args_str: &str,
    tree: &Value,
    fn_name: &str,
    init: f64,
    step: impl Fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let items = single_array_arg(args_str, tree, fn_name)?;
    let mut acc = init;
    for item in &items {
        let n = to_number(item).ok_or_else(|| EvalError::NotNumeric(item.kind().to_string()))?;
        acc = step(acc, n);
    }
    Ok(Value::Number(acc))
}

fn fold_non_empty(
    args_str: &str,
    tree: &Value,
    fn_name: &str,
    step: impl Fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let items = single_array_arg(args_str, tree, fn_name)?;
    let mut iter = items.iter();
    let first = iter
        .next()
        .ok_or_else(|| EvalError::Arity(fn_name.to_string(), "non-empty array", 0))?;
    let mut acc = to_number(first).ok_or_else(|| EvalError::NotNumeric(first.kind().to_string()))?;
    for item in iter {
        let n = to_number(item).ok_or_else(|| EvalError::NotNumeric(item.kind().to_string()))?;
        acc = step(acc, n);
    }
    Ok(Value::Number(acc))
}

fn average(args_str: &str, tree: &Value) -> Result<Value, EvalError> {
    let items = single_array_arg(args_str, tree, "AVERAGE")?;
    if items.is_empty() {
        return Err(EvalError::Arity("AVERAGE".to_string(), "non-empty array", 0));
    }
    let mut sum = 0.0;
    for item in &items {
        sum += to_number(item).ok_or_else(|| EvalError::NotNumeric(item.kind().to_string()))?;
    }
    Ok(Value::Number(sum / items.len() as f64))
}

/// `map(arrayExpr, "propertyName")` — projects each object element's named
/// property into a new array.
fn map(args_str: &str, tree: &Value) -> Result<Value, EvalError> {
    let args = split_top_level(args_str.trim(), ",");
    if args.len() != 2 {
        return Err(EvalError::Arity("map".to_string(), "2", args.len()));
    }
    let array_val = resolve(args[0].trim(), tree)?;
    let items = match array_val {
        Value::Array(items) => items,
        other => return Err(EvalError::NotArray(other.kind().to_string())),
    };

    let key_val = resolve(args[1].trim(), tree)?;
    let key = match key_val {
        Value::String(s) => s,
        other => return Err(EvalError::NotString(other.kind().to_string())),
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let obj = item
            .as_object()
            .ok_or_else(|| EvalError::NotObject(item.kind().to_string()))?;
        let v = obj
            .get(&key)
            .cloned()
            .ok_or_else(|| EvalError::MissingProperty(key.clone()))?;
        out.push(v);
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({"transacoes": [{"valor": 10}, {"valor": 20}, {"valor": 30}]}).into()
    }

    #[test]
    fn count_counts_elements() {
        assert_eq!(
            call("COUNT", "$.transacoes", &tree()).unwrap(),
            Value::Number(3.0)
        );
    }

    #[test]
    fn sum_adds_mapped_values() {
        assert_eq!(
            call("SUM", "map($.transacoes, \"valor\")", &tree()).unwrap(),
            Value::Number(60.0)
        );
    }

    #[test]
    fn sum_errors_on_non_numeric_element() {
        let t: Value = json!({"xs": ["a", "b"]}).into();
        assert!(call("SUM", "$.xs", &t).is_err());
    }

    #[test]
    fn max_min_average() {
        let args = "map($.transacoes, \"valor\")";
        assert_eq!(call("MAX", args, &tree()).unwrap(), Value::Number(30.0));
        assert_eq!(call("MIN", args, &tree()).unwrap(), Value::Number(10.0));
        assert_eq!(call("AVERAGE", args, &tree()).unwrap(), Value::Number(20.0));
    }

    #[test]
    fn average_of_empty_array_errors() {
        let t: Value = json!({"xs": []}).into();
        assert!(call("AVERAGE", "$.xs", &t).is_err());
    }

    #[test]
    fn map_missing_property_errors() {
        let t: Value = json!({"xs": [{"a": 1}, {"b": 2}]}).into();
        assert!(call("map", "$.xs, \"a\"", &t).is_err());
    }

    #[test]
    fn unknown_builtin_errors() {
        assert_eq!(
            call("NOPE", "$.transacoes", &tree()).unwrap_err(),
            EvalError::UnknownBuiltin("NOPE".to_string())
        );
    }
}
