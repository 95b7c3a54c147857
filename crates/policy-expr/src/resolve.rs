//! `Resolve(expr) -> Value` — spec.md §4.2's grammar table.

use crate::builtins;
use crate::error::EvalError;
use crate::scan::{find_top_level_any, split_top_level};
use once_cell::sync::Lazy;
use policy_value::{to_number, Value};
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Resolves a trimmed expression string to a [`Value`] against `tree`.
pub fn resolve(expr: &str, tree: &Value) -> Result<Value, EvalError> {
    let s = expr.trim();

    match s {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if DECIMAL.is_match(s) {
        return Ok(Value::Number(s.parse().expect("regex guarantees parse")));
    }

    if let Some(inner) = strip_quotes(s) {
        return Ok(Value::String(inner.to_string()));
    }

    if s == "$" || s.starts_with("$.") {
        let path = policy_path::parse(s).map_err(|e| EvalError::InvalidPath(s.to_string(), e.to_string()))?;
        let v = policy_path::get(tree, &path)
            .map_err(|e| EvalError::PathResolution(s.to_string(), e.to_string()))?;
        return Ok(v);
    }

    if s.starts_with('[') && s.ends_with(']') {
        return resolve_array_literal(&s[1..s.len() - 1], tree);
    }

    if let Some((name, args)) = parse_call_shape(s) {
        if name == "EXP" {
            return evaluate_arithmetic(args, tree);
        }
        return builtins::call(name, args, tree);
    }

    if find_top_level_any(s, &["+", "-", "*", "/"], 1).is_some() {
        return evaluate_arithmetic(s, tree);
    }

    // No recognized form and no top-level operator: per the original's
    // fallback (examples/original_source/pkg/policy/rules/evaluate.go),
    // an unrecognized bare term resolves as a string literal rather than
    // re-entering arithmetic resolution, which would recurse forever on
    // a term like an unquoted `premium` or a stray trailing operator.
    Ok(Value::String(s.to_string()))
}

/// Strips matching surrounding `'...'` or `"..."` quotes, if present.
fn strip_quotes(s: &str) -> Option<&str> {
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

/// Recognizes `name(args)` shape, returning the identifier and the raw
/// (unsplit) argument text.
fn parse_call_shape(s: &str) -> Option<(&str, &str)> {
    if !s.ends_with(')') {
        return None;
    }
    let open = s.find('(')?;
    let name = &s[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    if name.chars().next()?.is_ascii_digit() {
        return None;
    }
    Some((name, &s[open + 1..s.len() - 1]))
}

fn resolve_array_literal(inner: &str, tree: &Value) -> Result<Value, EvalError> {
    let trimmed = inner.trim();
    if trimmed.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    let mut items = Vec::new();
    for elem in split_top_level(trimmed, ",") {
        items.push(resolve(elem.trim(), tree)?);
    }
    Ok(Value::Array(items))
}

/// Binary arithmetic: `lhs op rhs`, first-unprotected-operator tie-break,
/// or a single operand when no top-level operator is found.
pub fn evaluate_arithmetic(expr: &str, tree: &Value) -> Result<Value, EvalError> {
    let s = expr.trim();
    match find_top_level_any(s, &["+", "-", "*", "/"], 1) {
        Some((idx, op)) => {
            let lhs_str = s[..idx].trim();
            let rhs_str = s[idx + op.len()..].trim();
            let lhs = resolve(lhs_str, tree)?;
            let rhs = resolve(rhs_str, tree)?;
            let a = to_number(&lhs).ok_or_else(|| EvalError::NotNumeric(lhs.kind().to_string()))?;
            let b = to_number(&rhs).ok_or_else(|| EvalError::NotNumeric(rhs.kind().to_string()))?;
            let result = match op {
                "+" => a + b,
                "-" => a - b,
                "*" => a * b,
                "/" => {
                    if b == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    a / b
                }
                _ => unreachable!(),
            };
            Ok(Value::Number(result))
        }
        None => {
            // No top-level operator, so `resolve` cannot loop back into
            // `evaluate_arithmetic` for this same string — it falls through
            // to a recognized literal/path/call or the bare-string fallback.
            let v = resolve(s, tree)?;
            let n = to_number(&v).ok_or_else(|| EvalError::NotNumeric(v.kind().to_string()))?;
            Ok(Value::Number(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "valor": 200.0,
            "cliente": {"tipo": "premium"},
            "transacoes": [{"valor": 30}, {"valor": 40}],
        })
        .into()
    }

    #[test]
    fn resolves_constants() {
        assert_eq!(resolve("null", &tree()).unwrap(), Value::Null);
        assert_eq!(resolve("true", &tree()).unwrap(), Value::Bool(true));
    }

    #[test]
    fn resolves_decimal_literal() {
        assert_eq!(resolve("-3.5", &tree()).unwrap(), Value::Number(-3.5));
    }

    #[test]
    fn resolves_quoted_string() {
        assert_eq!(
            resolve("'adulto'", &tree()).unwrap(),
            Value::String("adulto".into())
        );
        assert_eq!(
            resolve("\"adulto\"", &tree()).unwrap(),
            Value::String("adulto".into())
        );
    }

    #[test]
    fn resolves_path() {
        assert_eq!(resolve("$.valor", &tree()).unwrap(), Value::Number(200.0));
    }

    #[test]
    fn resolves_array_literal_with_strings() {
        let v = resolve("[\"SP\", \"RJ\"]", &tree()).unwrap();
        assert_eq!(
            v,
            Value::Array(vec![Value::String("SP".into()), Value::String("RJ".into())])
        );
    }

    #[test]
    fn resolves_simple_arithmetic() {
        assert_eq!(
            resolve("$.valor * 0.1", &tree()).unwrap(),
            Value::Number(20.0)
        );
    }

    #[test]
    fn resolves_exp_wrapper() {
        assert_eq!(
            resolve("EXP($.valor * 0.15)", &tree()).unwrap(),
            Value::Number(30.0)
        );
    }

    #[test]
    fn division_by_zero_errors() {
        assert_eq!(
            resolve("$.valor / 0", &tree()).unwrap_err(),
            EvalError::DivisionByZero
        );
    }

    #[test]
    fn sum_of_map_composes() {
        assert_eq!(
            resolve("SUM(map($.transacoes, \"valor\"))", &tree()).unwrap(),
            Value::Number(70.0)
        );
    }

    #[test]
    fn unquoted_bare_word_resolves_as_string_literal() {
        assert_eq!(
            resolve("premium", &tree()).unwrap(),
            Value::String("premium".into())
        );
    }

    #[test]
    fn trailing_operator_errors_instead_of_recursing() {
        assert!(matches!(
            evaluate_arithmetic("$.valor +", &tree()).unwrap_err(),
            EvalError::NotNumeric(_)
        ));
    }

    #[test]
    fn empty_operand_errors_instead_of_recursing() {
        assert!(matches!(
            evaluate_arithmetic("$.valor +  ", &tree()).unwrap_err(),
            EvalError::NotNumeric(_)
        ));
    }
}
