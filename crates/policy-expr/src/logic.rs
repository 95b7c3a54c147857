//! Boolean evaluator: the `orExpr`/`andExpr`/`cmpExpr` grammar of spec.md §6,
//! sharing the same quote/bracket-aware scanner as arithmetic resolution.

use crate::error::EvalError;
use crate::regex_cache;
use crate::resolve::resolve;
use crate::scan::{find_top_level, find_top_level_any, split_top_level};
use policy_value::{deep_equal, to_number, Value};

/// Evaluates a full assertion expression to a bool, short-circuiting `OR`/`AND`
/// chains left to right.
pub fn evaluate_bool(expr: &str, tree: &Value) -> Result<bool, EvalError> {
    let s = expr.trim();
    for and_expr in split_top_level(s, " OR ") {
        if evaluate_and(and_expr.trim(), tree)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn evaluate_and(expr: &str, tree: &Value) -> Result<bool, EvalError> {
    for cmp_expr in split_top_level(expr, " AND ") {
        if !evaluate_cmp(cmp_expr.trim(), tree)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn evaluate_cmp(expr: &str, tree: &Value) -> Result<bool, EvalError> {
    if let Some(idx) = find_top_level(expr, " NOT IN ", 1) {
        let lhs = resolve(expr[..idx].trim(), tree)?;
        let rhs = resolve(expr[idx + " NOT IN ".len()..].trim(), tree)?;
        return Ok(!membership(&lhs, &rhs)?);
    }

    if let Some(idx) = find_top_level(expr, " IN ", 1) {
        let lhs = resolve(expr[..idx].trim(), tree)?;
        let rhs = resolve(expr[idx + " IN ".len()..].trim(), tree)?;
        return membership(&lhs, &rhs);
    }

    if let Some(idx) = find_top_level(expr, " MATCHES ", 1) {
        let lhs = resolve(expr[..idx].trim(), tree)?;
        let rhs = resolve(expr[idx + " MATCHES ".len()..].trim(), tree)?;
        let haystack = match lhs {
            Value::String(s) => s,
            other => return Err(EvalError::NotString(other.kind().to_string())),
        };
        let pattern = match rhs {
            Value::String(s) => s,
            other => return Err(EvalError::NotString(other.kind().to_string())),
        };
        let re = regex_cache::get_or_compile(&pattern)?;
        return Ok(re.is_match(&haystack));
    }

    if let Some((idx, op)) =
        find_top_level_any(expr, &["<=", ">=", "==", "!=", "<", ">"], 1)
    {
        let lhs = resolve(expr[..idx].trim(), tree)?;
        let rhs = resolve(expr[idx + op.len()..].trim(), tree)?;
        return compare(&lhs, op, &rhs);
    }

    let v = resolve(expr, tree)?;
    match v {
        Value::Bool(b) => Ok(b),
        other => Err(EvalError::NotBoolean(other.kind().to_string())),
    }
}

fn membership(lhs: &Value, rhs: &Value) -> Result<bool, EvalError> {
    match rhs {
        Value::Array(items) => Ok(items.iter().any(|item| deep_equal(item, lhs))),
        _ => Err(EvalError::InNotArray),
    }
}

fn compare(lhs: &Value, op: &str, rhs: &Value) -> Result<bool, EvalError> {
    match op {
        "==" | "!=" => {
            let eq = match (to_number(lhs), to_number(rhs)) {
                (Some(a), Some(b)) => a == b,
                _ => deep_equal(lhs, rhs),
            };
            Ok(if op == "==" { eq } else { !eq })
        }
        "<" | "<=" | ">" | ">=" => {
            let a = to_number(lhs).ok_or_else(|| EvalError::NotNumeric(lhs.kind().to_string()))?;
            let b = to_number(rhs).ok_or_else(|| EvalError::NotNumeric(rhs.kind().to_string()))?;
            Ok(match op {
                "<" => a < b,
                "<=" => a <= b,
                ">" => a > b,
                ">=" => a >= b,
                _ => unreachable!(),
            })
        }
        other => Err(EvalError::UnsupportedOperator(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "idade": 25,
            "estado": "SP",
            "nome": "ana",
            "desconto": null,
        })
        .into()
    }

    #[test]
    fn simple_comparison() {
        assert!(evaluate_bool("$.idade >= 18", &tree()).unwrap());
        assert!(!evaluate_bool("$.idade < 18", &tree()).unwrap());
    }

    #[test]
    fn and_chain_short_circuits_false() {
        assert!(!evaluate_bool("$.idade >= 18 AND $.idade > 100", &tree()).unwrap());
    }

    #[test]
    fn or_chain_short_circuits_true() {
        assert!(evaluate_bool("$.idade > 100 OR $.estado == 'SP'", &tree()).unwrap());
    }

    #[test]
    fn in_and_not_in() {
        assert!(evaluate_bool("$.estado IN ['SP', 'RJ']", &tree()).unwrap());
        assert!(evaluate_bool("$.estado NOT IN ['RJ', 'MG']", &tree()).unwrap());
    }

    #[test]
    fn matches_regex() {
        assert!(evaluate_bool("$.nome MATCHES '[a-z]+'", &tree()).unwrap());
        assert!(!evaluate_bool("$.nome MATCHES '[0-9]+'", &tree()).unwrap());
    }

    #[test]
    fn null_equality_without_special_casing() {
        assert!(evaluate_bool("$.desconto == null", &tree()).unwrap());
        assert!(evaluate_bool("$.faltante == null", &tree()).unwrap());
    }

    #[test]
    fn bare_bool_term() {
        assert!(evaluate_bool("true", &tree()).unwrap());
    }

    #[test]
    fn non_boolean_term_errors() {
        assert!(evaluate_bool("$.idade", &tree()).is_err());
    }
}
