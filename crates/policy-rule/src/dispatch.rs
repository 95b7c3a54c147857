//! `execute_rule` — recognizes a line's syntactic form in priority order and
//! runs it against a shared, mutable `data` tree (spec.md §4.3).

use crate::patterns::{match_add, match_if_then, match_set};
use crate::types::ConditionResult;
use policy_value::Value;

/// Runs a single rule line against `data`, mutating it in place for
/// `SET`/`ADD` forms. Never returns `Err` — a recognized-but-failing rule
/// or a parse error both become a `ConditionResult` with `success = false`.
pub fn execute_rule(line: &str, data: &mut Value) -> ConditionResult {
    let line = line.trim();

    if let Some((path, expr)) = match_set(line) {
        return execute_set(line, &path, &expr, data);
    }

    if let Some((json_lit, path)) = match_add(line) {
        return execute_add(line, &json_lit, &path, data);
    }

    if let Some((cond, action)) = match_if_then(line) {
        return execute_if_then(line, &cond, &action, data);
    }

    execute_assertion(line, data)
}

fn execute_set(line: &str, path_str: &str, expr: &str, data: &mut Value) -> ConditionResult {
    let result = (|| -> Result<(), crate::error::RuleError> {
        let value = policy_expr::resolve(expr, data)?;
        let path = policy_path::parse(path_str)?;
        policy_path::set(data, &path, value)?;
        Ok(())
    })();

    match result {
        Ok(()) => ConditionResult::ok(line, format!("set {path_str} from '{expr}'")),
        Err(e) => ConditionResult::errored(line, e),
    }
}

fn execute_add(line: &str, json_lit: &str, path_str: &str, data: &mut Value) -> ConditionResult {
    let result = (|| -> Result<(), crate::error::RuleError> {
        let parsed: serde_json::Value = serde_json::from_str(json_lit)
            .map_err(|e| crate::error::RuleError::InvalidJsonLiteral(json_lit.to_string(), e.to_string()))?;
        let new_item: Value = parsed.into();

        let path = policy_path::parse(path_str)?;
        let current = policy_path::get(data, &path)?;

        let updated = match current {
            Value::Null => Value::Array(vec![new_item]),
            Value::Array(mut items) => {
                items.push(new_item);
                Value::Array(items)
            }
            other => return Err(crate::error::RuleError::AddTargetNotArray(other.kind())),
        };

        policy_path::set(data, &path, updated)?;
        Ok(())
    })();

    match result {
        Ok(()) => ConditionResult::ok(line, format!("added {json_lit} to {path_str}")),
        Err(e) => ConditionResult::errored(line, e),
    }
}

fn execute_if_then(line: &str, cond: &str, action: &str, data: &mut Value) -> ConditionResult {
    match policy_expr::evaluate(cond, data) {
        Ok(true) => {
            let inner = execute_rule(action, data);
            ConditionResult::ok(line, format!("condition true, {}", inner.detail))
        }
        Ok(false) => ConditionResult::ok(line, "condition false, action skipped"),
        Err(e) => ConditionResult::errored(line, e),
    }
}

fn execute_assertion(line: &str, data: &Value) -> ConditionResult {
    match policy_expr::evaluate(line, data) {
        Ok(true) => ConditionResult::ok(line, "assertion true"),
        Ok(false) => ConditionResult::failed(line, "assertion false"),
        Err(e) => ConditionResult::errored(line, e),
    }
}
