//! Orchestration: validate inbound `data`, run each requested policy's
//! rules in order against the shared tree, then format the result
//! (spec.md §2's control flow, §7's three error kinds).

use crate::error::PolicyError;
use crate::policy_set::PolicySet;
use crate::types::{PolicyResult, Request, Response, ResponseError};
use policy_schema::Schema;
use std::time::Instant;
use tracing::{debug_span, error, trace, warn};

/// Runs a request to completion. Never panics on malformed policy
/// references or rule text — those become `ConditionResult`/top-level
/// errors per spec.md §7; only a missing/unparseable schema or policy set
/// at call time is a programmer error, and those are checked before this
/// function is reached (load time).
pub fn evaluate(policy_set: &PolicySet, schema: Option<&Schema>, request: Request) -> Response {
    let start = Instant::now();
    let span = tracing::info_span!("policy_request", request_id = %request.id);
    let _enter = span.enter();

    let mut data = request.data;

    if let Some(schema) = schema {
        let errors = policy_schema::validate(&data, schema);
        if !errors.is_empty() {
            warn!(count = errors.len(), "inbound schema validation failed");
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Response {
                id: request.id,
                timestamp: request.timestamp,
                passed: false,
                data,
                applied_policies: Vec::new(),
                error: Some(ResponseError {
                    code: PolicyError::InvalidJsonSchema(message.clone()).code().to_string(),
                    message,
                }),
                elapsed_time_ms: elapsed_ms(start),
            };
        }
    }

    let mut applied = Vec::with_capacity(request.policies.len());
    for policy_name in &request.policies {
        let Some(rules) = policy_set.rules_for(policy_name) else {
            let message = format!("unknown policy '{policy_name}'");
            error!(policy = %policy_name, "referenced policy not found in policy set");
            return Response {
                id: request.id,
                timestamp: request.timestamp,
                passed: false,
                data,
                applied_policies: applied,
                error: Some(ResponseError {
                    code: PolicyError::InvalidExecPolicies(message.clone()).code().to_string(),
                    message,
                }),
                elapsed_time_ms: elapsed_ms(start),
            };
        };

        let policy_span = debug_span!("policy", name = %policy_name);
        let _policy_enter = policy_span.enter();

        let mut conditions = Vec::with_capacity(rules.len());
        for rule in rules {
            let result = policy_rule::execute_rule(rule, &mut data);
            trace!(rule = %rule, success = result.success, "rule evaluated");
            conditions.push(result);
        }
        let passed = conditions.iter().all(|c| c.success);
        applied.push(PolicyResult {
            policy_name: policy_name.clone(),
            passed,
            conditions,
        });
    }

    let overall_passed = applied.iter().all(|p| p.passed);

    let formatted = match schema {
        Some(schema) => match policy_schema::format(&data, schema) {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, "response formatting failed");
                return Response {
                    id: request.id,
                    timestamp: request.timestamp,
                    passed: overall_passed,
                    data,
                    applied_policies: applied,
                    error: Some(ResponseError {
                        code: PolicyError::UnexpectedFormatterError(e.to_string()).code().to_string(),
                        message: e.to_string(),
                    }),
                    elapsed_time_ms: elapsed_ms(start),
                };
            }
        },
        None => data,
    };

    Response {
        id: request.id,
        timestamp: request.timestamp,
        passed: overall_passed,
        data: formatted,
        applied_policies: applied,
        error: None,
        elapsed_time_ms: elapsed_ms(start),
    }
}

fn elapsed_ms(start: Instant) -> i64 {
    start.elapsed().as_millis() as i64
}
