use policy_rule::ConditionResult;
use policy_value::Value;
use serde::{Deserialize, Serialize};

/// Caller-supplied context, carried through to the response verbatim
/// (spec.md §6).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Inbound request body (spec.md §6).
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub context: Option<Context>,
    pub data: Value,
    pub policies: Vec<String>,
    /// Not part of the wire shape's required fields; controls whether the
    /// response carries the full diagnostic structure or just `data`
    /// (spec.md §6: "In 'debug' mode the full structure is returned").
    #[serde(default)]
    pub debug: bool,
}

/// Verdict for one policy (spec.md §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResult {
    #[serde(rename = "policyName")]
    pub policy_name: String,
    pub passed: bool,
    pub conditions: Vec<ConditionResult>,
}

/// The stable, structured error body (spec.md §6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: String,
    pub message: String,
}

/// Outbound response body (spec.md §6).
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub passed: bool,
    pub data: Value,
    #[serde(rename = "appliedPolicies")]
    pub applied_policies: Vec<PolicyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
    #[serde(rename = "elapsedTime")]
    pub elapsed_time_ms: i64,
}
