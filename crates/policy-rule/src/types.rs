use serde::{Deserialize, Serialize};

/// Per-rule diagnostic: the rule text as written, whether it succeeded, a
/// human-readable detail, and an optional error string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub condition: String,
    pub success: bool,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConditionResult {
    pub fn ok(condition: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            success: true,
            detail: detail.into(),
            error: None,
        }
    }

    pub fn failed(condition: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            success: false,
            detail: detail.into(),
            error: None,
        }
    }

    pub fn errored(condition: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            condition: condition.into(),
            success: false,
            detail: String::new(),
            error: Some(error.to_string()),
        }
    }
}
