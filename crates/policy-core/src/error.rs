use thiserror::Error;

/// Top-level error taxonomy, one variant per stable error code in spec.md
/// §6. Per-rule failures are never wrapped here — they live on
/// `ConditionResult.error` so one bad rule can't abort a request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("invalid_json_decode: {0}")]
    InvalidJsonDecode(String),

    #[error("invalid_json_schema: {0}")]
    InvalidJsonSchema(String),

    #[error("invalid_exec_policies: {0}")]
    InvalidExecPolicies(String),

    #[error("unexpected_formatter_error: {0}")]
    UnexpectedFormatterError(String),

    #[error("unexpected_response_error: {0}")]
    UnexpectedResponseError(String),
}

impl PolicyError {
    /// The stable machine-readable error code (spec.md §6).
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJsonDecode(_) => "invalid_json_decode",
            Self::InvalidJsonSchema(_) => "invalid_json_schema",
            Self::InvalidExecPolicies(_) => "invalid_exec_policies",
            Self::UnexpectedFormatterError(_) => "unexpected_formatter_error",
            Self::UnexpectedResponseError(_) => "unexpected_response_error",
        }
    }
}
