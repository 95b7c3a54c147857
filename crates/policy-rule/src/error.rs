use thiserror::Error;

/// Errors produced while dispatching or executing a single rule line.
///
/// These never unwind past the rule that produced them — the executor
/// catches each one and folds it into that rule's `ConditionResult.error`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    #[error("line does not match any known rule form: '{0}'")]
    UnrecognizedForm(String),

    #[error("invalid path '{0}': {1}")]
    InvalidPath(String, String),

    #[error("path resolution failed: {0}")]
    PathResolution(String),

    #[error("invalid JSON literal in ADD: '{0}': {1}")]
    InvalidJsonLiteral(String, String),

    #[error("ADD target is neither Null/absent nor an Array: got {0}")]
    AddTargetNotArray(&'static str),

    #[error(transparent)]
    Eval(#[from] policy_expr::EvalError),
}

impl From<policy_path::ParseError> for RuleError {
    fn from(e: policy_path::ParseError) -> Self {
        RuleError::InvalidPath(String::new(), e.to_string())
    }
}

impl From<policy_path::ResolveError> for RuleError {
    fn from(e: policy_path::ResolveError) -> Self {
        RuleError::PathResolution(e.to_string())
    }
}
