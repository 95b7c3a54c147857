use thiserror::Error;

/// Errors produced while resolving or evaluating a DSL expression string.
///
/// Mirrors the teacher's `json_expression::JsError` split of concerns — one
/// variant per distinct failure mode, each carrying enough text for a
/// `ConditionResult.error` to be legible on its own.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("invalid path '{0}': {1}")]
    InvalidPath(String, String),

    #[error("path resolution failed for '{0}': {1}")]
    PathResolution(String, String),

    #[error("unparseable expression: '{0}'")]
    Syntax(String),

    #[error("expected a number, got {0}")]
    NotNumeric(String),

    #[error("expected a string, got {0}")]
    NotString(String),

    #[error("expected an array, got {0}")]
    NotArray(String),

    #[error("expected an object, got {0}")]
    NotObject(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown builtin function '{0}'")]
    UnknownBuiltin(String),

    #[error("'{0}' expects {1} argument(s), got {2}")]
    Arity(String, &'static str, usize),

    #[error("object has no property '{0}'")]
    MissingProperty(String),

    #[error("invalid regular expression '{0}': {1}")]
    InvalidRegex(String, String),

    #[error("expected a boolean result, got {0}")]
    NotBoolean(String),

    #[error("unsupported comparison operator '{0}'")]
    UnsupportedOperator(String),

    #[error("right-hand side of IN/NOT IN must be an array literal")]
    InNotArray,
}

impl From<policy_path::ParseError> for EvalError {
    fn from(e: policy_path::ParseError) -> Self {
        EvalError::InvalidPath(String::new(), e.to_string())
    }
}

impl From<policy_path::ResolveError> for EvalError {
    fn from(e: policy_path::ResolveError) -> Self {
        EvalError::PathResolution(String::new(), e.to_string())
    }
}
