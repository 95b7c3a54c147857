use thiserror::Error;

/// A single structural or facet violation found while validating a value
/// against a schema. `path` is a dotted/indexed pointer (e.g. `$.a[0].b`)
/// to the offending location, built up as `validate` recurses.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Fatal errors from `format` — unlike `validate`, which accumulates
/// [`ValidationError`]s and keeps walking, a formatting failure is
/// unrecoverable for the subtree it occurs in (spec.md §4.5: "Formatting
/// errors at response time surface as a top-level response error").
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("{0}: cannot coerce {1} to {2}")]
    Uncoercible(String, &'static str, &'static str),

    #[error("invalid pattern in schema at {0}: {1}")]
    InvalidPattern(String, String),
}
