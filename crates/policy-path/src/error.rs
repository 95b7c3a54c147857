use thiserror::Error;

/// Errors produced while parsing a path string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("path must start with '$.'")]
    ExpectedRoot,
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("empty segment in path")]
    EmptySegment,
    #[error("invalid index in path")]
    InvalidIndex,
    #[error("whitespace is not permitted inside a path")]
    Whitespace,
}

/// Errors produced while resolving (`get`/`set`) a parsed path against a
/// [`policy_value::Value`] tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("cannot access property '{0}' on a {1} value")]
    PropertyOnNonContainer(String, &'static str),
    #[error("cannot index a {0} value")]
    IndexOnNonArray(&'static str),
    #[error("index {0} out of bounds (length {1})")]
    IndexOutOfBounds(i64, usize),
    #[error("cannot write property '{0}' into a {1} value")]
    SetPropertyOnIncompatible(String, &'static str),
    #[error("cannot write index into a {0} value")]
    SetIndexOnIncompatible(&'static str),
}
