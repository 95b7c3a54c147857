//! Path parser and `get`/`set` resolver for the policy engine's dotted /
//! indexed path subset (`$.a.b[2].c`) — spec.md §4.1.
//!
//! # Example
//!
//! ```
//! use policy_path::{parse, get, set};
//! use policy_value::Value;
//! use serde_json::json;
//!
//! let mut tree: Value = json!({}).into();
//! let path = parse("$.a.b").unwrap();
//! set(&mut tree, &path, Value::Number(1.0)).unwrap();
//! assert_eq!(get(&tree, &path).unwrap(), Value::Number(1.0));
//! ```

mod error;
mod eval;
mod parser;
mod types;

pub use error::{ParseError, ResolveError};
pub use eval::{get, set};
pub use parser::parse;
pub use types::{Path, Segment};
