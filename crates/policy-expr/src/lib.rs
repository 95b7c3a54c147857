//! Expression evaluator for the policy DSL.
//!
//! Two entry points: [`resolve`] turns a `resolve`-style expression string
//! into a [`Value`] (literals, paths, arithmetic, builtins); [`evaluate`]
//! turns an `assertion`-style expression string into a `bool` (comparisons,
//! `IN`/`NOT IN`/`MATCHES`, `AND`/`OR` chains). Both share the quote- and
//! bracket-aware scanning in [`scan`] that lets the grammar do without
//! operator precedence or mandatory parentheses.
//!
//! ```
//! use policy_value::Value;
//! use serde_json::json;
//!
//! let tree: Value = json!({"idade": 25}).into();
//! assert_eq!(policy_expr::resolve("$.idade", &tree).unwrap(), Value::Number(25.0));
//! assert!(policy_expr::evaluate("$.idade >= 18", &tree).unwrap());
//! ```

mod builtins;
mod error;
mod logic;
pub mod regex_cache;
mod resolve;
mod scan;

pub use error::EvalError;
pub use logic::evaluate_bool as evaluate;
pub use resolve::resolve;
