//! Rule executor: recognizes and runs one DSL rule line against a shared,
//! mutable [`policy_value::Value`] tree (spec.md §4.3).
//!
//! ```
//! use policy_value::Value;
//! use serde_json::json;
//!
//! let mut data: Value = json!({"valor": 200.0}).into();
//! let result = policy_rule::execute_rule("SET $.desconto = $.valor * 0.1", &mut data);
//! assert!(result.success);
//! assert_eq!(data.get_property("desconto"), Some(&Value::Number(20.0)));
//! ```

mod dispatch;
mod error;
mod patterns;
mod types;

pub use dispatch::execute_rule;
pub use error::RuleError;
pub use types::ConditionResult;
