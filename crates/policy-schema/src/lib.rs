//! Draft-07 JSON Schema subset (spec.md §4.4): [`validate`] an inbound
//! document and report every violation found; [`format`] an outbound
//! document by coercing values to schema-declared types.
//!
//! ```
//! use policy_schema::Schema;
//! use serde_json::json;
//!
//! let schema: Schema = serde_json::from_value(json!({
//!     "type": "object",
//!     "properties": {"valor": {"type": "number"}},
//!     "required": ["valor"]
//! })).unwrap();
//! let data = serde_json::json!({"valor": "10"}).into();
//! assert!(policy_schema::format(&data, &schema).is_ok());
//! ```

mod error;
mod format;
mod schema;
mod validate;

pub use error::{SchemaError, ValidationError};
pub use format::format;
pub use schema::{Schema, SchemaType};
pub use validate::validate;
