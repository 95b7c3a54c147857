//! Request/response binding, policy-set loading, and orchestration for the
//! policy engine: validates inbound `data` against a schema, runs each
//! requested policy's rules in declared order, then formats the result.
//!
//! ```
//! use policy_core::{evaluate, PolicySet, Request};
//! use serde_json::json;
//!
//! let policies = PolicySet::load_yaml(b"maioridade:\n  - \"$.idade >= 18\"\n").unwrap();
//! let request: Request = serde_json::from_value(json!({
//!     "id": "req-1",
//!     "data": {"idade": 25},
//!     "policies": ["maioridade"]
//! })).unwrap();
//! let response = evaluate(&policies, None, request);
//! assert!(response.passed);
//! ```

mod engine;
mod error;
mod policy_set;
mod response_view;
mod types;

pub use engine::evaluate;
pub use error::PolicyError;
pub use policy_set::PolicySet;
pub use types::{Context, PolicyResult, Request, Response, ResponseError};
