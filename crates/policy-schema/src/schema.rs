use indexmap::IndexMap;
use policy_value::Value;
use serde::{Deserialize, Serialize};

/// Declared JSON-Schema kind (draft-07 subset, spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl SchemaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// A recursive schema node: `type` plus the facets relevant to that type
/// (spec.md §3, §4.4). Unset facets are simply absent — no defaulting
/// happens at this layer except `additionalProperties`, which defaults to
/// `true` per §4.4.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default = "default_additional_properties")]
    pub additional_properties: bool,

    pub items: Option<Box<Schema>>,

    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub multiple_of: Option<f64>,

    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "enum")]
    pub enum_values: Vec<Value>,
}

fn default_additional_properties() -> bool {
    true
}

impl Schema {
    pub fn object() -> Self {
        Self {
            kind: Some(SchemaType::Object),
            ..Default::default()
        }
    }
}
