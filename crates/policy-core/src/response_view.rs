use crate::types::Response;

impl Response {
    /// Renders the wire body for this response. In debug mode the full
    /// diagnostic structure is returned; otherwise only the
    /// schema-formatted `data` (spec.md §6).
    pub fn to_wire_json(&self, debug: bool) -> serde_json::Value {
        if debug {
            serde_json::to_value(self).expect("Response fields are all JSON-representable")
        } else {
            serde_json::json!({ "data": serde_json::Value::from(self.data.clone()) })
        }
    }
}
