use crate::error::PolicyError;
use indexmap::IndexMap;

/// An insertion-ordered mapping from policy name to its ordered rule lines
/// (spec.md §3). Loaded once at startup and treated as immutable
/// thereafter (spec.md §5).
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySet {
    policies: IndexMap<String, Vec<String>>,
}

impl PolicySet {
    /// Parses a policy file already loaded into memory as bytes (spec.md
    /// §1: "The core receives already-loaded ... policy definitions as
    /// byte blobs"). A malformed file is a fatal, startup-time error
    /// (spec.md §7).
    pub fn load_yaml(bytes: &[u8]) -> Result<Self, PolicyError> {
        let policies: IndexMap<String, Vec<String>> = serde_yaml::from_slice(bytes)
            .map_err(|e| PolicyError::InvalidExecPolicies(e.to_string()))?;
        Ok(Self { policies })
    }

    pub fn rules_for(&self, name: &str) -> Option<&[String]> {
        self.policies.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.policies.contains_key(name)
    }
}
