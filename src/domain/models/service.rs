use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::credential::Credentials;

/// Variable populated by Cloud Foundry with the bound services
pub const VCAP_SERVICES_ENV: &str = "VCAP_SERVICES";

/// Decoded contents of `VCAP_SERVICES`.
///
/// Maps a service label (`postgres`, `user-provided`, ...) to the bound
/// instances of that service. Labels are kept sorted, which fixes the order
/// in which instances are processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceBindingSet(BTreeMap<String, Vec<ServiceInstance>>);

impl ServiceBindingSet {
    /// Decode from raw JSON bytes
    ///
    /// Text that is not valid UTF-8 is a decode error, not an empty set.
    pub fn from_json(raw: impl AsRef<[u8]>) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw.as_ref())
    }

    /// All instances as `(label, instance)`, labels in sorted order and
    /// instances in the order they were listed.
    pub fn instances(&self) -> impl Iterator<Item = (&str, &ServiceInstance)> {
        self.0
            .iter()
            .flat_map(|(label, instances)| instances.iter().map(move |i| (label.as_str(), i)))
    }

    /// Whether no instance is bound under any label
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// One bound service instance.
///
/// Only `name` and `credentials` are read; the platform's other fields
/// (`label`, `plan`, `tags`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// Instance name, source of the variable prefix
    pub name: String,

    /// Untyped credentials; only a flat map of scalars is bound
    #[serde(default)]
    pub credentials: Value,
}

impl ServiceInstance {
    /// Credentials as a flat scalar map, or `None` if they have another shape
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_value(&self.credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cloud_foundry_payload() {
        let raw = r#"{
            "user-provided": [{
                "name": "t",
                "label": "user-provided",
                "tags": [],
                "credentials": {"a": "b"}
            }, {
                "name": "u",
                "credentials": {"a": "c"}
            }],
            "postgres": [{
                "name": "db",
                "plan": "small",
                "credentials": {"username": "u"}
            }]
        }"#;

        let set = ServiceBindingSet::from_json(raw).unwrap();
        let order: Vec<_> = set
            .instances()
            .map(|(label, i)| (label, i.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("postgres", "db"), ("user-provided", "t"), ("user-provided", "u")]
        );
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let raw: &[u8] = b"{\"s\":[{\"name\":\"s\",\"credentials\":{\"a\":\"\xff\"}}]}";
        assert!(ServiceBindingSet::from_json(raw).is_err());
    }

    #[test]
    fn test_decode_empty_object() {
        let set = ServiceBindingSet::from_json("{}").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.instances().count(), 0);
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(ServiceBindingSet::from_json("blah").is_err());
        assert!(ServiceBindingSet::from_json("[]").is_err());
        assert!(ServiceBindingSet::from_json(r#"{"s": {"name": "s"}}"#).is_err());
        assert!(ServiceBindingSet::from_json(r#"{"s": [{"credentials": {}}]}"#).is_err());
        assert!(ServiceBindingSet::from_json(r#"{"s": [{"name": 1}]}"#).is_err());
    }

    #[test]
    fn test_missing_credentials_are_unsupported() {
        let set = ServiceBindingSet::from_json(r#"{"s": [{"name": "s"}]}"#).unwrap();
        let (_, instance) = set.instances().next().unwrap();
        assert_eq!(instance.credentials, Value::Null);
        assert!(instance.credentials().is_none());
    }
}
