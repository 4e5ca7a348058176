use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar credential value.
///
/// Credentials arrive as untyped JSON; only scalars can be written to the
/// environment, so anything else is rejected during conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CredentialValue {
    /// Written verbatim
    String(String),
    /// Any JSON integer within `i64` or `u64`
    Integer(i128),
    /// Any other JSON number
    Float(f64),
    /// `true` or `false`
    Boolean(bool),
    /// Written as the empty string
    Null,
}

impl CredentialValue {
    /// Convert a JSON value, returning `None` for arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Number(n) => Self::from_number(n),
            Value::Bool(b) => Some(Self::Boolean(*b)),
            Value::Null => Some(Self::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_number(n: &Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Some(Self::Integer(i128::from(i)))
        } else if let Some(u) = n.as_u64() {
            Some(Self::Integer(i128::from(u)))
        } else {
            n.as_f64().map(Self::Float)
        }
    }

    /// Textual form written into the environment
    pub fn to_env_value(&self) -> String {
        self.to_string()
    }
}

/// Default textual representation.
///
/// Floats use the `f64` `Display` impl: the shortest decimal that round-trips,
/// always positional (`1e21` prints as `1000000000000000000000`). `null`
/// becomes the empty string.
impl fmt::Display for CredentialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

/// Credential map of a single service instance, keyed in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials(BTreeMap<String, CredentialValue>);

impl Credentials {
    /// Interpret an untyped `credentials` value as a flat map of scalars.
    ///
    /// Returns `None` when the value is not an object or when any entry is
    /// itself an array or object. The instance is then skipped as a whole.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        object
            .iter()
            .map(|(key, value)| CredentialValue::from_json(value).map(|v| (key.clone(), v)))
            .collect::<Option<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CredentialValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of credentials
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no credentials
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
