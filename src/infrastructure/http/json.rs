use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// How object keys in an upstream document are matched against field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMatching {
    /// Keys must match the wire type's names exactly.
    Exact,
    /// Keys are folded to lower case before decoding; wire types declare lower-case names.
    #[default]
    CaseInsensitive,
}

/// Decodes upstream JSON bodies with a configurable key matching policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    key_matching: KeyMatching,
}

impl JsonDecoder {
    pub fn new(key_matching: KeyMatching) -> Self {
        Self { key_matching }
    }

    pub fn case_insensitive() -> Self {
        Self::new(KeyMatching::CaseInsensitive)
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> serde_json::Result<T> {
        match self.key_matching {
            KeyMatching::Exact => serde_json::from_str(body),
            KeyMatching::CaseInsensitive => {
                let document: Value = serde_json::from_str(body)?;
                serde_json::from_value(fold_keys(document))
            }
        }
    }
}

/// Lower-cases every object key, at any depth. On collisions the later key wins.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, nested)| (key.to_lowercase(), fold_keys(nested)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
