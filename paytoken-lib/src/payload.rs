//! Notification payload model.
//!
//! A [`Payload`] is the top level of a gateway notification: an ordered
//! mapping from case-sensitive field names to [`FieldValue`]s. Nested objects
//! and arrays are never walked; they are carried whole as
//! [`FieldValue::Structured`] and contribute their compact JSON text.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

use crate::{Result, TokenError};

/// A single top-level payload value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Plain string, used verbatim.
    String(String),
    /// Boolean, rendered as lowercase `true` / `false`.
    Bool(bool),
    /// JSON number, rendered with exactly the digits it was sent with.
    Number(Number),
    /// JSON `null`, rendered as the empty string.
    Null,
    /// Nested object or array, rendered as compact JSON.
    Structured(Value),
}

impl FieldValue {
    /// Textual form of the value as it enters the digest input.
    ///
    /// ```
    /// use paytoken_lib::FieldValue;
    ///
    /// assert_eq!(FieldValue::from(true).canonical_text(), "true");
    /// assert_eq!(FieldValue::from(19200u64).canonical_text(), "19200");
    /// assert_eq!(FieldValue::from("AUTHORIZED").canonical_text(), "AUTHORIZED");
    /// ```
    pub fn canonical_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Bool(true) => "true".to_string(),
            Self::Bool(false) => "false".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Null => String::new(),
            Self::Structured(v) => v.to_string(),
        }
    }

    /// Convert back into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Null => Value::Null,
            Self::Structured(v) => v.clone(),
        }
    }

    /// Returns true for nested objects and arrays.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::Null => Self::Null,
            nested @ (Value::Object(_) | Value::Array(_)) => Self::Structured(nested),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for FieldValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

/// Ordered mapping of field name to value.
///
/// Inserting a name that is already present replaces its value and keeps the
/// original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    fields: IndexMap<String, FieldValue>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Remove a field by exact name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Build a payload from a parsed JSON value.
    ///
    /// Fails with [`TokenError::MalformedInput`] unless the value is an object.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(name, value)| (name.clone(), FieldValue::from(value.clone())))
                .collect()),
            other => Err(not_an_object(other)),
        }
    }

    /// Parse a payload from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Render the payload as a JSON object, preserving field order.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl TryFrom<Value> for Payload {
    type Error = TokenError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(not_an_object(&other)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, &value.to_json())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

fn not_an_object(value: &Value) -> TokenError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    TokenError::malformed(format!("expected a JSON object, got {}", kind))
}
