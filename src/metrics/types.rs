use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use chrono::{DateTime, Utc};

/// A point-in-time measurement handed to the export pipeline.
///
/// Serialization is one-way: serde_json writes a non-finite `value` as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Gauge {
    pub name: String,
    pub value: f64,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub attributes: Attributes,
}

impl Gauge {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        timestamp: i64,
        attributes: Attributes,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            timestamp,
            attributes,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

// Floats compare by bit pattern so gauges can live in a HashSet.
impl PartialEq for Gauge {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value.to_bits() == other.value.to_bits()
            && self.timestamp == other.timestamp
            && self.attributes == other.attributes
    }
}

impl Eq for Gauge {}

impl Hash for Gauge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.to_bits().hash(state);
        self.timestamp.hash(state);
        self.attributes.hash(state);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    /// Reads a command-line style scalar: boolean, then integer, then finite
    /// float, falling back to the raw string. `inf` and `NaN` stay strings.
    pub fn parse_scalar(raw: &str) -> Self {
        if let Ok(b) = raw.parse::<bool>() {
            return AttributeValue::Boolean(b);
        }
        if let Ok(i) = raw.parse::<i64>() {
            return AttributeValue::Integer(i);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => AttributeValue::Float(f),
            _ => AttributeValue::String(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Boolean(a), AttributeValue::Boolean(b)) => a == b,
            (AttributeValue::Integer(a), AttributeValue::Integer(b)) => a == b,
            (AttributeValue::Float(a), AttributeValue::Float(b)) => a.to_bits() == b.to_bits(),
            (AttributeValue::String(a), AttributeValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttributeValue::Boolean(b) => b.hash(state),
            AttributeValue::Integer(i) => i.hash(state),
            AttributeValue::Float(f) => f.to_bits().hash(state),
            AttributeValue::String(s) => s.hash(state),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

/// Descriptive tags attached to a gauge. Keys are kept sorted so that equal
/// tag sets hash and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; an existing key is overwritten.
    pub fn put(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AttributeValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
