//! Log argument values and handle metadata
//!
//! This module provides:
//! - `LogValue`: a single logged argument or metadata value
//! - `Metadata`: string-keyed values attached to a logger handle

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for log arguments and metadata fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<LogValue>),
    Map(BTreeMap<String, LogValue>),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Null => write!(f, "null"),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::String(s) => write!(f, "{}", s),
            LogValue::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            LogValue::Map(map) => {
                write!(f, "{{")?;
                for (idx, (k, v)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl LogValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LogValue::Null => serde_json::Value::Null,
            LogValue::Bool(b) => serde_json::Value::Bool(*b),
            LogValue::Int(i) => serde_json::Value::Number((*i).into()),
            LogValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LogValue::String(s) => serde_json::Value::String(s.clone()),
            LogValue::List(items) => {
                serde_json::Value::Array(items.iter().map(LogValue::to_json_value).collect())
            }
            LogValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::String(s.clone())
    }
}

impl From<char> for LogValue {
    fn from(c: char) -> Self {
        LogValue::String(c.to_string())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogValue {
                fn from(i: $ty) -> Self {
                    LogValue::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the i64 range keep their exact digits as a string.
macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogValue {
                fn from(i: $ty) -> Self {
                    i64::try_from(i)
                        .map(LogValue::Int)
                        .unwrap_or_else(|_| LogValue::String(i.to_string()))
                }
            }
        )*
    };
}

impl_from_wide_int!(isize, usize, u64, i128, u128);

impl From<f32> for LogValue {
    fn from(f: f32) -> Self {
        LogValue::Float(f64::from(f))
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogValue::Null)
    }
}

impl<T: Into<LogValue>> From<Vec<T>> for LogValue {
    fn from(items: Vec<T>) -> Self {
        LogValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Metadata> for LogValue {
    fn from(meta: Metadata) -> Self {
        LogValue::Map(meta.fields)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => LogValue::Null,
            serde_json::Value::Bool(b) => LogValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => LogValue::Int(i),
                None => n.as_f64().map(LogValue::Float).unwrap_or(LogValue::Null),
            },
            serde_json::Value::String(s) => LogValue::String(s),
            serde_json::Value::Array(items) => {
                LogValue::List(items.into_iter().map(LogValue::from).collect())
            }
            serde_json::Value::Object(map) => LogValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, LogValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Metadata attached to a logger handle and copied into every record it emits.
///
/// Deriving a handle with [`Logger::meta`](crate::Logger::meta) replaces the
/// whole mapping; merging keys happens only while building one `Metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, LogValue>,
}

impl Metadata {
    /// Create a new empty metadata map
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field (builder style)
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<LogValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field, overwriting any previous value for the key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<LogValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&LogValue> {
        self.fields.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut LogValue> {
        self.fields.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get all fields
    pub fn fields(&self) -> &BTreeMap<String, LogValue> {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LogValue)> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<LogValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Metadata
where
    K: Into<String>,
    V: Into<LogValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
