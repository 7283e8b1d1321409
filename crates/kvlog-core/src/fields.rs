//! Field context attached to a logger
//!
//! A [`Fields`] mapping is rendered once, when a logger is built, into the
//! field line that prefixes every message: `key=value ` pairs in ascending key
//! order, each followed by a single space.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Write as _};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// A printable field value
///
/// Closed set of value kinds so that rendering is always deterministic.
/// Anything else that implements `Display` can be captured as text with
/// [`FieldValue::display`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Capture the current `Display` output of any value
    pub fn display(value: &impl fmt::Display) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<char> for FieldValue {
    fn from(v: char) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

macro_rules! impl_from_number {
    ($variant:ident($target:ty): $($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    FieldValue::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_number!(Int(i64): i8, i16, i32, i64, isize);
impl_from_number!(Uint(u64): u8, u16, u32, u64, usize);
impl_from_number!(Float(f64): f64);

impl From<f32> for FieldValue {
    /// Keeps the shortest `f32` text instead of the widened `f64` digits
    fn from(v: f32) -> Self {
        FieldValue::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

/// Key/value context of a logger
///
/// Keys are unique. Iteration and rendering always follow ascending key
/// order, independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the value it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the field line: `key=value ` for every key, ascending
    ///
    /// An empty mapping renders to the empty string.
    pub fn render(&self) -> String {
        let mut line = String::new();
        for (key, value) in &self.0 {
            let _ = write!(line, "{key}={value} ");
        }
        line
    }

    /// Merge `self` (the new fields) beneath `outer`
    ///
    /// Keys present in both keep the value from `outer`.
    pub(crate) fn merged_under(mut self, outer: &Fields) -> Fields {
        for (key, value) in &outer.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, FieldValue>> for Fields {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        Self(map)
    }
}
