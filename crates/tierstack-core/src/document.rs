// File: crates/tierstack-core/src/document.rs
// Summary: Tagged value tree for chart options; `Raw` marks verbatim JavaScript.

use std::collections::BTreeMap;

/// One node of a chart options document.
/// Objects keep their keys sorted; arrays keep insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartValue {
    Bool(bool),
    Int(i64),
    Text(String),
    /// JavaScript emitted as is, never quoted or escaped.
    Raw(String),
    Array(Vec<ChartValue>),
    Object(BTreeMap<String, ChartValue>),
}

/// The assembled options object handed to `Highcharts.chart`.
pub type ChartDocument = ChartValue;

impl ChartValue {
    pub fn text(s: impl Into<String>) -> Self { Self::Text(s.into()) }

    pub fn raw(code: impl Into<String>) -> Self { Self::Raw(code.into()) }

    /// Build an object from `(key, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ChartValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Follow a dotted path of object keys, e.g. `"yAxis.title.text"`.
    pub fn pointer(&self, path: &str) -> Option<&ChartValue> {
        path.split('.').try_fold(self, |node, key| match node {
            ChartValue::Object(map) => map.get(key),
            _ => None,
        })
    }

    pub fn as_array(&self) -> Option<&[ChartValue]> {
        match self {
            ChartValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ChartValue::Text(s) | ChartValue::Raw(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for ChartValue {
    fn from(v: bool) -> Self { Self::Bool(v) }
}

impl From<i64> for ChartValue {
    fn from(v: i64) -> Self { Self::Int(v) }
}

impl From<&str> for ChartValue {
    fn from(v: &str) -> Self { Self::Text(v.to_string()) }
}

impl From<String> for ChartValue {
    fn from(v: String) -> Self { Self::Text(v) }
}

impl<T: Into<ChartValue>> From<Vec<T>> for ChartValue {
    fn from(v: Vec<T>) -> Self { Self::Array(v.into_iter().map(Into::into).collect()) }
}
