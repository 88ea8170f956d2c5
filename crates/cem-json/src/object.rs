//! Key-sorted object container.

use crate::array::Array;
use crate::error::Result;
use crate::parser;
use crate::serializer;
use crate::value::{Kind, Value};
use chrono::{DateTime, Utc};
use std::collections::btree_map::{self, BTreeMap};

/// A map from string keys to values.
///
/// Keys are kept in lexicographic order, not insertion order. Iteration and
/// serialization both follow that order. Setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Object {
    items: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.items.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.items.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.items.get_mut(key)
    }

    /// Classified type of the value under `key`.
    pub fn kind(&self, key: &str) -> Option<Kind> {
        self.get(key).map(Value::kind)
    }

    pub fn is_null(&self, key: &str) -> bool {
        self.kind(key) == Some(Kind::Null)
    }

    pub fn is_undefined(&self, key: &str) -> bool {
        self.kind(key) == Some(Kind::Undefined)
    }

    pub fn is_boolean(&self, key: &str) -> bool {
        self.kind(key) == Some(Kind::Boolean)
    }

    pub fn is_numeric(&self, key: &str) -> bool {
        self.kind(key) == Some(Kind::Numeric)
    }

    pub fn is_date(&self, key: &str) -> bool {
        self.kind(key) == Some(Kind::Date)
    }

    pub fn is_string(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_string)
    }

    pub fn is_array(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_array)
    }

    pub fn is_object(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_object)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_char(&self, key: &str) -> Option<char> {
        self.get(key).and_then(Value::as_char)
    }

    pub fn get_i32(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(Value::as_i32)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Value::as_f32)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_date(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).and_then(Value::as_date)
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_string)
    }

    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Value::as_object)
    }

    /// Store a value under `key`, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn set_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.set(key, Value::NULL)
    }

    pub fn set_undefined(&mut self, key: impl Into<String>) -> &mut Self {
        self.set(key, Value::UNDEFINED)
    }

    /// Evaluate `source` and store the result under `key`.
    pub fn set_json_str(&mut self, key: impl Into<String>, source: &str) -> Result<&mut Self> {
        Ok(self.set(key, parser::eval(source)?))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.items.remove(key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_json(&self, strict: bool) -> String {
        let mut out = String::new();
        serializer::write_object(self, strict, &mut out);
        out
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
