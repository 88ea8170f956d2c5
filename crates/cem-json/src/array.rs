//! Ordered array container.

use crate::error::Result;
use crate::object::Object;
use crate::parser;
use crate::serializer;
use crate::value::{Kind, Value};
use chrono::{DateTime, Utc};

/// An ordered list of values. Duplicates and `null` placeholders are allowed.
///
/// Index-based lookups return `None` when the index is out of range or the element
/// cannot be read as the requested type. `insert`, `set` and `remove` panic on an
/// out-of-range index, like the corresponding `Vec` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Classified type of the element at `index`.
    pub fn kind(&self, index: usize) -> Option<Kind> {
        self.get(index).map(Value::kind)
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.kind(index) == Some(Kind::Null)
    }

    pub fn is_undefined(&self, index: usize) -> bool {
        self.kind(index) == Some(Kind::Undefined)
    }

    pub fn is_boolean(&self, index: usize) -> bool {
        self.kind(index) == Some(Kind::Boolean)
    }

    pub fn is_numeric(&self, index: usize) -> bool {
        self.kind(index) == Some(Kind::Numeric)
    }

    pub fn is_date(&self, index: usize) -> bool {
        self.kind(index) == Some(Kind::Date)
    }

    pub fn is_string(&self, index: usize) -> bool {
        self.get(index).is_some_and(Value::is_string)
    }

    pub fn is_array(&self, index: usize) -> bool {
        self.get(index).is_some_and(Value::is_array)
    }

    pub fn is_object(&self, index: usize) -> bool {
        self.get(index).is_some_and(Value::is_object)
    }

    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(Value::as_bool)
    }

    pub fn get_char(&self, index: usize) -> Option<char> {
        self.get(index).and_then(Value::as_char)
    }

    pub fn get_i32(&self, index: usize) -> Option<i32> {
        self.get(index).and_then(Value::as_i32)
    }

    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(Value::as_i64)
    }

    pub fn get_f32(&self, index: usize) -> Option<f32> {
        self.get(index).and_then(Value::as_f32)
    }

    pub fn get_f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(Value::as_f64)
    }

    pub fn get_date(&self, index: usize) -> Option<DateTime<Utc>> {
        self.get(index).and_then(Value::as_date)
    }

    pub fn get_string(&self, index: usize) -> Option<String> {
        self.get(index).and_then(Value::as_string)
    }

    pub fn get_array(&self, index: usize) -> Option<&Array> {
        self.get(index).and_then(Value::as_array)
    }

    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.get(index).and_then(Value::as_object)
    }

    /// Append a value. Anything convertible into a [`Value`] is accepted.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn add_null(&mut self) -> &mut Self {
        self.add(Value::NULL)
    }

    pub fn add_undefined(&mut self) -> &mut Self {
        self.add(Value::UNDEFINED)
    }

    /// Evaluate `source` and append the result.
    pub fn add_json_str(&mut self, source: &str) -> Result<&mut Self> {
        Ok(self.add(parser::eval(source)?))
    }

    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> &mut Self {
        self.items.insert(index, value.into());
        self
    }

    pub fn insert_json_str(&mut self, index: usize, source: &str) -> Result<&mut Self> {
        Ok(self.insert(index, parser::eval(source)?))
    }

    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> &mut Self {
        self.items[index] = value.into();
        self
    }

    pub fn set_json_str(&mut self, index: usize, source: &str) -> Result<&mut Self> {
        Ok(self.set(index, parser::eval(source)?))
    }

    pub fn remove(&mut self, index: usize) -> Value {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_json(&self, strict: bool) -> String {
        let mut out = String::new();
        serializer::write_array(self, strict, &mut out);
        out
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
