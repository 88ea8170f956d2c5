//! Interop with `serde` and standard `serde_json` trees.
//!
//! Conversion to standard JSON goes through [`Value::kind`], so the classified
//! type decides the output: a string that reads as a date stays a string, a bare
//! `undefined` becomes `null`, and numeric text becomes a JSON number.

use crate::array::Array;
use crate::object::Object;
use crate::value::{Kind, Value};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number};

impl Value {
    /// Convert into a standard `serde_json::Value`.
    pub fn to_serde(&self) -> serde_json::Value {
        match self {
            Value::Array(array) => {
                serde_json::Value::Array(array.iter().map(Value::to_serde).collect())
            }
            Value::Object(object) => {
                let map: Map<String, serde_json::Value> = object
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_serde()))
                    .collect();
                serde_json::Value::Object(map)
            }
            scalar => scalar_to_serde(scalar),
        }
    }
}

fn scalar_to_serde(scalar: &Value) -> serde_json::Value {
    let text = scalar.as_text().unwrap_or("null");
    match scalar.kind() {
        Kind::Null | Kind::Undefined => serde_json::Value::Null,
        Kind::Boolean => serde_json::Value::Bool(text == "true"),
        Kind::Numeric => match to_number(text) {
            Some(n) => serde_json::Value::Number(n),
            None => serde_json::Value::String(text.to_string()),
        },
        Kind::String | Kind::Date | Kind::Array | Kind::Object => {
            serde_json::Value::String(scalar.as_string().unwrap_or_default())
        }
    }
}

/// Numeric text as an integer when it fits, otherwise as a double.
fn to_number(text: &str) -> Option<Number> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::from(i));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_serde().serialize(serializer)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::NULL,
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::numeric_from_str(&u.to_string())
                } else {
                    Value::from(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::string(&s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().collect::<Object>())
            }
        }
    }
}
