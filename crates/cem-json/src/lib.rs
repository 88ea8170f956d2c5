//! # cem-json
//!
//! Lenient JSON reader and writer for the CEM client.
//!
//! The dialect accepts JavaScript object-literal syntax on top of JSON: bare
//! identifier keys, single- or double-quoted strings, `undefined`, hexadecimal
//! `0x` integers and empty array slots. Documents parse into a [`Value`] tree whose
//! scalars keep their canonical text and decide their type lazily, so the same text
//! can be read as a boolean, number, date or string depending on the accessor.
//!
//! ## Quick start
//!
//! ```rust
//! use cem_json::{eval, Kind, Object, Value};
//!
//! let value = eval(r#"{b:"two", a:1, 'c d':[true,,3]}"#).unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object.get_i32("a"), Some(1));
//! assert_eq!(object.kind("b"), Some(Kind::String));
//!
//! // Keys are always sorted; strict output quotes them, loose output does not.
//! assert_eq!(value.to_json(true), r#"{"a":1,"b":"two","c d":[true,null,3]}"#);
//! assert_eq!(value.to_json(false), r#"{a:1,b:"two",'c d':[true,null,3]}"#);
//!
//! let mut built = Object::new();
//! built.set("a", 1).set("name", "Ann");
//! assert_eq!(Value::from(built).to_json(true), r#"{"a":1,"name":"Ann"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`]: forward-only character cursor with diagnostic windows
//! - [`parser`]: `eval`, `eval_array`, `eval_object`
//! - [`value`], [`array`], [`object`]: the value tree and its containers
//! - [`serializer`]: strict and loose text output, string escaping
//! - [`coerce`]: type classification and string decoding of scalar text
//! - [`date`]: accepted date layouts
//! - [`error`]: error types for parse failures

pub mod array;
pub mod coerce;
mod convert;
pub mod date;
pub mod error;
pub mod object;
pub mod parser;
pub mod serializer;
pub mod tokenizer;
pub mod value;

pub use array::Array;
pub use coerce::classify;
pub use error::{JsonError, Literal};
pub use object::Object;
pub use parser::{eval, eval_array, eval_object};
pub use serializer::to_json_string;
pub use value::{Kind, Text, Value};
