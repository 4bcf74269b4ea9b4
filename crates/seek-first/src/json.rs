//! Searching JSON records.
//!
//! Dynamic records are where "does this element define the property" is a
//! real question. For a [`serde_json::Value`] the answer is key membership of
//! the object itself; arrays, strings and other non-object values define no
//! properties at all.

use serde_json::Value as Json;

use crate::matcher::Needle;
use crate::traits::Seekable;
use crate::value::{Number, Value};

impl Seekable for Json {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match self.as_object().and_then(|object| object.get(field)) {
            Some(value) => from_json(value),
            None => Value::None,
        }
    }
}

/// Accessor for slices of [`serde_json::Value`].
///
/// ```
/// use seek_first::{json, Search};
/// use serde_json::json;
///
/// let items = vec![json!({"a": 1}), json!({"b": 2}), json!({"a": 0}), json!({})];
///
/// let found = Search::new().has("a").start(1).first(&items, json::accessor);
/// assert_eq!(found, Some(&items[2]));
/// ```
pub fn accessor<'a>(item: &'a Json, field: &str) -> Value<'a> {
    item.seeker_field_value(field)
}

/// Converts a JSON value to a field [`Value`].
///
/// Arrays and objects are present but not comparable.
pub fn from_json(value: &Json) -> Value<'_> {
    match value {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(number_from_json(n)),
        Json::String(s) => Value::String(s),
        Json::Array(_) | Json::Object(_) => Value::Opaque,
    }
}

/// Converts a scalar JSON value to a [`Needle`].
///
/// Returns `None` for arrays and objects, which no field can equal.
///
/// ```
/// use seek_first::{json, Needle, Number};
/// use serde_json::json;
///
/// assert_eq!(json::needle(&json!("1")), Some(Needle::String("1".into())));
/// assert_eq!(json::needle(&json!(1)), Some(Needle::Number(Number::U64(1))));
/// assert_eq!(json::needle(&json!([1])), None);
/// ```
pub fn needle(value: &Json) -> Option<Needle> {
    match value {
        Json::Null => Some(Needle::Null),
        Json::Bool(b) => Some(Needle::Bool(*b)),
        Json::Number(n) => Some(Needle::Number(number_from_json(n))),
        Json::String(s) => Some(Needle::String(s.clone())),
        Json::Array(_) | Json::Object(_) => None,
    }
}

fn number_from_json(n: &serde_json::Number) -> Number {
    if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}
