//! Runtime field values and strict equality.
//!
//! The [`Value`] enum is what an accessor hands back for a named field of an
//! element. Besides the comparable kinds (strings, numbers, timestamps, enums,
//! booleans) it distinguishes a field that is present but empty
//! ([`Value::Null`]) from a field the element does not define at all
//! ([`Value::None`]).

use std::cmp::Ordering;

/// Runtime value of a field, borrowed from the element.
///
/// # Example
///
/// ```
/// use seek_first::{Value, Number};
///
/// struct Sprite {
///     name: String,
///     depth: i32,
///     tint: Option<u32>,
/// }
///
/// fn accessor<'a>(sprite: &'a Sprite, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&sprite.name),
///         "depth" => Value::Number(Number::I64(sprite.depth as i64)),
///         // `tint` is always defined on a sprite, even when it has no value.
///         "tint" => sprite.tint.map_or(Value::Null, |t| Value::Number(t.into())),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Enum discriminant value.
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Field is defined on the element but holds no value.
    Null,
    /// Field is defined but its value cannot be compared (lists, nested records).
    Opaque,
    /// Field is not defined on the element.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if the element does not define this field.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if the element defines this field, whatever its value.
    ///
    /// Falsy values (`0`, `false`, `""`) and [`Value::Null`] all count as
    /// present.
    pub fn is_present(&self) -> bool {
        !self.is_none()
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Strict equality: same kind and same value, no coercion.
    ///
    /// A string never equals a number even when they print the same, and
    /// `NaN` equals nothing. Two `Null`s are equal. `Opaque` and `None`
    /// never compare equal, not even to themselves.
    ///
    /// ```
    /// use seek_first::{Value, Number};
    ///
    /// assert!(Value::Number(Number::I64(1)).strict_eq(&Value::Number(Number::F64(1.0))));
    /// assert!(!Value::Number(Number::I64(1)).strict_eq(&Value::String("1")));
    /// ```
    pub fn strict_eq(&self, other: &Value<'_>) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.compare(*b) == Some(Ordering::Equal),
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

/// Numeric value.
///
/// The three variants are one numeric kind for strict equality: `I64(1)`,
/// `U64(1)` and `F64(1.0)` are all equal. Mixed integer variants compare
/// exactly; anything involving `F64` compares through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types. `None` when either is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::I64(a), Number::U64(b)) => Some(compare_signed(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(compare_signed(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

fn compare_signed(a: i64, b: u64) -> Ordering {
    match u64::try_from(a) {
        Ok(a) => a.cmp(&b),
        Err(_) => Ordering::Less,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }
}
