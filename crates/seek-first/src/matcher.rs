//! Property/value matchers.
//!
//! A [`Matcher`] is the optional filter of a search: a property name and an
//! optional [`Needle`] to compare that property against.

use crate::value::{Number, Timestamp, Value};

/// Which elements a search accepts.
///
/// | property | value   | element matches when                                   |
/// |----------|---------|--------------------------------------------------------|
/// | absent   | -       | always                                                 |
/// | present  | absent  | the element defines the property (any value, even falsy) |
/// | present  | present | the property is strictly equal to the value            |
///
/// An empty property name counts as absent.
///
/// # Example
///
/// ```
/// use seek_first::{Matcher, Value, Number};
///
/// let has_depth = Matcher::has("depth");
/// let depth_zero = Matcher::equals("depth", 0);
///
/// assert!(has_depth.test(&Value::Number(Number::I64(0))));
/// assert!(!has_depth.test(&Value::None));
/// assert!(depth_zero.test(&Value::Number(Number::U64(0))));
/// assert!(!depth_zero.test(&Value::String("0")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matcher {
    property: Option<String>,
    value: Option<Needle>,
}

impl Matcher {
    /// Creates a matcher from its optional parts.
    pub fn new(property: Option<&str>, value: Option<Needle>) -> Self {
        Matcher {
            property: property.filter(|p| !p.is_empty()).map(str::to_string),
            value,
        }
    }

    /// A matcher that accepts every element.
    pub fn any() -> Self {
        Matcher::default()
    }

    /// Accepts elements that define `property`, whatever its value.
    pub fn has(property: &str) -> Self {
        Matcher::new(Some(property), None)
    }

    /// Accepts elements whose `property` is strictly equal to `value`.
    pub fn equals(property: &str, value: impl Into<Needle>) -> Self {
        Matcher::new(Some(property), Some(value.into()))
    }

    /// The property this matcher inspects, if any.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// The value the property must equal, if any.
    pub fn value(&self) -> Option<&Needle> {
        self.value.as_ref()
    }

    /// Returns `true` if this matcher accepts every element.
    pub fn is_any(&self) -> bool {
        self.property.is_none()
    }

    /// Tests an already extracted field value.
    ///
    /// With no property every value passes, including [`Value::None`].
    pub fn test(&self, field_value: &Value<'_>) -> bool {
        if self.property.is_none() {
            return true;
        }
        match &self.value {
            None => field_value.is_present(),
            Some(needle) => needle.as_value().strict_eq(field_value),
        }
    }

    /// Tests an element, extracting the property through `accessor`.
    ///
    /// The accessor is not called when there is no property.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        match &self.property {
            None => true,
            Some(property) => self.test(&accessor(item, property)),
        }
    }
}

/// Owned value a property is compared against.
///
/// Unlike [`Value`], which borrows from the element, `Needle` owns its data
/// so it can be stored in a [`Matcher`]. There is no needle for "absent";
/// use [`Matcher::has`] for an existence test.
#[derive(Debug, Clone, PartialEq)]
pub enum Needle {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Timestamp value.
    Timestamp(Timestamp),
    /// Enum discriminant.
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Matches fields that are defined but empty.
    Null,
}

impl Needle {
    /// Borrows this needle as a [`Value`] for comparison.
    pub fn as_value(&self) -> Value<'_> {
        match self {
            Needle::String(s) => Value::String(s),
            Needle::Number(n) => Value::Number(*n),
            Needle::Timestamp(t) => Value::Timestamp(*t),
            Needle::Enum(d) => Value::Enum(*d),
            Needle::Bool(b) => Value::Bool(*b),
            Needle::Null => Value::Null,
        }
    }

    /// Creates an enum needle from a [`SeekerEnum`](crate::SeekerEnum) variant.
    pub fn from_enum<E: crate::SeekerEnum>(variant: &E) -> Self {
        Needle::Enum(variant.seeker_discriminant())
    }
}

impl From<String> for Needle {
    fn from(s: String) -> Self {
        Needle::String(s)
    }
}

impl From<&str> for Needle {
    fn from(s: &str) -> Self {
        Needle::String(s.to_string())
    }
}

impl From<Number> for Needle {
    fn from(n: Number) -> Self {
        Needle::Number(n)
    }
}

impl From<Timestamp> for Needle {
    fn from(t: Timestamp) -> Self {
        Needle::Timestamp(t)
    }
}

impl From<bool> for Needle {
    fn from(b: bool) -> Self {
        Needle::Bool(b)
    }
}

impl From<()> for Needle {
    fn from(_: ()) -> Self {
        Needle::Null
    }
}

macro_rules! needle_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Needle {
                fn from(n: $source) -> Self {
                    Needle::Number(Number::from(n))
                }
            }
        )*
    };
}

needle_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
