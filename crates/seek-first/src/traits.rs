//! Field access traits.
//!
//! [`Seekable`] is how a type tells the search which properties it defines.
//! Rust types have no prototype chain, so "own attribute" simply means a
//! name the implementation answers with something other than [`Value::None`].

use crate::value::{Timestamp, Value};

/// Trait for types that can be searched by property.
///
/// # Example
///
/// ```
/// use seek_first::{Seekable, Value, Number};
///
/// struct Sprite {
///     name: String,
///     depth: i32,
///     visible: bool,
/// }
///
/// impl Seekable for Sprite {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "depth" => Value::Number(Number::I64(self.depth as i64)),
///             "visible" => Value::Bool(self.visible),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let sprite = Sprite { name: "ship".into(), depth: 0, visible: false };
/// assert!(sprite.seeker_field_value("depth").is_present());
/// assert!(!sprite.seeker_field_value("alpha").is_present());
/// ```
pub trait Seekable {
    /// Returns the value of `field`, or [`Value::None`] if this value does
    /// not define it.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Returns `true` if this value defines `field`, whatever its value.
    fn seeker_has_field(&self, field: &str) -> bool {
        self.seeker_field_value(field).is_present()
    }

    /// Accessor function form of [`seeker_field_value`](Self::seeker_field_value),
    /// for passing to [`Search`](crate::Search) methods.
    ///
    /// ```ignore
    /// let found = search.first(&sprites, Sprite::accessor);
    /// ```
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

impl<S: Seekable + ?Sized> Seekable for &S {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        (**self).seeker_field_value(field)
    }
}

impl<S: Seekable + ?Sized> Seekable for Box<S> {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        (**self).seeker_field_value(field)
    }
}

/// Converts enum variants to stable discriminants for [`Value::Enum`] and
/// [`Needle::Enum`](crate::Needle::Enum).
///
/// ```
/// use seek_first::{Needle, SeekerEnum};
///
/// enum Layer {
///     Background,
///     World,
///     Ui,
/// }
///
/// impl SeekerEnum for Layer {
///     fn seeker_discriminant(&self) -> u32 {
///         match self {
///             Layer::Background => 0,
///             Layer::World => 1,
///             Layer::Ui => 2,
///         }
///     }
/// }
///
/// assert_eq!(Needle::from_enum(&Layer::Ui), Needle::Enum(2));
/// ```
pub trait SeekerEnum {
    /// Returns the discriminant value for this enum variant.
    fn seeker_discriminant(&self) -> u32;
}

/// Converts datetime types to a [`Timestamp`].
pub trait SeekerTimestamp {
    /// Converts this value to a [`Timestamp`] for comparison.
    fn seeker_timestamp(&self) -> Timestamp;
}

impl SeekerTimestamp for i64 {
    fn seeker_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl SeekerTimestamp for std::time::SystemTime {
    fn seeker_timestamp(&self) -> Timestamp {
        let millis = match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis())
                .map(|m| -m)
                .unwrap_or(i64::MIN),
        };
        Timestamp::from_millis(millis)
    }
}
