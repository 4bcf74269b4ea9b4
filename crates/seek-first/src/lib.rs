//! Seek-first - directional first-match search over Rust struct collections.
//!
//! Finds the first element of a slice that satisfies an optional
//! property/value test, inside an optional index window that may be walked
//! forward or backward. It supports:
//!
//! - Existence tests: does the element define a property at all
//! - Strict equality tests: same kind and same value, no coercion
//! - Forward and backward windows, including "start at the last element"
//! - Never-failing lookups, with an opt-in fallible form that explains misses
//!
//! # Quick Start
//!
//! ```rust
//! use seek_first::{Search, Value, Number};
//!
//! struct Sprite {
//!     name: String,
//!     depth: Option<i32>,
//!     visible: bool,
//! }
//!
//! // Fields an element does not define map to `Value::None`.
//! fn accessor<'a>(sprite: &'a Sprite, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&sprite.name),
//!         "depth" => sprite.depth.map_or(Value::None, |d| Value::Number(d.into())),
//!         "visible" => Value::Bool(sprite.visible),
//!         _ => Value::None,
//!     }
//! }
//!
//! let sprites = vec![
//!     Sprite { name: "sky".into(), depth: None, visible: true },
//!     Sprite { name: "ground".into(), depth: Some(0), visible: true },
//!     Sprite { name: "ship".into(), depth: Some(2), visible: false },
//!     Sprite { name: "hud".into(), depth: Some(9), visible: true },
//! ];
//!
//! // A depth of 0 still counts as defined.
//! let first = Search::new().has("depth").first(&sprites, accessor);
//! assert_eq!(first.map(|s| s.name.as_str()), Some("ground"));
//!
//! // Start at the last element and walk backward.
//! let last = Search::new().equals("visible", false).backward().first(&sprites, accessor);
//! assert_eq!(last.map(|s| s.name.as_str()), Some("ship"));
//! ```
//!
//! # Windows
//!
//! A window is anchored at `start` and walks towards `end`, visiting exactly
//! `|end - start|` elements. The element at `end` is never visited:
//!
//! ```text
//! start = 1, end = 4     visits 1, 2, 3
//! start = 4, end = 1     visits 4, 3, 2
//! start = 2, end = 2     visits nothing
//! defaults (len = 5)     start = 0, end = 4: visits 0, 1, 2, 3
//! start = -1 (len = 5)   start = 4, end = 0: visits 4, 3, 2, 1
//! ```
//!
//! Windows that fall outside the slice, and empty slices, find nothing.
//! [`Search::try_first`] and [`check_range`] report the reason as a
//! [`RangeError`].
//!
//! # Matchers
//!
//! | property | value   | element matches when                          |
//! |----------|---------|-----------------------------------------------|
//! | absent   | -       | always                                        |
//! | present  | absent  | the element defines the property              |
//! | present  | present | the property is strictly equal to the value   |

mod error;
pub mod json;
mod matcher;
mod range;
mod search;
mod traits;
mod value;

// Re-export public API
pub use error::{RangeError, Result};
pub use matcher::{Matcher, Needle};
pub use range::{check_range, Direction, Indices, SearchRange, Window};
pub use search::{get_first, Search};
pub use traits::{Seekable, SeekerEnum, SeekerTimestamp};
pub use value::{Number, Timestamp, Value};
