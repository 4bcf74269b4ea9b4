//! Search builder and executor.
//!
//! [`get_first`] is the one-call form: a slice, an optional property and
//! value, an optional start and end. [`Search`] holds the same inputs behind
//! a fluent builder and adds a few more ways to consume the window.

use crate::error::Result;
use crate::matcher::{Matcher, Needle};
use crate::range::{SearchRange, Window};
use crate::traits::Seekable;
use crate::value::Value;

/// Returns the first element of `items` that satisfies the optional
/// property/value test, scanning the optional `[start, end)` window.
///
/// - No `property`: every element matches.
/// - `property` without `value`: the element must define the property.
/// - Both: the property must be strictly equal to `value`.
///
/// `start` defaults to `0` and may be `-1` to begin at the last element; see
/// [`SearchRange`] for the full normalization. The element at `end` is never
/// visited. Empty slices, out-of-bounds windows and "nothing matched" all
/// return `None`.
///
/// # Example
///
/// ```
/// use seek_first::{get_first, Value, Number};
///
/// struct Body {
///     mass: f64,
///     sleeping: bool,
/// }
///
/// fn accessor<'a>(body: &'a Body, field: &str) -> Value<'a> {
///     match field {
///         "mass" => Value::Number(Number::F64(body.mass)),
///         "sleeping" => Value::Bool(body.sleeping),
///         _ => Value::None,
///     }
/// }
///
/// let bodies = vec![
///     Body { mass: 1.0, sleeping: false },
///     Body { mass: 2.5, sleeping: true },
///     Body { mass: 4.0, sleeping: true },
///     Body { mass: 8.0, sleeping: false },
/// ];
///
/// let first = get_first(&bodies, Some("sleeping"), Some(true.into()), None, None, accessor);
/// assert_eq!(first.map(|b| b.mass), Some(2.5));
///
/// // From the end, walking backward.
/// let last = get_first(&bodies, Some("sleeping"), Some(true.into()), Some(-1), None, accessor);
/// assert_eq!(last.map(|b| b.mass), Some(4.0));
/// ```
pub fn get_first<'a, T, F>(
    items: &'a [T],
    property: Option<&str>,
    value: Option<Needle>,
    start: Option<isize>,
    end: Option<isize>,
    accessor: F,
) -> Option<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    Search {
        matcher: Matcher::new(property, value),
        range: SearchRange { start, end },
    }
    .first(items, accessor)
}

/// A directional first-match search.
///
/// A search pairs a [`Matcher`] (which elements qualify) with a
/// [`SearchRange`] (which indices are visited, and in what order).
///
/// # Example
///
/// ```
/// use seek_first::{Search, Value, Number};
///
/// fn accessor<'a>(n: &'a i64, field: &str) -> Value<'a> {
///     match field {
///         "n" => Value::Number(Number::I64(*n)),
///         _ => Value::None,
///     }
/// }
///
/// let items = [5, 7, 5, 9, 5, 1];
/// let search = Search::new().equals("n", 5).backward().build();
///
/// assert_eq!(search.position(&items, accessor), Some(4));
/// // Index 0 is the excluded end of a backward scan.
/// assert_eq!(search.count(&items, accessor), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Search {
    matcher: Matcher,
    range: SearchRange,
}

impl Search {
    /// Creates a search that matches every element over the default range.
    pub fn new() -> Self {
        Search::default()
    }

    // ========================================================================
    // Matcher
    // ========================================================================

    /// Replaces the matcher.
    pub fn matching(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Only elements that define `property` qualify.
    pub fn has(self, property: &str) -> Self {
        self.matching(Matcher::has(property))
    }

    /// Only elements whose `property` strictly equals `value` qualify.
    pub fn equals(self, property: &str, value: impl Into<Needle>) -> Self {
        self.matching(Matcher::equals(property, value))
    }

    // ========================================================================
    // Range
    // ========================================================================

    /// Replaces the range.
    pub fn within(mut self, range: SearchRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the first index visited. `-1` means the last element.
    pub fn start(mut self, start: isize) -> Self {
        self.range.start = Some(start);
        self
    }

    /// Sets the boundary the scan walks towards. It is never visited.
    pub fn end(mut self, end: isize) -> Self {
        self.range.end = Some(end);
        self
    }

    /// Starts at the last element and walks backward.
    pub fn backward(self) -> Self {
        self.start(-1)
    }

    /// Finalizes the search.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the range.
    pub fn range(&self) -> SearchRange {
        self.range
    }

    /// Resolves the range for a sequence of `len` elements.
    pub fn window(&self, len: usize) -> Result<Window> {
        self.range.resolve(len)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Like [`first`](Self::first), but reports why an unscannable window
    /// found nothing.
    ///
    /// `Ok(None)` means the window was valid and nothing in it matched.
    pub fn try_first<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<Option<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let window = self.window(items.len())?;
        Ok(self
            .scan(items, window, &accessor)
            .next()
            .map(|(_, item)| item))
    }

    /// Returns the first matching element in scan order.
    pub fn first<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.try_first(items, accessor).ok().flatten()
    }

    /// Returns the index of the first matching element in scan order.
    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let window = self.window(items.len()).ok()?;
        self.scan(items, window, &accessor)
            .next()
            .map(|(index, _)| index)
    }

    /// Returns every matching element in the window, in scan order.
    pub fn all<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        match self.window(items.len()) {
            Ok(window) => self
                .scan(items, window, &accessor)
                .map(|(_, item)| item)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Counts the matching elements in the window.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        match self.window(items.len()) {
            Ok(window) => self.scan(items, window, &accessor).count(),
            Err(_) => 0,
        }
    }

    /// Returns `true` if any element in the window matches.
    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.position(items, accessor).is_some()
    }

    /// [`first`](Self::first) for [`Seekable`] elements.
    pub fn first_seekable<'a, T: Seekable>(&self, items: &'a [T]) -> Option<&'a T> {
        self.first(items, T::accessor)
    }

    /// [`all`](Self::all) for [`Seekable`] elements.
    pub fn all_seekable<'a, T: Seekable>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.all(items, T::accessor)
    }

    /// [`count`](Self::count) for [`Seekable`] elements.
    pub fn count_seekable<T: Seekable>(&self, items: &[T]) -> usize {
        self.count(items, T::accessor)
    }

    fn scan<'a, 's, T, F>(
        &'s self,
        items: &'a [T],
        window: Window,
        accessor: &'s F,
    ) -> impl Iterator<Item = (usize, &'a T)> + 's
    where
        'a: 's,
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        window
            .indices()
            .filter_map(move |index| items.get(index).map(|item| (index, item)))
            .filter(move |(_, item)| self.matcher.matches(*item, accessor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use crate::value::Number;

    #[derive(Debug, Clone, PartialEq)]
    struct Sprite {
        name: &'static str,
        depth: Option<i64>,
        visible: bool,
    }

    fn sprite(name: &'static str, depth: Option<i64>, visible: bool) -> Sprite {
        Sprite {
            name,
            depth,
            visible,
        }
    }

    // `depth` is only defined on sprites that have one.
    fn accessor<'a>(sprite: &'a Sprite, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(sprite.name),
            "depth" => sprite
                .depth
                .map_or(Value::None, |d| Value::Number(Number::I64(d))),
            "visible" => Value::Bool(sprite.visible),
            _ => Value::None,
        }
    }

    fn scene() -> Vec<Sprite> {
        vec![
            sprite("sky", None, true),
            sprite("hills", Some(0), false),
            sprite("ship", Some(3), true),
            sprite("cloud", Some(3), false),
            sprite("hud", None, true),
        ]
    }

    #[test]
    fn default_search_returns_first_element() {
        let items = scene();
        assert_eq!(Search::new().first(&items, accessor), Some(&items[0]));
    }

    #[test]
    fn has_skips_elements_without_the_property() {
        let items = scene();
        let found = Search::new().has("depth").first(&items, accessor);
        assert_eq!(found.map(|s| s.name), Some("hills"));
    }

    #[test]
    fn equals_finds_first_in_forward_order() {
        let items = scene();
        let found = Search::new().equals("depth", 3).first(&items, accessor);
        assert_eq!(found.map(|s| s.name), Some("ship"));
    }

    #[test]
    fn backward_finds_last_match() {
        let items = scene();
        let found = Search::new()
            .equals("depth", 3)
            .backward()
            .first(&items, accessor);
        assert_eq!(found.map(|s| s.name), Some("cloud"));
    }

    #[test]
    fn backward_never_reaches_index_zero() {
        let items = scene();
        let found = Search::new()
            .equals("name", "sky")
            .backward()
            .first(&items, accessor);
        assert_eq!(found, None);
    }

    #[test]
    fn forward_default_never_reaches_last_element() {
        let items = scene();
        let found = Search::new().equals("name", "hud").first(&items, accessor);
        assert_eq!(found, None);
    }

    #[test]
    fn explicit_window_is_half_open() {
        let items = scene();
        let search = Search::new().has("depth").start(2).end(4).build();
        assert_eq!(search.position(&items, accessor), Some(2));
        assert_eq!(search.count(&items, accessor), 2);

        let search = Search::new().has("depth").start(4).end(1).build();
        assert_eq!(search.position(&items, accessor), Some(3));
        assert_eq!(
            search
                .all(&items, accessor)
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>(),
            vec!["cloud", "ship"]
        );
    }

    #[test]
    fn empty_window_finds_nothing() {
        let items = scene();
        let search = Search::new().start(1).end(1).build();
        assert_eq!(search.try_first(&items, accessor), Ok(None));
        assert_eq!(search.first(&items, accessor), None);
    }

    #[test]
    fn out_of_bounds_window_finds_nothing() {
        let items = scene();
        let search = Search::new().start(5).end(10).build();
        assert_eq!(search.first(&items, accessor), None);
        assert_eq!(search.count(&items, accessor), 0);
        assert!(search.all(&items, accessor).is_empty());
        assert!(!search.any(&items, accessor));
        assert_eq!(
            search.try_first(&items, accessor),
            Err(RangeError::EndOutOfBounds { index: 10, len: 5 })
        );
    }

    #[test]
    fn empty_slice_finds_nothing() {
        let items: Vec<Sprite> = Vec::new();
        assert_eq!(Search::new().first(&items, accessor), None);
        assert_eq!(Search::new().backward().first(&items, accessor), None);
        assert_eq!(
            Search::new().try_first(&items, accessor),
            Err(RangeError::EmptySequence)
        );
    }

    #[test]
    fn mismatched_kind_never_matches() {
        let items = scene();
        let found = Search::new().equals("depth", "3").first(&items, accessor);
        assert_eq!(found, None);
        let found = Search::new().equals("visible", 1).first(&items, accessor);
        assert_eq!(found, None);
    }

    #[test]
    fn get_first_passes_arguments_through() {
        let items = scene();
        assert_eq!(
            get_first(&items, None, None, None, None, accessor),
            Some(&items[0])
        );
        assert_eq!(
            get_first(&items, Some("visible"), Some(false.into()), Some(-1), None, accessor)
                .map(|s| s.name),
            Some("cloud")
        );
        assert_eq!(
            get_first(&items, Some(""), Some(false.into()), Some(2), None, accessor)
                .map(|s| s.name),
            Some("ship")
        );
    }

    impl Seekable for Sprite {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            accessor(self, field)
        }
    }

    #[test]
    fn seekable_helpers_match_accessor_forms() {
        let items = scene();
        let search = Search::new().equals("visible", true).build();
        assert_eq!(
            search.first_seekable(&items),
            search.first(&items, accessor)
        );
        assert_eq!(search.all_seekable(&items).len(), 2);
        assert_eq!(search.count_seekable(&items), 2);
    }
}
