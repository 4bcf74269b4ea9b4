//! End-to-end behaviour of the public search API.

use seek_first::{
    check_range, get_first, json, Direction, Matcher, Needle, Number, RangeError, Search,
    SearchRange, Seekable, SeekerEnum, Timestamp, Value,
};
use serde_json::json;

// ============================================================================
// Test fixtures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Layer {
    Background,
    World,
    Ui,
}

impl SeekerEnum for Layer {
    fn seeker_discriminant(&self) -> u32 {
        match self {
            Layer::Background => 0,
            Layer::World => 1,
            Layer::Ui => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entity {
    id: u32,
    name: String,
    layer: Layer,
    spawned: Timestamp,
    tag: Option<String>,
}

impl Seekable for Entity {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "layer" => Value::Enum(self.layer.seeker_discriminant()),
            "spawned" => Value::Timestamp(self.spawned),
            "tag" => match &self.tag {
                Some(tag) => Value::String(tag),
                None => Value::None,
            },
            _ => Value::None,
        }
    }
}

fn entity(id: u32, name: &str, layer: Layer, tag: Option<&str>) -> Entity {
    Entity {
        id,
        name: name.to_string(),
        layer,
        spawned: Timestamp::from_secs(id as i64),
        tag: tag.map(str::to_string),
    }
}

fn world() -> Vec<Entity> {
    vec![
        entity(0, "backdrop", Layer::Background, None),
        entity(1, "player", Layer::World, Some("hero")),
        entity(2, "enemy", Layer::World, Some("")),
        entity(3, "coin", Layer::World, None),
        entity(4, "score", Layer::Ui, Some("hud")),
        entity(5, "lives", Layer::Ui, Some("hud")),
    ]
}

fn names(found: Vec<&Entity>) -> Vec<&str> {
    found.into_iter().map(|e| e.name.as_str()).collect()
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn default_search_returns_first_element() {
    let items = world();
    assert_eq!(
        get_first(&items, None, None, None, None, Entity::accessor),
        Some(&items[0])
    );
}

#[test]
fn default_window_excludes_last_element() {
    let items = world();
    let search = Search::new();
    assert_eq!(search.count_seekable(&items), items.len() - 1);
    assert_eq!(
        Search::new().equals("name", "lives").first_seekable(&items),
        None
    );
}

#[test]
fn single_element_default_finds_nothing() {
    let items = vec![entity(7, "solo", Layer::World, None)];
    assert_eq!(Search::new().first_seekable(&items), None);
    assert_eq!(Search::new().try_first(&items, Entity::accessor), Ok(None));
}

#[test]
fn two_element_default_finds_first() {
    let items = vec![
        entity(7, "a", Layer::World, None),
        entity(8, "b", Layer::World, None),
    ];
    assert_eq!(Search::new().first_seekable(&items), Some(&items[0]));
}

// ============================================================================
// Matchers
// ============================================================================

#[test]
fn existence_includes_empty_string() {
    let items = world();
    let found = Search::new().has("tag").start(2).first_seekable(&items);
    assert_eq!(found.map(|e| e.id), Some(2));
}

#[test]
fn enum_and_timestamp_needles() {
    let items = world();

    let found = Search::new()
        .equals("layer", Needle::from_enum(&Layer::Ui))
        .first_seekable(&items);
    assert_eq!(found.map(|e| e.id), Some(4));

    let found = Search::new()
        .equals("spawned", Timestamp::from_secs(3))
        .first_seekable(&items);
    assert_eq!(found.map(|e| e.id), Some(3));
}

#[test]
fn enum_needle_does_not_equal_number() {
    let items = world();
    let found = Search::new().equals("layer", 1u32).first_seekable(&items);
    assert_eq!(found, None);
}

#[test]
fn unknown_property_never_matches() {
    let items = world();
    assert_eq!(Search::new().has("velocity").first_seekable(&items), None);
    assert_eq!(
        Search::new().equals("velocity", 0).first_seekable(&items),
        None
    );
}

#[test]
fn matcher_round_trips_through_builder() {
    let search = Search::new().matching(Matcher::has("tag")).build();
    assert_eq!(search.matcher().property(), Some("tag"));
    assert_eq!(search.matcher().value(), None);
}

// ============================================================================
// Windows
// ============================================================================

#[test]
fn backward_from_end_finds_last_match() {
    let items = world();
    let found = Search::new()
        .equals("tag", "hud")
        .backward()
        .first_seekable(&items);
    assert_eq!(found.map(|e| e.id), Some(5));
}

#[test]
fn backward_all_in_scan_order() {
    let items = world();
    let found = Search::new()
        .equals("layer", Needle::from_enum(&Layer::World))
        .backward()
        .all_seekable(&items);
    assert_eq!(names(found), vec!["coin", "enemy", "player"]);
}

#[test]
fn explicit_equal_ends_visit_nothing() {
    let items = world();
    let search = Search::new().start(1).end(1).build();
    assert_eq!(search.first_seekable(&items), None);
    assert!(search.window(items.len()).unwrap().is_empty());
}

#[test]
fn out_of_bounds_windows_fail_silently() {
    let items = world();
    for range in [
        SearchRange::between(5, 10),
        SearchRange::between(-3, 2),
        SearchRange::between(2, 6),
        SearchRange::new().with_start(-2),
    ] {
        let search = Search::new().within(range);
        assert_eq!(search.first_seekable(&items), None, "{range:?}");
        assert!(search.try_first(&items, Entity::accessor).is_err());
    }
}

#[test]
fn range_errors_describe_the_problem() {
    assert_eq!(
        check_range(0, 0, 0).unwrap_err().to_string(),
        "cannot search an empty sequence"
    );
    assert_eq!(
        check_range(3, -1, 1).unwrap_err(),
        RangeError::StartOutOfBounds { index: -1, len: 3 }
    );
    assert_eq!(
        check_range(3, 0, 3).unwrap_err().to_string(),
        "upper bound 3 is out of bounds for length 3"
    );
}

#[test]
fn window_reports_direction() {
    let forward = Search::new().window(4).unwrap();
    assert_eq!(forward.direction(), Direction::Forward);
    assert_eq!(forward.start(), 0);

    let backward = Search::new().backward().window(4).unwrap();
    assert_eq!(backward.direction(), Direction::Backward);
    assert_eq!(backward.start(), 3);
    assert_eq!(backward.len(), 3);
}

// ============================================================================
// JSON records
// ============================================================================

#[test]
fn json_records_from_a_deserialized_request() {
    let request = json!({
        "property": "kind",
        "value": "door",
        "range": {"start": -1}
    });
    let items = vec![
        json!({"kind": "wall"}),
        json!({"kind": "door", "id": 1}),
        json!({"kind": "door", "id": 2}),
        json!({"kind": "floor"}),
    ];

    let range: SearchRange = serde_json::from_value(request["range"].clone()).unwrap();
    let found = get_first(
        &items,
        request["property"].as_str(),
        json::needle(&request["value"]),
        range.start,
        range.end,
        json::accessor,
    );
    assert_eq!(found, Some(&items[2]));
}

#[test]
fn json_strict_equality_example() {
    let items = vec![json!({"p": 1}), json!({"p": "1"}), json!({"p": 1})];
    let found = Search::new().equals("p", 1).first(&items, json::accessor);
    assert!(std::ptr::eq(found.unwrap(), &items[0]));
}

#[test]
fn json_existence_example() {
    let items = vec![json!({"a": 1}), json!({"b": 2}), json!({"a": 0})];
    let found = Search::new().has("a").first(&items, json::accessor);
    assert!(std::ptr::eq(found.unwrap(), &items[0]));
}
