//! Unit tests for entry payloads (src/data.rs).

use navigation_tracker::EntryData;

#[test]
fn test_filters_round_trip_through_query_string() {
    let data = EntryData::from_query_string("category=Groceries&min=10.5&max=200&sort=date-desc");

    assert_eq!(data.get("category"), Some("Groceries"));
    assert_eq!(data.get_as::<f64>("min"), Some(10.5));
    assert_eq!(data.get_as::<u32>("max"), Some(200));
    assert_eq!(data.get("sort"), Some("date-desc"));
    assert_eq!(data.len(), 4);
}

#[test]
fn test_merge_overlay_wins() {
    let saved = EntryData::new().with("range", "ytd").with("account", "1");
    let current = EntryData::new().with("range", "last-month");

    let merged = EntryData::merge(&saved, &current);
    assert_eq!(merged.get("range"), Some("last-month"));
    assert_eq!(merged.get("account"), Some("1"));
    // inputs untouched
    assert_eq!(saved.get("range"), Some("ytd"));
}

#[test]
fn test_remove_and_contains() {
    let mut data = EntryData::new().with("draft", "true");
    assert!(data.contains("draft"));
    assert_eq!(data.get_as::<bool>("draft"), Some(true));
    assert_eq!(data.remove("draft").as_deref(), Some("true"));
    assert!(!data.contains("draft"));
    assert!(data.is_empty());
}
