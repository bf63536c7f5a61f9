//! Unit tests for path helpers (src/matching.rs).

use navigation_tracker::matching::{match_pattern, normalize_path, split_query};

#[test]
fn test_nested_params() {
    let params = match_pattern(
        "/profiles/:profileId/accounts/:accountId",
        "/profiles/p1/accounts/a9",
    )
    .unwrap();
    assert_eq!(params.get("profileId"), Some("p1"));
    assert_eq!(params.get("accountId"), Some("a9"));
}

#[test]
fn test_segment_count_must_match() {
    assert!(match_pattern("/profiles/:id", "/profiles").is_none());
    assert!(match_pattern("/profiles/:id", "/profiles/1/extra").is_none());
}

#[test]
fn test_normalize_then_match() {
    let path = normalize_path("budgets//2024/");
    assert_eq!(path, "/budgets/2024");
    let params = match_pattern("/budgets/:year", &path).unwrap();
    assert_eq!(params.get_as::<i32>("year"), Some(2024));
}

#[test]
fn test_split_query_without_path() {
    assert_eq!(split_query("?a=1"), ("", Some("a=1")));
}
