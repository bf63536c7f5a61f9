//! Segment-based path helpers.
//!
//! Used by the [`TitleRegistry`](crate::TitleRegistry) to match reported
//! locations against registered title patterns, and by the router to split
//! the query string off a location.
//!
//! # Pattern syntax
//!
//! - `literal` segments match exactly
//! - `:name` segments match any single segment and capture it
//! - a trailing `*` or `*name` segment matches the rest of the path (possibly
//!   empty); the named form captures it joined with `/`

use crate::data::EntryData;

/// Split a path into segments, filtering empty segments.
///
/// ```
/// use navigation_tracker::matching::split_path;
///
/// assert_eq!(split_path("/accounts/42/"), vec!["accounts", "42"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Split `"/path?query"` into `("/path", Some("query"))`.
///
/// A `#fragment` is discarded.
pub fn split_query(location: &str) -> (&str, Option<&str>) {
    let location = location.split_once('#').map_or(location, |(head, _)| head);
    match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    }
}

/// Normalize a path: leading slash, no trailing slash, no empty segments.
///
/// ```
/// use navigation_tracker::matching::normalize_path;
///
/// assert_eq!(normalize_path("budgets//monthly/"), "/budgets/monthly");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let segments = split_path(path);
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Match `path` against `pattern`, returning captured parameters.
///
/// Query strings on `path` are ignored. Returns `None` when the path does not
/// match.
///
/// ```
/// use navigation_tracker::matching::match_pattern;
///
/// let params = match_pattern("/accounts/:id/transactions", "/accounts/42/transactions").unwrap();
/// assert_eq!(params.get("id"), Some("42"));
///
/// assert!(match_pattern("/accounts/:id", "/budgets/1").is_none());
/// ```
pub fn match_pattern(pattern: &str, path: &str) -> Option<EntryData> {
    let (path, _) = split_query(path);
    let pattern_segments = split_path(pattern);
    let path_segments = split_path(path);
    let mut params = EntryData::new();

    for (index, pattern_seg) in pattern_segments.iter().enumerate() {
        if is_wildcard_segment(pattern_seg) {
            if index + 1 != pattern_segments.len() {
                // Wildcards are only meaningful as the final segment
                return None;
            }
            let name = &pattern_seg[1..];
            if !name.is_empty() {
                let rest = path_segments.get(index..).unwrap_or_default();
                params.insert(name, rest.join("/"));
            }
            return Some(params);
        }

        let path_seg = path_segments.get(index)?;
        if let Some(name) = extract_param_name(pattern_seg) {
            params.insert(name, *path_seg);
        } else if pattern_seg != path_seg {
            return None;
        }
    }

    (pattern_segments.len() == path_segments.len()).then_some(params)
}

/// Extract the parameter name from a `:name` segment.
pub fn extract_param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':').filter(|name| !name.is_empty())
}

/// Check if a pattern segment is a wildcard.
pub fn is_wildcard_segment(segment: &str) -> bool {
    segment.starts_with('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/transactions/2024"), vec!["transactions", "2024"]);
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("transactions"), vec!["transactions"]);
    }

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/reports?year=2024"), ("/reports", Some("year=2024")));
        assert_eq!(split_query("/reports"), ("/reports", None));
        assert_eq!(split_query("/reports?a=1#chart"), ("/reports", Some("a=1")));
        assert_eq!(split_query("/reports#chart"), ("/reports", None));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("accounts"), "/accounts");
        assert_eq!(normalize_path("/accounts/"), "/accounts");
    }

    #[test]
    fn test_literal_match() {
        assert!(match_pattern("/budgets", "/budgets").is_some());
        assert!(match_pattern("/budgets", "/budgets/").is_some());
        assert!(match_pattern("/budgets", "/budgets/2024").is_none());
        assert!(match_pattern("/budgets/2024", "/budgets").is_none());
        assert!(match_pattern("/", "/").is_some());
    }

    #[test]
    fn test_param_capture_ignores_query() {
        let params = match_pattern("/lends/:lendId", "/lends/9?tab=history").unwrap();
        assert_eq!(params.get("lendId"), Some("9"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_wildcards() {
        let params = match_pattern("/export/*rest", "/export/csv/2024").unwrap();
        assert_eq!(params.get("rest"), Some("csv/2024"));

        let params = match_pattern("/export/*", "/export").unwrap();
        assert!(params.is_empty());

        assert!(match_pattern("/export/*/csv", "/export/a/csv").is_none());
    }

    #[test]
    fn test_extract_param_name() {
        assert_eq!(extract_param_name(":id"), Some("id"));
        assert_eq!(extract_param_name(":"), None);
        assert_eq!(extract_param_name("id"), None);
    }
}
