//! Opaque key-value payloads attached to navigation entries.
//!
//! Views attach whatever context they need to re-render a past navigation
//! (selected account, filter values, date ranges) as string pairs. Route
//! entries recorded from the router also carry the decoded query string of the
//! reported location.
//!
//! # Example
//!
//! ```
//! use navigation_tracker::EntryData;
//!
//! let data = EntryData::new()
//!     .with("accountId", "42")
//!     .with("range", "last-30-days");
//! assert_eq!(data.get_as::<u32>("accountId"), Some(42));
//!
//! let query = EntryData::from_query_string("category=food%20%26%20drink&page=2");
//! assert_eq!(query.get("category"), Some("food & drink"));
//! ```

use std::collections::BTreeMap;

/// Ordered string key-value payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EntryData {
    values: BTreeMap<String, String>,
}

impl EntryData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a value and parse it as `T`.
    ///
    /// Returns `None` if the key is missing or the value does not parse.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.values.get(key)?.parse().ok()
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a value, returning it.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of key-value pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Merge two payloads; values from `overlay` win on collision.
    ///
    /// ```
    /// use navigation_tracker::EntryData;
    ///
    /// let base = EntryData::new().with("view", "list").with("page", "1");
    /// let overlay = EntryData::new().with("view", "chart");
    ///
    /// let merged = EntryData::merge(&base, &overlay);
    /// assert_eq!(merged.get("view"), Some("chart"));
    /// assert_eq!(merged.get("page"), Some("1"));
    /// ```
    pub fn merge(base: &EntryData, overlay: &EntryData) -> EntryData {
        let mut merged = base.clone();
        for (key, value) in overlay.iter() {
            merged.insert(key, value);
        }
        merged
    }

    /// Parse `key=value&...` pairs, percent- and `+`-decoding both sides.
    ///
    /// A leading `?` is ignored. Pairs without `=` are kept with an empty
    /// value; when a key repeats, the last occurrence wins.
    pub fn from_query_string(query: &str) -> Self {
        let mut data = EntryData::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            data.insert(decode_uri_component(key), decode_uri_component(value));
        }

        data
    }
}

impl<K, V> FromIterator<(K, V)> for EntryData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = EntryData::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

/// Decode `%XX` escapes (UTF-8 aware) and `+` as space.
fn decode_uri_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_typed_get() {
        let mut data = EntryData::new();
        data.insert("budgetId", "7");
        data.insert("month", "2024-03");

        assert_eq!(data.get("month"), Some("2024-03"));
        assert_eq!(data.get_as::<i64>("budgetId"), Some(7));
        assert_eq!(data.get_as::<i64>("month"), None);
        assert_eq!(data.get_as::<i64>("missing"), None);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let data: EntryData = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_query_string_parsing() {
        let data = EntryData::from_query_string("?from=2024-01-01&to=2024-01-31&q=coffee+shop");
        assert_eq!(data.get("from"), Some("2024-01-01"));
        assert_eq!(data.get("to"), Some("2024-01-31"));
        assert_eq!(data.get("q"), Some("coffee shop"));
    }

    #[test]
    fn test_query_string_edge_cases() {
        assert!(EntryData::from_query_string("").is_empty());
        assert!(EntryData::from_query_string("?").is_empty());

        let data = EntryData::from_query_string("flag&x=1&x=2");
        assert_eq!(data.get("flag"), Some(""));
        assert_eq!(data.get("x"), Some("2"));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(decode_uri_component("caf%C3%A9"), "café");
        assert_eq!(decode_uri_component("100%25"), "100%");
        assert_eq!(decode_uri_component("50%"), "50%");
        assert_eq!(decode_uri_component("%zz"), "%zz");
    }
}
