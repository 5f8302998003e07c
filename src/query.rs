//! Structured query items.
//!
//! A query such as `a=1&arr[]=x&arr[]=y&map[k]=v` is read as an ordered
//! mapping whose values are either plain strings, sequences (from `key[]`
//! or `key[N]`) or one level of nested mapping (from `key[sub]`).
//!
//! ```
//! use net_uri::query::{QueryItems, QueryValue};
//!
//! let items = QueryItems::parse("arr[0]=arr1&arr[1]=arr2&name=Ferris%20the+crab");
//! assert_eq!(items.get("arr"), Some(&QueryValue::from(["arr1", "arr2"])));
//! assert_eq!(items.get("name").and_then(QueryValue::as_str), Some("Ferris the crab"));
//! assert_eq!(items.to_string(), "arr%5B0%5D=arr1&arr%5B1%5D=arr2&name=Ferris%20the%20crab");
//! ```

use crate::pct_enc::{self, table};
use std::fmt;

/// The value of a query item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// A plain value, as in `key=value`.
    Scalar(String),
    /// A sequence, as in `key[]=a&key[]=b`.
    List(Vec<String>),
    /// A nested mapping, as in `key[a]=1&key[b]=2`.
    Map(Vec<(String, String)>),
}

impl QueryValue {
    /// Returns the value as a string slice if it is a scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a slice if it is a sequence.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the value of a nested key if the value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Map(map) => map.iter().find(|(k, _)| k == key).map(|(_, v)| &v[..]),
            _ => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(list: [&str; N]) -> Self {
        Self::List(list.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for QueryValue {
    fn from(map: [(&str, &str); N]) -> Self {
        Self::Map(
            map.iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }
}

impl From<Vec<(String, String)>> for QueryValue {
    fn from(map: Vec<(String, String)>) -> Self {
        Self::Map(map)
    }
}

/// An ordered mapping of query items.
///
/// Keys keep the order in which they first appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryItems {
    items: Vec<(String, QueryValue)>,
}

impl QueryItems {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a percent-encoded query string.
    ///
    /// Keys and values are percent-decoded with `+` read as a space.
    /// Pairs without `=` get an empty value, empty pairs are skipped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut items = Self::new();
        for pair in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = pct_enc::decode(key, true);
            let value = pct_enc::decode(value, true).into_owned();
            items.push_raw(&key, value);
        }
        items
    }

    fn push_raw(&mut self, key: &str, value: String) {
        let Some((name, sub)) = split_bracket(key) else {
            self.insert(key, QueryValue::Scalar(value));
            return;
        };

        match self.position(name) {
            Some(i) => {
                let slot = &mut self.items[i].1;
                let current = std::mem::replace(slot, QueryValue::List(Vec::new()));
                *slot = insert_sub(current, sub, value);
            }
            None => {
                let new = insert_sub(QueryValue::List(Vec::new()), sub, value);
                self.items.push((name.to_owned(), new));
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }

    /// Returns the value of an item.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.position(key).map(|i| &self.items[i].1)
    }

    /// Inserts an item, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: &str, value: QueryValue) {
        match self.position(key) {
            Some(i) => self.items[i].1 = value,
            None => self.items.push((key.to_owned(), value)),
        }
    }

    /// Removes an item, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.position(key).map(|i| self.items.remove(i).1)
    }

    /// Sets an item.
    ///
    /// `None` removes the key. A mapping is merged into an existing mapping
    /// at the same key, overwriting nested keys it shares with it.
    /// Any other value replaces the existing one.
    pub fn set(&mut self, key: &str, value: Option<QueryValue>) {
        match value {
            None => {
                self.remove(key);
            }
            Some(QueryValue::Map(new)) => match self.position(key) {
                Some(i) => match &mut self.items[i].1 {
                    QueryValue::Map(map) => {
                        for (k, v) in new {
                            upsert(map, &k, v);
                        }
                    }
                    other => *other = QueryValue::Map(new),
                },
                None => self.items.push((key.to_owned(), QueryValue::Map(new))),
            },
            Some(value) => self.insert(key, value),
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.items.iter().map(|(k, v)| (&k[..], v))
    }
}

impl fmt::Display for QueryItems {
    /// Writes the items as a percent-encoded query string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        for (key, value) in &self.items {
            match value {
                QueryValue::Scalar(v) => push_pair(&mut buf, key, None, v),
                QueryValue::List(list) => {
                    for (i, v) in list.iter().enumerate() {
                        push_pair(&mut buf, key, Some(&i.to_string()), v);
                    }
                }
                QueryValue::Map(map) => {
                    for (sub, v) in map {
                        push_pair(&mut buf, key, Some(sub), v);
                    }
                }
            }
        }
        f.write_str(&buf)
    }
}

impl<K: AsRef<str>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryItems {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut items = Self::new();
        for (k, v) in iter {
            items.insert(k.as_ref(), v.into());
        }
        items
    }
}

fn push_pair(buf: &mut String, key: &str, sub: Option<&str>, value: &str) {
    if !buf.is_empty() {
        buf.push('&');
    }
    pct_enc::encode_to(key, table::QUERY_ITEM, buf);
    if let Some(sub) = sub {
        buf.push_str("%5B");
        pct_enc::encode_to(sub, table::QUERY_ITEM, buf);
        buf.push_str("%5D");
    }
    buf.push('=');
    pct_enc::encode_to(value, table::QUERY_ITEM, buf);
}

fn upsert(map: &mut Vec<(String, String)>, key: &str, value: String) {
    match map.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value,
        None => map.push((key.to_owned(), value)),
    }
}

// Adds a bracketed sub-item to a value.
//
// A sequence stays a sequence only while its explicit indices are exactly
// `0..len`; any other key turns it into a mapping keyed by index.
fn insert_sub(current: QueryValue, sub: &str, value: String) -> QueryValue {
    match current {
        // A bracketed key replaces an earlier plain value.
        QueryValue::Scalar(_) => insert_sub(QueryValue::List(Vec::new()), sub, value),
        QueryValue::List(mut list) if sub.is_empty() => {
            list.push(value);
            QueryValue::List(list)
        }
        QueryValue::List(mut list) => match parse_index(sub) {
            Some(i) if i < list.len() => {
                list[i] = value;
                QueryValue::List(list)
            }
            Some(i) if i == list.len() => {
                list.push(value);
                QueryValue::List(list)
            }
            _ => {
                let mut map: Vec<(String, String)> = list
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect();
                upsert(&mut map, sub, value);
                QueryValue::Map(map)
            }
        },
        QueryValue::Map(mut map) => {
            if sub.is_empty() {
                let next = map
                    .iter()
                    .filter_map(|(k, _)| parse_index(k))
                    .max()
                    .map_or(0, |i| i + 1);
                upsert(&mut map, &next.to_string(), value);
            } else {
                upsert(&mut map, sub, value);
            }
            QueryValue::Map(map)
        }
    }
}

// Integer keys are decimal without leading zeros; "01" is a plain string key.
fn parse_index(s: &str) -> Option<usize> {
    let canonical = match s.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rem @ ..] => rem.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

// Splits "name[sub]..." into ("name", "sub"); anything after the first "]"
// is ignored.
fn split_bracket(key: &str) -> Option<(&str, &str)> {
    let open = key.find('[').filter(|&i| i > 0)?;
    let close = key[open..].find(']')? + open;
    Some((&key[..open], &key[open + 1..close]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_keys() {
        assert_eq!(split_bracket("arr[0]"), Some(("arr", "0")));
        assert_eq!(split_bracket("arr[]"), Some(("arr", "")));
        assert_eq!(split_bracket("a[b][c]"), Some(("a", "b")));
        assert_eq!(split_bracket("[x]"), None);
        assert_eq!(split_bracket("a[b"), None);
    }

    #[test]
    fn mixed_sequence_and_mapping() {
        let items = QueryItems::parse("a[]=x&a[k]=y");
        assert_eq!(items.get("a"), Some(&QueryValue::from([("0", "x"), ("k", "y")])));

        let items = QueryItems::parse("a=1&a[]=x");
        assert_eq!(items.get("a"), Some(&QueryValue::from(["x"])));
    }

    #[test]
    fn index_keys() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("012"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1a"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn appending_to_a_mapping_uses_next_index() {
        let items = QueryItems::parse("a[5]=x&a[]=y&a[k]=z&a[]=w");
        assert_eq!(
            items.get("a"),
            Some(&QueryValue::from([("5", "x"), ("6", "y"), ("k", "z"), ("7", "w")]))
        );
    }

    #[test]
    fn later_scalar_wins_in_place() {
        let items = QueryItems::parse("a=1&b=2&a=3");
        assert!(items.iter().map(|(k, _)| k).eq(["a", "b"]));
        assert_eq!(items.get("a").and_then(QueryValue::as_str), Some("3"));
    }
}
