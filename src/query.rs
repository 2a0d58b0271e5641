//! Ordered query-string handling.
//!
//! Query strings are kept as ordered `(key, value)` lists so repeated keys
//! (`genre=a&genre=b`) survive a decode/encode cycle.

use crate::error::Result;

pub type QueryPairs = Vec<(String, String)>;

/// Decodes `?a=1&b=2` (leading `?` optional) into ordered pairs.
pub fn parse(search: &str) -> Result<QueryPairs> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_urlencoded::from_str(raw)?)
}

pub fn encode(pairs: &[(String, String)]) -> Result<String> {
    Ok(serde_urlencoded::to_string(pairs)?)
}

/// Replaces the first `key` entry in place and drops later duplicates, or
/// appends when the key is absent.
pub fn set(pairs: &mut QueryPairs, key: &str, value: &str) {
    let mut seen = false;
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if seen {
            return false;
        }
        seen = true;
        *v = value.to_string();
        true
    });
    if !seen {
        pairs.push((key.to_string(), value.to_string()));
    }
}

pub fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn get_all<'a>(
    pairs: &'a [(String, String)],
    key: &str,
) -> impl Iterator<Item = &'a str> + use<'a> {
    let key = key.to_string();
    pairs
        .iter()
        .filter(move |(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

/// Query for the next page: the current params with `skip` forced to `skip`.
pub fn page_query(current: &[(String, String)], skip: u64) -> Result<String> {
    let mut pairs = current.to_vec();
    set(&mut pairs, "skip", &skip.to_string());
    encode(&pairs)
}

/// Filter-form entries with empty values dropped, in form order.
pub fn form_query(entries: &[(String, String)]) -> Result<String> {
    let kept: QueryPairs = entries
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .cloned()
        .collect();
    encode(&kept)
}
