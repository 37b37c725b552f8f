//! Bracket-notation key paths.
//!
//! A key path names a field's position in a flattened tree:
//! `parent[child]`, `parent[0]`, or `parent[]` for an element appended
//! without an index. The encoder builds keys with [`child_key`] and
//! [`index_key`]; [`unflatten`] does the reverse and regroups a flat entry
//! list into nested objects and arrays.
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::keypath::{parse, Segment};
//!
//! assert_eq!(
//!     parse("user[tags][]"),
//!     vec![
//!         Segment::Key("user".to_string()),
//!         Segment::Key("tags".to_string()),
//!         Segment::Append,
//!     ]
//! );
//! ```

use crate::{FormEntry, FormMap, Value};
use tracing::debug;

/// One step of a parsed key path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A named field or a numeric index.
    Key(String),
    /// An empty `[]`: a new element at the end.
    Append,
}

/// Builds the key of an object field.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::keypath::child_key;
///
/// assert_eq!(child_key(None, "a"), "a");
/// assert_eq!(child_key(Some("a"), "b"), "a[b]");
/// ```
#[must_use]
pub fn child_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}[{}]", prefix, key),
        None => key.to_string(),
    }
}

/// Builds the key of an array element; `None` leaves the brackets empty.
#[must_use]
pub fn index_key(prefix: &str, index: Option<usize>) -> String {
    match index {
        Some(index) => format!("{}[{}]", prefix, index),
        None => format!("{}[]", prefix),
    }
}

/// Strips trailing `[]` pairs from an object key that holds an array.
///
/// Keys such as `tags[]` already announce a list; flattening them as-is
/// would produce `tags[][0]`. The loop stops before the key becomes empty,
/// so `[]` itself survives.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::keypath::strip_array_suffix;
///
/// assert_eq!(strip_array_suffix("tags[]"), "tags");
/// assert_eq!(strip_array_suffix("tags[][]"), "tags");
/// assert_eq!(strip_array_suffix("[]"), "[]");
/// assert_eq!(strip_array_suffix("a[][]"), "a");
/// ```
#[must_use]
pub fn strip_array_suffix(key: &str) -> &str {
    let mut key = key;
    while key.len() > 2 && key.ends_with("[]") {
        key = &key[..key.len() - 2];
    }
    key
}

/// Splits a key into path segments.
///
/// Keys that are not well-formed bracket paths (unbalanced brackets, text
/// after the last `]`, or a leading `[`) are kept whole as a single segment.
#[must_use]
pub fn parse(key: &str) -> Vec<Segment> {
    let literal = || vec![Segment::Key(key.to_string())];

    let open = match key.find('[') {
        Some(0) | None => return literal(),
        Some(open) => open,
    };

    let mut segments = vec![Segment::Key(key[..open].to_string())];
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            return literal();
        };
        let name = &inner[..close];
        if name.contains('[') {
            return literal();
        }
        segments.push(if name.is_empty() {
            Segment::Append
        } else {
            Segment::Key(name.to_string())
        });
        rest = &inner[close + 1..];
    }

    if rest.is_empty() {
        segments
    } else {
        literal()
    }
}

/// Regroups flat entries into a nested tree.
///
/// - `a[b]` nests objects, `a[]` appends to a list
/// - `a[][b]` writes field `b` of the last element of `a`, or of a new
///   element when the last one already has `b`
/// - a key repeated at the same leaf position collects its values into an
///   array, in append order (multi-file fields, `indices = false` lists)
/// - below the root, an object whose keys are all non-negative integers
///   becomes an array ordered by index; gaps are closed
///
/// The root is always an object. Leaves are [`FormEntry::into_value`]
/// values, so text stays tagged until [`decode`](crate::decode) runs.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::keypath::unflatten;
/// use serde_formdata::{FormEntry, Value};
///
/// let tree = unflatten(vec![
///     ("a[0]".to_string(), FormEntry::from("number;1")),
///     ("a[1]".to_string(), FormEntry::from("number;2")),
/// ]);
/// let a = tree.get("a").and_then(Value::as_array).unwrap();
/// assert_eq!(a[1], Value::from("number;2"));
/// ```
pub fn unflatten<I>(entries: I) -> Value
where
    I: IntoIterator<Item = (String, FormEntry)>,
{
    let mut root = FormMap::new();
    for (key, entry) in entries {
        insert(&mut root, &parse(&key), entry.into_value());
    }
    for child in root.values_mut() {
        compact_arrays(child);
    }
    Value::Object(root)
}

fn insert(map: &mut FormMap, segments: &[Segment], leaf: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    let key = match first {
        Segment::Key(key) => key.clone(),
        Segment::Append => append_key(map, rest),
    };
    let slot = map.slot(key);

    if rest.is_empty() {
        match slot {
            Value::Undefined => *slot = leaf,
            Value::Array(items) => items.push(leaf),
            Value::Object(_) => debug!("dropping leaf that collides with a nested field"),
            _ => {
                let previous = std::mem::take(slot);
                *slot = Value::Array(vec![previous, leaf]);
            }
        }
        return;
    }

    if !slot.is_object() {
        let mut object = FormMap::new();
        match std::mem::take(slot) {
            Value::Undefined => {}
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    object.insert(index.to_string(), item);
                }
            }
            other => {
                object.insert("0".to_string(), other);
            }
        }
        *slot = Value::Object(object);
    }
    if let Value::Object(child) = slot {
        insert(child, rest, leaf);
    }
}

/// Picks the element an `[]` segment writes into.
///
/// `items[][sku]` followed by `items[][qty]` fills one element; a named field
/// that the last element already holds starts the next one.
fn append_key(map: &FormMap, rest: &[Segment]) -> String {
    if let (Some(last), Some(Segment::Key(_))) = (map.len().checked_sub(1), rest.first()) {
        let last = last.to_string();
        if let Some(Value::Object(element)) = map.get(&last) {
            if !occupied(element, rest) {
                return last;
            }
        }
    }
    map.len().to_string()
}

/// Whether inserting along `segments` would land on a value already set.
fn occupied(map: &FormMap, segments: &[Segment]) -> bool {
    match segments.split_first() {
        Some((Segment::Key(key), rest)) => match map.get(key) {
            None => false,
            Some(_) if rest.is_empty() => true,
            Some(Value::Object(child)) => occupied(child, rest),
            Some(_) => true,
        },
        // appends always open a fresh slot
        Some((Segment::Append, _)) | None => false,
    }
}

fn compact_arrays(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(compact_arrays),
        Value::Object(map) => {
            map.values_mut().for_each(compact_arrays);
            if let Some(indices) = array_indices(map) {
                let mut items: Vec<(usize, Value)> = indices
                    .into_iter()
                    .zip(std::mem::take(map).into_iter().map(|(_, v)| v))
                    .collect();
                items.sort_by_key(|(index, _)| *index);
                *value = Value::Array(items.into_iter().map(|(_, v)| v).collect());
            }
        }
        _ => {}
    }
}

/// Parses every key as a canonical array index, or returns `None`.
fn array_indices(map: &FormMap) -> Option<Vec<usize>> {
    if map.is_empty() {
        return None;
    }
    map.keys()
        .map(|key| {
            let canonical = key == "0" || !key.starts_with('0');
            if canonical && key.bytes().all(|b| b.is_ascii_digit()) {
                key.parse::<usize>().ok()
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(key: &str, value: &str) -> (String, FormEntry) {
        (key.to_string(), FormEntry::from(value))
    }

    #[test]
    fn test_parse_plain_key() {
        assert_eq!(parse("name"), vec![Segment::Key("name".to_string())]);
        assert_eq!(parse(""), vec![Segment::Key(String::new())]);
    }

    #[test]
    fn test_parse_malformed_keys_are_literal() {
        for key in ["a[b", "a[b]c", "[a]", "a[b[c]]"] {
            assert_eq!(parse(key), vec![Segment::Key(key.to_string())], "{}", key);
        }
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(
            parse("a[0][b]"),
            vec![
                Segment::Key("a".to_string()),
                Segment::Key("0".to_string()),
                Segment::Key("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unflatten_nested_objects() {
        let tree = unflatten(vec![
            text("user[name]", "string;Ann"),
            text("user[address][city]", "string;Oslo"),
        ]);
        let city = tree
            .get("user")
            .and_then(|u| u.get("address"))
            .and_then(|a| a.get("city"));
        assert_eq!(city, Some(&Value::from("string;Oslo")));
    }

    #[test]
    fn test_unflatten_append_and_repeat() {
        let tree = unflatten(vec![
            text("a[]", "1"),
            text("a[]", "2"),
            text("b", "x"),
            text("b", "y"),
            text("b", "z"),
        ]);
        assert_eq!(
            tree.get("a"),
            Some(&Value::Array(vec![Value::from("1"), Value::from("2")]))
        );
        assert_eq!(
            tree.get("b").and_then(Value::as_array).map(Vec::len),
            Some(3)
        );
    }

    #[test]
    fn test_unflatten_orders_and_compacts_indices() {
        let tree = unflatten(vec![text("a[2]", "c"), text("a[0]", "a")]);
        assert_eq!(
            tree.get("a"),
            Some(&Value::Array(vec![Value::from("a"), Value::from("c")]))
        );
    }

    #[test]
    fn test_unflatten_keeps_non_canonical_keys_as_object() {
        let tree = unflatten(vec![text("a[01]", "x")]);
        assert!(tree.get("a").map(Value::is_object).unwrap_or(false));
    }

    #[test]
    fn test_unflatten_array_of_objects() {
        let tree = unflatten(vec![
            text("items[0][id]", "number;1"),
            text("items[1][id]", "number;2"),
        ]);
        let items = tree.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items[1].get("id"), Some(&Value::from("number;2")));
    }

    #[test]
    fn test_unflatten_unindexed_objects_group_by_field() {
        let tree = unflatten(vec![
            text("items[][sku]", "string;A"),
            text("items[][qty]", "number;2"),
            text("items[][sku]", "string;B"),
            text("items[][qty]", "number;1"),
        ]);
        let items = tree.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("sku"), Some(&Value::from("string;A")));
        assert_eq!(items[0].get("qty"), Some(&Value::from("number;2")));
        assert_eq!(items[1].get("sku"), Some(&Value::from("string;B")));
        assert_eq!(items[1].get("qty"), Some(&Value::from("number;1")));
    }

    #[test]
    fn test_unflatten_unindexed_nested_lists_stay_in_element() {
        let tree = unflatten(vec![
            text("rows[][id]", "number;1"),
            text("rows[][tags][]", "string;a"),
            text("rows[][tags][]", "string;b"),
            text("rows[][addr][city]", "string;Oslo"),
            text("rows[][id]", "number;2"),
            text("rows[][addr][city]", "string;Bergen"),
        ]);
        let rows = tree.get("rows").and_then(Value::as_array).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("tags"),
            Some(&Value::Array(vec![Value::from("string;a"), Value::from("string;b")]))
        );
        assert_eq!(
            rows[1].get("addr").and_then(|a| a.get("city")),
            Some(&Value::from("string;Bergen"))
        );
    }

    #[test]
    fn test_root_stays_object() {
        let tree = unflatten(vec![text("0", "a")]);
        assert!(tree.is_object());
    }
}
