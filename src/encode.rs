//! Form encoding.
//!
//! The [`Encoder`] walks a [`Value`] tree depth-first and appends one entry
//! per leaf to a [`FormSink`]:
//!
//! | Kind | Tagged | Plain |
//! |------|--------|-------|
//! | null | `null;` | omitted |
//! | boolean | `boolean;true` | `true` |
//! | number | `number;42` | `42` |
//! | string | `string;hi` | `hi` |
//! | date | `date;2024-01-15T10:30:00.000Z` | `2024-01-15T10:30:00.000Z` |
//! | regex | `regex;/a+/g` | `/a+/g` |
//! | empty array | `array;empty` | `[]` |
//! | blob / file | raw binary | raw binary |
//!
//! Object fields become `parent[child]` keys and array elements become
//! `parent[0]` (or `parent[]` without indices). A non-empty array of files is
//! appended under its own key once per file.
//!
//! ## Root values
//!
//! Only objects contribute entries at the root: their field names become the
//! top-level keys. Any other root value has no key to be written under and
//! produces nothing.
//!
//! ```rust
//! use serde_formdata::{encode, form_value, FormData, MultipartOptions};
//!
//! let mut form = FormData::new();
//! encode(&mut form, &form_value!(42), &MultipartOptions::default());
//! assert!(form.is_empty());
//! ```

use crate::keypath::{child_key, index_key, strip_array_suffix};
use crate::value::format_date;
use crate::{FormEntry, FormMap, FormSink, Kind, MultipartOptions, Tag, Value};
use tracing::trace;

/// Writes a value tree into a sink.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{form_value, Encoder, FormData, MultipartOptions};
///
/// let mut form = FormData::new();
/// Encoder::new(&mut form, MultipartOptions::default())
///     .encode(&form_value!({ "a": { "b": 1 } }), None);
///
/// assert_eq!(form.get_text("a[b]"), Some("number;1"));
/// ```
pub struct Encoder<'a, S: FormSink + ?Sized> {
    sink: &'a mut S,
    options: MultipartOptions,
}

impl<'a, S: FormSink + ?Sized> Encoder<'a, S> {
    pub fn new(sink: &'a mut S, options: MultipartOptions) -> Self {
        Encoder { sink, options }
    }

    #[must_use]
    pub fn options(&self) -> &MultipartOptions {
        &self.options
    }

    /// Encodes `value` under `key_prefix`.
    ///
    /// With no prefix, only object fields are written.
    pub fn encode(&mut self, value: &Value, key_prefix: Option<&str>) {
        let kind = value.kind();
        match (kind, key_prefix) {
            (Kind::PlainObject, _) => {
                if let Value::Object(map) = value {
                    self.encode_fields(map, key_prefix);
                }
            }
            (Kind::Undefined, _) => {}
            (_, None) => trace!(kind = ?kind, "dropping root value without a key"),
            (_, Some(key)) => self.encode_leaf(key, value, kind),
        }
    }

    fn encode_fields(&mut self, map: &FormMap, key_prefix: Option<&str>) {
        for (key, value) in map {
            let key = if value.is_array() {
                strip_array_suffix(key)
            } else {
                key.as_str()
            };
            let key = child_key(key_prefix, key);
            self.encode(value, Some(&key));
        }
    }

    fn encode_leaf(&mut self, key: &str, value: &Value, kind: Kind) {
        let plain = self.options.plain;
        match value {
            Value::Null => {
                if plain {
                    trace!(key, "dropping null in plain mode");
                } else {
                    self.append_text(key, Tag::Null.tag(""));
                }
            }
            Value::Bool(b) => {
                let text = if plain {
                    b.to_string()
                } else {
                    Tag::boolean(*b).tag("")
                };
                self.append_text(key, text);
            }
            Value::Number(n) => self.append_scalar(key, Tag::Number, &n.to_string()),
            Value::String(s) => self.append_scalar(key, Tag::String, s),
            Value::Array(items) if kind == Kind::FileArray => {
                for item in items {
                    if let Value::File(file) = item {
                        self.sink.append(key, FormEntry::File(file.clone()));
                    }
                }
            }
            Value::Array(items) if items.is_empty() => {
                let text = if plain {
                    "[]".to_string()
                } else {
                    Tag::EmptyArray.tag("")
                };
                self.append_text(key, text);
            }
            Value::Array(items) => {
                let indices = self.options.indices;
                for (index, item) in items.iter().enumerate() {
                    let key = index_key(key, indices.then_some(index));
                    self.encode(item, Some(&key));
                }
            }
            Value::Date(date) => self.append_scalar(key, Tag::Date, &format_date(date)),
            Value::Regex(re) => self.append_scalar(key, Tag::Regex, &re.to_string()),
            Value::Blob(blob) => self.sink.append(key, FormEntry::Blob(blob.clone())),
            Value::File(file) => self.sink.append(key, FormEntry::File(file.clone())),
            Value::Undefined | Value::Object(_) => {}
        }
    }

    fn append_scalar(&mut self, key: &str, tag: Tag, payload: &str) {
        let text = if self.options.plain {
            payload.to_string()
        } else {
            tag.tag(payload)
        };
        self.append_text(key, text);
    }

    fn append_text(&mut self, key: &str, text: String) {
        self.sink.append(key, FormEntry::Text(text));
    }
}

/// Encodes `value` into `sink` and returns the sink.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{encode, form_value, FormData, MultipartOptions};
///
/// let mut form = FormData::new();
/// encode(&mut form, &form_value!({ "a": [10, 20] }), &MultipartOptions::default());
///
/// assert_eq!(form.get_text("a[0]"), Some("number;10"));
/// assert_eq!(form.get_text("a[1]"), Some("number;20"));
/// ```
pub fn encode<'s, S: FormSink + ?Sized>(
    sink: &'s mut S,
    value: &Value,
    options: &MultipartOptions,
) -> &'s mut S {
    encode_with_prefix(sink, value, options, None)
}

/// Encodes `value` with every key nested under `key_prefix`.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{encode_with_prefix, form_value, FormData, MultipartOptions};
///
/// let mut form = FormData::new();
/// encode_with_prefix(&mut form, &form_value!({ "b": true }), &MultipartOptions::default(), Some("a"));
/// assert_eq!(form.get_text("a[b]"), Some("boolean;true"));
///
/// encode_with_prefix(&mut form, &form_value!("x"), &MultipartOptions::default(), Some("c"));
/// assert_eq!(form.get_text("c"), Some("string;x"));
/// ```
pub fn encode_with_prefix<'s, S: FormSink + ?Sized>(
    sink: &'s mut S,
    value: &Value,
    options: &MultipartOptions,
    key_prefix: Option<&str>,
) -> &'s mut S {
    Encoder::new(&mut *sink, *options).encode(value, key_prefix);
    sink
}

/// Encodes `value` without type tags, whatever `options.plain` says.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{form, form_value, FormData, MultipartOptions};
///
/// let mut data = FormData::new();
/// form(&mut data, &form_value!({ "x": null, "y": true }), &MultipartOptions::default());
///
/// assert_eq!(data.get_text("y"), Some("true"));
/// assert!(!data.contains_key("x"));
/// ```
pub fn form<'s, S: FormSink + ?Sized>(
    sink: &'s mut S,
    value: &Value,
    options: &MultipartOptions,
) -> &'s mut S {
    encode(sink, value, &options.with_plain(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, FormData, Number, RegexValue};
    use chrono::{TimeZone, Utc};

    fn object(fields: Vec<(&str, Value)>) -> Value {
        Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn entries(form: &FormData) -> Vec<(String, String)> {
        form.iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_tagged_scalars() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let value = object(vec![
            ("n", Value::Null),
            ("t", Value::Bool(true)),
            ("f", Value::Bool(false)),
            ("i", Value::from(-3)),
            ("x", Value::from(0.25)),
            ("s", Value::from("a;b")),
            ("d", Value::Date(date)),
            ("r", Value::Regex(RegexValue::new("a+", "gi"))),
            ("e", Value::Array(vec![])),
        ]);
        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::default());

        assert_eq!(
            entries(&form),
            pairs(&[
                ("n", "null;"),
                ("t", "boolean;true"),
                ("f", "boolean;false"),
                ("i", "number;-3"),
                ("x", "number;0.25"),
                ("s", "string;a;b"),
                ("d", "date;2024-01-15T10:30:00.000Z"),
                ("r", "regex;/a+/gi"),
                ("e", "array;empty"),
            ])
        );
    }

    #[test]
    fn test_plain_scalars() {
        let value = object(vec![
            ("n", Value::Null),
            ("t", Value::Bool(true)),
            ("i", Value::Number(Number::Infinity)),
            ("s", Value::from("")),
            ("r", Value::Regex(RegexValue::new("", ""))),
            ("e", Value::Array(vec![])),
        ]);
        let mut data = FormData::new();
        form(&mut data, &value, &MultipartOptions::default());

        assert_eq!(
            entries(&data),
            pairs(&[
                ("t", "true"),
                ("i", "Infinity"),
                ("s", ""),
                ("r", "/(?:)/"),
                ("e", "[]"),
            ])
        );
    }

    #[test]
    fn test_undefined_is_omitted_at_any_depth() {
        let value = object(vec![
            ("a", Value::Undefined),
            ("b", object(vec![("c", Value::Undefined), ("d", Value::from(1))])),
            ("e", Value::Array(vec![Value::Undefined, Value::from(2)])),
        ]);
        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::default());

        assert_eq!(
            entries(&form),
            pairs(&[("b[d]", "number;1"), ("e[1]", "number;2")])
        );
    }

    #[test]
    fn test_nested_arrays_and_objects() {
        let value = object(vec![(
            "rows",
            Value::Array(vec![
                object(vec![("id", Value::from(1))]),
                Value::Array(vec![Value::from("x")]),
            ]),
        )]);
        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::default());

        assert_eq!(
            entries(&form),
            pairs(&[("rows[0][id]", "number;1"), ("rows[1][0]", "string;x")])
        );

        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::new().with_indices(false));
        assert_eq!(
            entries(&form),
            pairs(&[("rows[][id]", "number;1"), ("rows[][]", "string;x")])
        );
    }

    #[test]
    fn test_trailing_brackets_only_stripped_for_arrays() {
        let value = object(vec![
            ("tags[]", Value::Array(vec![Value::from(1)])),
            ("name[]", Value::from("x")),
            ("[]", Value::Array(vec![Value::from(2)])),
        ]);
        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::default());

        assert_eq!(
            entries(&form),
            pairs(&[
                ("tags[0]", "number;1"),
                ("name[]", "string;x"),
                ("[][0]", "number;2"),
            ])
        );
    }

    #[test]
    fn test_files_are_raw_in_both_modes() {
        let file = File::new(b"pdf".to_vec(), "a.pdf", "application/pdf");
        let value = object(vec![("doc", Value::File(file.clone()))]);

        for options in [MultipartOptions::default(), MultipartOptions::plain()] {
            let mut form = FormData::new();
            encode(&mut form, &value, &options);
            assert_eq!(form.get("doc"), Some(&FormEntry::File(file.clone())));
        }
    }

    #[test]
    fn test_file_array_uses_one_key() {
        let a = File::new(b"a".to_vec(), "a.txt", "text/plain");
        let b = File::new(b"b".to_vec(), "b.txt", "text/plain");
        let value = object(vec![("docs[]", Value::from(vec![a.clone(), b.clone()]))]);
        let mut form = FormData::new();
        encode(&mut form, &value, &MultipartOptions::default());

        assert_eq!(form.len(), 2);
        assert_eq!(
            form.get_all("docs").cloned().collect::<Vec<_>>(),
            vec![FormEntry::File(a), FormEntry::File(b)]
        );
    }

    #[test]
    fn test_root_scalars_dropped() {
        for value in [Value::Null, Value::from("x"), Value::Array(vec![Value::from(1)])] {
            let mut form = FormData::new();
            encode(&mut form, &value, &MultipartOptions::default());
            assert!(form.is_empty());
        }
    }

    #[test]
    fn test_encode_returns_sink_for_chaining() {
        let mut sink: Vec<(String, FormEntry)> = Vec::new();
        let len = encode(
            &mut sink,
            &object(vec![("a", Value::from(1))]),
            &MultipartOptions::default(),
        )
        .len();
        assert_eq!(len, 1);
    }
}
