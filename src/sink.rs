//! Form sinks: where encoded entries go.
//!
//! The encoder only needs something it can `append(key, entry)` to, called
//! any number of times with the same key. [`FormSink`] is that capability;
//! [`FormData`] is an in-memory, insertion-ordered implementation that also
//! lets you read entries back and regroup them into a nested tree.
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::{FormEntry, FormSink};
//!
//! struct Printer(Vec<String>);
//!
//! impl FormSink for Printer {
//!     fn append(&mut self, key: &str, entry: FormEntry) {
//!         self.0.push(format!("{}={}", key, entry));
//!     }
//! }
//!
//! let mut printer = Printer(Vec::new());
//! printer.append("a", FormEntry::from("string;x"));
//! assert_eq!(printer.0, vec!["a=string;x"]);
//! ```

use crate::{keypath, Blob, File, Value};
use std::fmt;

/// A single value appended to a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEntry {
    Text(String),
    Blob(Blob),
    File(File),
}

impl FormEntry {
    /// Returns the text of a `Text` entry.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormEntry::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            FormEntry::File(file) => Some(file),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        !matches!(self, FormEntry::Text(_))
    }

    /// Converts the entry into a leaf of a value tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            FormEntry::Text(text) => Value::String(text),
            FormEntry::Blob(blob) => Value::Blob(blob),
            FormEntry::File(file) => Value::File(file),
        }
    }
}

impl fmt::Display for FormEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormEntry::Text(text) => write!(f, "{}", text),
            FormEntry::Blob(blob) => write!(f, "<blob {} bytes>", blob.size()),
            FormEntry::File(file) => write!(f, "<file {} {} bytes>", file.name(), file.size()),
        }
    }
}

impl From<String> for FormEntry {
    fn from(text: String) -> Self {
        FormEntry::Text(text)
    }
}

impl From<&str> for FormEntry {
    fn from(text: &str) -> Self {
        FormEntry::Text(text.to_string())
    }
}

impl From<Blob> for FormEntry {
    fn from(blob: Blob) -> Self {
        FormEntry::Blob(blob)
    }
}

impl From<File> for FormEntry {
    fn from(file: File) -> Self {
        FormEntry::File(file)
    }
}

/// An append-only, multi-valued key/value destination.
pub trait FormSink {
    /// Appends `entry` under `key`. Repeated keys must be kept.
    fn append(&mut self, key: &str, entry: FormEntry);
}

impl<S: FormSink + ?Sized> FormSink for &mut S {
    fn append(&mut self, key: &str, entry: FormEntry) {
        (**self).append(key, entry);
    }
}

impl FormSink for Vec<(String, FormEntry)> {
    fn append(&mut self, key: &str, entry: FormEntry) {
        self.push((key.to_string(), entry));
    }
}

/// An ordered list of form entries.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{FormData, FormEntry, FormSink};
///
/// let mut form = FormData::new();
/// form.append("tag", FormEntry::from("a"));
/// form.append("tag", FormEntry::from("b"));
///
/// assert_eq!(form.len(), 2);
/// assert_eq!(form.get("tag").and_then(FormEntry::as_text), Some("a"));
/// assert_eq!(form.get_all("tag").count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, FormEntry)>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first entry under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Returns every entry under `key`, in append order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FormEntry> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Returns the text of the first entry under `key`.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FormEntry::as_text)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in append order, repeated keys included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, FormEntry)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Regroups the entries into a nested value tree.
    ///
    /// See [`keypath::unflatten`]. String leaves are left tagged; pass the
    /// result to [`decode`](crate::decode) to restore types.
    #[must_use]
    pub fn to_tree(&self) -> Value {
        keypath::unflatten(self.entries.iter().cloned())
    }
}

impl FormSink for FormData {
    fn append(&mut self, key: &str, entry: FormEntry) {
        self.entries.push((key.to_string(), entry));
    }
}

impl IntoIterator for FormData {
    type Item = (String, FormEntry);
    type IntoIter = std::vec::IntoIter<(String, FormEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = &'a (String, FormEntry);
    type IntoIter = std::slice::Iter<'a, (String, FormEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, FormEntry)> for FormData {
    fn from_iter<T: IntoIterator<Item = (String, FormEntry)>>(iter: T) -> Self {
        FormData {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_keeps_duplicates() {
        let mut sink: Vec<(String, FormEntry)> = Vec::new();
        FormSink::append(&mut sink, "k", FormEntry::from("1"));
        FormSink::append(&mut sink, "k", FormEntry::from("2"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1], ("k".to_string(), FormEntry::from("2")));
    }

    #[test]
    fn test_keys_in_append_order() {
        let form: FormData = vec![
            ("b".to_string(), FormEntry::from("1")),
            ("a".to_string(), FormEntry::from("2")),
            ("b".to_string(), FormEntry::from("3")),
        ]
        .into_iter()
        .collect();
        assert_eq!(form.keys().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(form.get_text("b"), Some("1"));
        assert!(!form.contains_key("c"));
    }

    #[test]
    fn test_entry_into_value() {
        let file = File::new(b"x".to_vec(), "x.bin", "application/octet-stream");
        let entry = FormEntry::from(file.clone());
        assert!(entry.is_binary());
        assert_eq!(entry.as_file(), Some(&file));
        assert_eq!(entry.into_value(), Value::File(file));
        assert_eq!(FormEntry::from("t").into_value(), Value::from("t"));
    }

    #[test]
    fn test_display() {
        let blob = Blob::new(b"abc".to_vec(), "");
        assert_eq!(FormEntry::from(blob).to_string(), "<blob 3 bytes>");
    }
}
