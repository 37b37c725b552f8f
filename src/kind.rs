//! Value classification.
//!
//! The encoder treats every node according to exactly one [`Kind`]. Kinds are
//! decided by a fixed-order chain of shape predicates rather than by the
//! variant alone: a non-empty array made only of files is a
//! [`Kind::FileArray`], not an [`Kind::Array`], and file/blob checks run
//! before the plain-object check so binary payloads are never walked as
//! nested fields.

use crate::Value;

/// The encoding treatment a value receives.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{File, Kind, Value};
///
/// let file = File::new(b"x".to_vec(), "a.txt", "text/plain");
/// let files = Value::from(vec![file.clone(), file]);
///
/// assert_eq!(files.kind(), Kind::FileArray);
/// assert_eq!(Value::Array(vec![]).kind(), Kind::Array);
/// assert_eq!(Value::Undefined.kind(), Kind::Undefined);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    File,
    Blob,
    FileArray,
    PlainObject,
    Array,
    Date,
    Regex,
}

impl Kind {
    /// Classifies a value.
    ///
    /// Checks run in this order: undefined, null, boolean, number, string,
    /// file, blob, file array, plain object, array, date, regex.
    #[must_use]
    pub fn of(value: &Value) -> Kind {
        if value.is_undefined() {
            Kind::Undefined
        } else if value.is_null() {
            Kind::Null
        } else if value.is_bool() {
            Kind::Bool
        } else if value.is_number() {
            Kind::Number
        } else if value.is_string() {
            Kind::String
        } else if is_file(value) {
            Kind::File
        } else if is_blob(value) {
            Kind::Blob
        } else if is_file_array(value) {
            Kind::FileArray
        } else if is_plain_object(value) {
            Kind::PlainObject
        } else if value.is_array() {
            Kind::Array
        } else if value.is_date() {
            Kind::Date
        } else {
            Kind::Regex
        }
    }
}

/// A binary payload: either a bare blob or a named file.
#[must_use]
pub fn is_blob(value: &Value) -> bool {
    value.as_blob().is_some()
}

/// A blob with a file name and modification time.
#[must_use]
pub fn is_file(value: &Value) -> bool {
    value.as_file().is_some()
}

/// A non-empty array in which every element is a named file.
#[must_use]
pub fn is_file_array(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => !items.is_empty() && items.iter().all(is_file),
        None => false,
    }
}

/// An object whose fields are flattened into child keys.
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object() && !is_blob(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Blob, File, FormMap, Number, RegexValue};
    use chrono::{TimeZone, Utc};

    fn file(name: &str) -> File {
        File::new(b"data".to_vec(), name, "text/plain").with_last_modified(0)
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(Kind::of(&Value::Null), Kind::Null);
        assert_eq!(Kind::of(&Value::Bool(false)), Kind::Bool);
        assert_eq!(Kind::of(&Value::Number(Number::NaN)), Kind::Number);
        assert_eq!(Kind::of(&Value::from("")), Kind::String);
        assert_eq!(
            Kind::of(&Value::Date(Utc.timestamp_opt(0, 0).unwrap())),
            Kind::Date
        );
        assert_eq!(
            Kind::of(&Value::Regex(RegexValue::new("a", ""))),
            Kind::Regex
        );
    }

    #[test]
    fn test_binary_kinds() {
        assert_eq!(Kind::of(&Value::File(file("a"))), Kind::File);
        assert_eq!(
            Kind::of(&Value::Blob(Blob::new(b"x".to_vec(), ""))),
            Kind::Blob
        );
        assert_eq!(Value::from(vec![file("a")]).kind(), Kind::FileArray);
    }

    #[test]
    fn test_file_array_requires_only_files() {
        let files = Value::from(vec![file("a"), file("b")]);
        assert!(is_file_array(&files));

        let mixed = Value::Array(vec![Value::File(file("a")), Value::from(1)]);
        assert!(!is_file_array(&mixed));
        assert_eq!(mixed.kind(), Kind::Array);

        let blobs = Value::Array(vec![Value::Blob(Blob::new(b"x".to_vec(), ""))]);
        assert_eq!(blobs.kind(), Kind::Array);

        assert!(!is_file_array(&Value::Array(vec![])));
    }

    #[test]
    fn test_plain_object() {
        assert!(is_plain_object(&Value::Object(FormMap::new())));
        assert!(!is_plain_object(&Value::File(file("a"))));
        assert!(!is_plain_object(&Value::Array(vec![])));
    }
}
