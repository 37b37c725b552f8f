//! Dynamic value representation for form data.
//!
//! [`Value`] is the tree the encoder walks and the decoder rebuilds. Besides
//! the JSON-like kinds it carries dates, regular expressions, and binary
//! payloads ([`Blob`] and named [`File`]s) that travel untagged through the
//! form.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_formdata::{form_value, Blob, File, Value};
//!
//! let text = Value::from("hello");
//! let avatar = File::new(vec![0x89, 0x50], "avatar.png", "image/png");
//!
//! let mut value = form_value!({
//!     "name": "Alice",
//!     "tags": ["admin", "ops"]
//! });
//! if let Value::Object(map) = &mut value {
//!     map.insert("avatar".to_string(), Value::from(avatar));
//! }
//! assert!(value.is_object());
//! ```
//!
//! ## Numbers
//!
//! [`Number`] renders like JavaScript's `Number.prototype.toString`:
//! `Infinity`, `-Infinity` and `NaN` by name, and exponent notation (`1e+21`,
//! `1.5e-7`) outside `[1e-6, 1e21)`, so every value survives a tagged round
//! trip. Equality is numeric: an integer and a float holding the same value
//! compare equal.
//!
//! ```rust
//! use serde_formdata::Number;
//!
//! assert_eq!(Number::Integer(1), Number::Float(1.0));
//! assert_eq!(Number::Float(f64::NAN), Number::NaN);
//! assert_eq!(Number::Float(-0.0).to_string(), "0");
//! ```

use crate::{Error, FormMap, Kind, Result};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed node of a form value tree.
///
/// `Undefined` marks a field that exists in the tree but must never reach
/// the form. An array whose elements are all [`File`]s is a file list and
/// is appended under a single key.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(Value::Undefined.is_undefined());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Regex(RegexValue),
    Array(Vec<Value>),
    Object(FormMap),
    Blob(Blob),
    File(File),
}

/// A numeric value with JavaScript-style special values.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// assert!(Number::Infinity.is_special());
/// assert_eq!(Number::NegativeInfinity.to_string(), "-Infinity");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for Infinity, -Infinity and NaN.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Number::NaN => true,
            Number::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Converts this number to an `i64` if it holds a whole value in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (a, b) if a.is_nan() || b.is_nan() => a.is_nan() && b.is_nan(),
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 renders as 0
            Number::Float(fl) if *fl == 0.0 => write!(f, "0"),
            // exponent form outside [1e-6, 1e21), with an explicit `+`
            Number::Float(fl) if fl.abs() >= 1e21 || fl.abs() < 1e-6 => {
                let text = format!("{:e}", fl);
                match text.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exp)
                    }
                    _ => f.write_str(&text),
                }
            }
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A regular expression carried as JavaScript-style source and flags.
///
/// The value renders as `/pattern/flags`. An empty pattern is stored as
/// `(?:)`, which is how an empty expression renders.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::RegexValue;
///
/// let re = RegexValue::new("^a+$", "i");
/// assert_eq!(re.to_string(), "/^a+$/i");
/// assert!(re.to_regex().unwrap().is_match("AAA"));
///
/// assert_eq!(RegexValue::parse("/x.y/gm"), RegexValue::new("x.y", "gm"));
/// assert_eq!(RegexValue::new("", "").to_string(), "/(?:)/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegexValue {
    pattern: String,
    flags: String,
}

impl RegexValue {
    #[must_use]
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        let pattern = pattern.into();
        RegexValue {
            pattern: if pattern.is_empty() {
                "(?:)".to_string()
            } else {
                pattern
            },
            flags: flags.into(),
        }
    }

    /// Parses the `/pattern/flags` form.
    ///
    /// The pattern is everything between the first and the last `/`; the
    /// flags follow the last `/`. Input without any `/` yields an empty
    /// pattern with no flags.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        match (source.find('/'), source.rfind('/')) {
            (Some(first), Some(last)) => {
                let pattern = if last > first {
                    &source[first + 1..last]
                } else {
                    ""
                };
                RegexValue::new(pattern, &source[last + 1..])
            }
            _ => RegexValue::new("", ""),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Compiles the expression with the `regex` crate.
    ///
    /// Flags `i`, `m`, `s`, `x` and `u` map onto builder options. `g`, `y`,
    /// `d` and `v` only affect how a JavaScript engine iterates matches and
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegexFlag`] for any other flag and
    /// [`Error::Regex`] when the pattern does not compile.
    pub fn to_regex(&self) -> Result<Regex> {
        let mut builder = RegexBuilder::new(&self.pattern);
        for flag in self.flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                'u' => builder.unicode(true),
                'g' | 'y' | 'd' | 'v' => &mut builder,
                other => return Err(Error::InvalidRegexFlag(other)),
            };
        }
        Ok(builder.build()?)
    }
}

impl fmt::Display for RegexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

impl From<&Regex> for RegexValue {
    fn from(re: &Regex) -> Self {
        RegexValue::new(re.as_str(), "")
    }
}

/// A binary payload with a MIME type.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::Blob;
///
/// let blob = Blob::new(b"hello world".to_vec(), "text/plain");
/// assert_eq!(blob.size(), 11);
/// assert_eq!(blob.slice(0, 5).data().as_ref(), b"hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
    mime_type: String,
}

impl Blob {
    #[must_use]
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Blob {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the bytes in `start..end`, clamped to the blob.
    ///
    /// The slice has no MIME type, matching a browser `Blob.slice()` call
    /// without a content type.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Blob {
        let end = end.min(self.size());
        let start = start.min(end);
        Blob {
            data: self.data.slice(start..end),
            mime_type: String::new(),
        }
    }
}

/// A [`Blob`] with a file name and modification time.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::File;
///
/// let file = File::new(b"%PDF".to_vec(), "report.pdf", "application/pdf")
///     .with_last_modified(1_700_000_000_000);
/// assert_eq!(file.name(), "report.pdf");
/// assert_eq!(file.size(), 4);
/// assert_eq!(file.last_modified(), 1_700_000_000_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: i64,
}

impl File {
    /// Creates a file stamped with the current time.
    #[must_use]
    pub fn new(
        data: impl Into<Bytes>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        File {
            blob: Blob::new(data, mime_type),
            name: name.into(),
            last_modified: Utc::now().timestamp_millis(),
        }
    }

    /// Sets the modification time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn with_last_modified(mut self, millis: i64) -> Self {
        self.last_modified = millis;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    #[must_use]
    pub fn last_modified_date(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.last_modified).single()
    }

    #[must_use]
    pub fn blob(&self) -> &Blob {
        &self.blob
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.blob.size()
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        self.blob.mime_type()
    }

    #[must_use]
    pub fn data(&self) -> &Bytes {
        self.blob.data()
    }
}

/// Renders a date the way both encoding modes write it.
///
/// Milliseconds are always written; micro- and nanoseconds only when present.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    let nanos = date.timestamp_subsec_nanos();
    let precision = if nanos % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else if nanos % 1_000 == 0 {
        SecondsFormat::Micros
    } else {
        SecondsFormat::Nanos
    };
    date.to_rfc3339_opts(precision, true)
}

impl Value {
    /// Classifies this value. See [`Kind::of`].
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Value::Regex(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Value::File(_))
    }

    /// Returns `true` for blobs and files (every file is a blob).
    #[inline]
    #[must_use]
    pub const fn is_blob(&self) -> bool {
        matches!(self, Value::Blob(_) | Value::File(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is a whole number, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::{Number, Value};
    ///
    /// assert_eq!(Value::Number(Number::Float(42.0)).as_i64(), Some(42));
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&FormMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut FormMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_regex(&self) -> Option<&RegexValue> {
        match self {
            Value::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// Returns the blob of a `Blob` or a `File`.
    #[inline]
    #[must_use]
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            Value::Blob(blob) => Some(blob),
            Value::File(file) => Some(file.blob()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Value::File(file) => Some(file),
            _ => None,
        }
    }

    /// Looks up a field of an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Regex(_) => "regex",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Blob(_) => "blob",
            Value::File(_) => "file",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(dt) => write!(f, "{}", format_date(dt)),
            Value::Regex(re) => write!(f, "{}", re),
            Value::Array(arr) => {
                write!(
                    f,
                    "{}",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Blob(_) => write!(f, "[object Blob]"),
            Value::File(_) => write!(f, "[object File]"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined => serializer.serialize_none(),
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(dt) => serializer.serialize_str(&format_date(dt)),
            Value::Regex(re) => serializer.collect_str(re),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Blob(blob) => serializer.serialize_bytes(blob.data()),
            Value::File(file) => serializer.serialize_bytes(file.data()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any form value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> std::result::Result<Value, E> {
                Ok(Value::Blob(Blob::new(
                    value.to_vec(),
                    "application/octet-stream",
                )))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> std::result::Result<Value, E> {
                Ok(Value::Blob(Blob::new(value, "application/octet-stream")))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = FormMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<RegexValue> for Value {
    fn from(value: RegexValue) -> Self {
        Value::Regex(value)
    }
}

impl From<Blob> for Value {
    fn from(value: Blob) -> Self {
        Value::Blob(value)
    }
}

impl From<File> for Value {
    fn from(value: File) -> Self {
        Value::File(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<File>> for Value {
    fn from(value: Vec<File>) -> Self {
        Value::Array(value.into_iter().map(Value::File).collect())
    }
}

impl From<FormMap> for Value {
    fn from(value: FormMap) -> Self {
        Value::Object(value)
    }
}
