//! Tagged value decoding.
//!
//! [`parse_value`] turns one `kind;payload` string back into a typed
//! [`Value`]. [`decode`] applies it to every string leaf of a tree that has
//! already been regrouped from bracket keys (see
//! [`FormData::to_tree`](crate::FormData::to_tree)).
//!
//! Decoding never fails. Strings without a known tag, including everything
//! written in plain mode, come back unchanged.
//!
//! ```rust
//! use serde_formdata::{parse_value, Value};
//!
//! assert_eq!(parse_value("boolean;true"), Value::Bool(true));
//! assert_eq!(parse_value("number;1.5"), Value::from(1.5));
//! assert_eq!(parse_value("hello"), Value::from("hello"));
//! ```

use crate::{Number, RegexValue, Tag, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

/// Restores a single tagged string.
///
/// Tags are tried in this order: exact `null;`, `boolean;true`,
/// `boolean;false`, `array;empty`, then the prefixes `number;`, `string;`,
/// `date;`, `regex;`. A `date;` payload that cannot be read as a date and
/// any untagged input are returned as the original string.
#[must_use]
pub fn parse_value(value: &str) -> Value {
    match Tag::detect(value) {
        Some((Tag::Null, _)) => Value::Null,
        Some((Tag::True, _)) => Value::Bool(true),
        Some((Tag::False, _)) => Value::Bool(false),
        Some((Tag::EmptyArray, _)) => Value::Array(Vec::new()),
        Some((Tag::Number, payload)) => Value::Number(parse_number(payload)),
        Some((Tag::String, payload)) => Value::String(payload.to_string()),
        Some((Tag::Date, payload)) => match parse_date(payload) {
            Some(date) => Value::Date(date),
            None => {
                debug!(payload, "unreadable date payload, keeping raw string");
                Value::String(value.to_string())
            }
        },
        Some((Tag::Regex, payload)) => Value::Regex(RegexValue::parse(payload)),
        None => Value::String(value.to_string()),
    }
}

/// Decodes every string leaf of `value` in place and returns it.
///
/// Objects and arrays are walked without being changed themselves. Leaves
/// that are not strings (binary entries, values decoded earlier) are left as
/// they are, so decoding twice only changes strings that still carry a tag.
/// A root that is not a container is returned untouched.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{decode, form_value, Value};
///
/// let mut tree = form_value!({
///     "user": { "age": "number;42", "admin": "boolean;false" },
///     "note": "untagged"
/// });
/// decode(&mut tree);
///
/// let user = tree.get("user").unwrap();
/// assert_eq!(user.get("age"), Some(&Value::from(42)));
/// assert_eq!(user.get("admin"), Some(&Value::Bool(false)));
/// assert_eq!(tree.get("note"), Some(&Value::from("untagged")));
/// ```
pub fn decode(value: &mut Value) -> &mut Value {
    match value {
        Value::Object(map) => map.values_mut().for_each(decode_slot),
        Value::Array(items) => items.iter_mut().for_each(decode_slot),
        _ => {}
    }
    value
}

/// Owned form of [`decode`].
#[must_use]
pub fn decoded(mut value: Value) -> Value {
    decode(&mut value);
    value
}

fn decode_slot(slot: &mut Value) {
    match slot {
        Value::Object(_) | Value::Array(_) => {
            decode(slot);
        }
        Value::String(text) => {
            let parsed = parse_value(text);
            *slot = parsed;
        }
        _ => {}
    }
}

/// Reads a number the way JavaScript's `Number()` reads a string.
fn parse_number(payload: &str) -> Number {
    let text = payload.trim();
    if text.is_empty() {
        return Number::Integer(0);
    }
    match text {
        "Infinity" | "+Infinity" => return Number::Infinity,
        "-Infinity" => return Number::NegativeInfinity,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            // from_str_radix takes a sign; Number("0x-1") does not
            if digits.starts_with(['+', '-']) {
                return Number::NaN;
            }
            return i64::from_str_radix(digits, radix)
                .map(Number::Integer)
                .unwrap_or(Number::NaN);
        }
    }

    // Rust also accepts "inf" and "nan"; JavaScript does not.
    let numeric = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return Number::NaN;
    }
    if let Ok(integer) = text.parse::<i64>() {
        return Number::Integer(integer);
    }
    text.parse::<f64>()
        .map(Number::Float)
        .unwrap_or(Number::NaN)
}

/// Accepts RFC 3339, RFC 2822, `Date.prototype.toString()` output, and bare
/// ISO dates or date-times (read as UTC).
fn parse_date(payload: &str) -> Option<DateTime<Utc>> {
    let text = payload.trim();
    // "Mon Jan 15 2024 10:30:00 GMT+0000 (Coordinated Universal Time)"
    let js_string = text.split(" (").next().unwrap_or(text);

    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .or_else(|_| DateTime::parse_from_str(js_string, "%a %b %d %Y %H:%M:%S GMT%z"))
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_exact_tags() {
        assert_eq!(parse_value("null;"), Value::Null);
        assert_eq!(parse_value("boolean;true"), Value::Bool(true));
        assert_eq!(parse_value("boolean;false"), Value::Bool(false));
        assert_eq!(parse_value("array;empty"), Value::Array(vec![]));
    }

    #[test]
    fn test_near_miss_tags_pass_through() {
        for raw in ["null", "null;x", "boolean;TRUE", "array;", "NUMBER;1", ""] {
            assert_eq!(parse_value(raw), Value::from(raw), "{}", raw);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number("42"), Number::Integer(42));
        assert!(parse_number("42").is_integer());
        assert_eq!(parse_number("-1.25"), Number::Float(-1.25));
        assert_eq!(parse_number(" 7 "), Number::Integer(7));
        assert_eq!(parse_number(""), Number::Integer(0));
        assert_eq!(parse_number("1e3"), Number::Integer(1000));
        assert_eq!(parse_number("0x1f"), Number::Integer(31));
        assert!(parse_number("0x-1").is_nan());
        assert!(parse_number("0b+1").is_nan());
        assert_eq!(parse_number("1e+21"), Number::Float(1e21));
        assert_eq!(parse_number("Infinity"), Number::Infinity);
        assert_eq!(parse_number("-Infinity"), Number::NegativeInfinity);
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("1-2").is_nan());
        assert_eq!(parse_number("99999999999999999999"), Number::Float(1e20));
    }

    #[test]
    fn test_string_payload_keeps_semicolons() {
        assert_eq!(parse_value("string;a;b"), Value::from("a;b"));
        assert_eq!(parse_value("string;"), Value::from(""));
        assert_eq!(parse_value("string;number;1"), Value::from("number;1"));
    }

    #[test]
    fn test_dates() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        for raw in [
            "date;2024-01-15T10:30:00.000Z",
            "date;2024-01-15T12:30:00+02:00",
            "date;Mon, 15 Jan 2024 10:30:00 +0000",
            "date;Mon Jan 15 2024 10:30:00 GMT+0000 (Coordinated Universal Time)",
            "date;2024-01-15T10:30:00",
        ] {
            assert_eq!(parse_value(raw), Value::Date(expected), "{}", raw);
        }

        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_value("date;2024-01-15"), Value::Date(midnight));
    }

    #[test]
    fn test_bad_date_keeps_raw_string() {
        assert_eq!(
            parse_value("date;Invalid Date"),
            Value::from("date;Invalid Date")
        );
    }

    #[test]
    fn test_regex() {
        assert_eq!(
            parse_value("regex;/^a.b$/gi"),
            Value::Regex(RegexValue::new("^a.b$", "gi"))
        );
        assert_eq!(
            parse_value("regex;nothing"),
            Value::Regex(RegexValue::new("", ""))
        );
    }

    #[test]
    fn test_decode_walks_arrays_and_objects() {
        let mut tree = Value::Array(vec![
            Value::from("number;1"),
            Value::Array(vec![Value::from("null;")]),
            Value::Object(
                vec![("k".to_string(), Value::from("array;empty"))]
                    .into_iter()
                    .collect(),
            ),
            Value::Number(Number::Integer(5)),
        ]);
        decode(&mut tree);

        let items = tree.as_array().unwrap();
        assert_eq!(items[0], Value::from(1));
        assert_eq!(items[1], Value::Array(vec![Value::Null]));
        assert_eq!(items[2].get("k"), Some(&Value::Array(vec![])));
        assert_eq!(items[3], Value::from(5));
    }

    #[test]
    fn test_decode_root_string_untouched() {
        assert_eq!(decoded(Value::from("number;1")), Value::from("number;1"));
    }

    #[test]
    fn test_decode_twice_only_touches_tagged_strings() {
        let once = decoded(Value::Array(vec![Value::from("string;string;x")]));
        let twice = decoded(once.clone());
        assert_eq!(once, Value::Array(vec![Value::from("string;x")]));
        assert_eq!(twice, Value::Array(vec![Value::from("x")]));
    }
}
