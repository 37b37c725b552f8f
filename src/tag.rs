//! The type-tag vocabulary.
//!
//! Tagged values have the form `kind;payload`. Both the encoder and the
//! decoder go through [`Tag`], so every string the encoder writes is one the
//! decoder recognises.

/// One entry of the tag table.
///
/// Exact tags (`null;`, `boolean;true`, `boolean;false`, `array;empty`)
/// match the whole string. Prefix tags (`number;`, `string;`, `date;`,
/// `regex;`) carry a payload after the `;`.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::Tag;
///
/// assert_eq!(Tag::Number.tag("42"), "number;42");
/// assert_eq!(Tag::detect("string;a;b"), Some((Tag::String, "a;b")));
/// assert_eq!(Tag::detect("null;x"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    True,
    False,
    EmptyArray,
    Number,
    String,
    Date,
    Regex,
}

impl Tag {
    /// All tags, in the order the decoder tries them.
    pub const ALL: [Tag; 8] = [
        Tag::Null,
        Tag::True,
        Tag::False,
        Tag::EmptyArray,
        Tag::Number,
        Tag::String,
        Tag::Date,
        Tag::Regex,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Null => "null;",
            Tag::True => "boolean;true",
            Tag::False => "boolean;false",
            Tag::EmptyArray => "array;empty",
            Tag::Number => "number;",
            Tag::String => "string;",
            Tag::Date => "date;",
            Tag::Regex => "regex;",
        }
    }

    /// Returns `true` for tags that never carry a payload.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Tag::Null | Tag::True | Tag::False | Tag::EmptyArray)
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Tag {
        if value {
            Tag::True
        } else {
            Tag::False
        }
    }

    /// Builds a tagged string. Exact tags ignore the payload.
    #[must_use]
    pub fn tag(self, payload: &str) -> String {
        if self.is_exact() {
            self.as_str().to_string()
        } else {
            let mut out = String::with_capacity(self.as_str().len() + payload.len());
            out.push_str(self.as_str());
            out.push_str(payload);
            out
        }
    }

    /// Matches this tag against `value`, returning the payload.
    #[must_use]
    pub fn strip(self, value: &str) -> Option<&str> {
        if self.is_exact() {
            (value == self.as_str()).then_some("")
        } else {
            value.strip_prefix(self.as_str())
        }
    }

    /// Finds the first tag in [`Tag::ALL`] order that matches `value`.
    #[must_use]
    pub fn detect(value: &str) -> Option<(Tag, &str)> {
        Tag::ALL
            .iter()
            .find_map(|tag| tag.strip(value).map(|payload| (*tag, payload)))
    }
}
