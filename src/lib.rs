//! # serde_formdata
//!
//! Flattens nested values into multipart form fields and restores them.
//!
//! ## What it does
//!
//! Multipart forms only carry flat, string-keyed fields. This crate writes a
//! nested [`Value`] tree (objects, arrays, numbers, dates, regexes, files)
//! into such fields using bracket key paths, and tags every scalar with its
//! kind so the receiving side can restore types:
//!
//! ```text
//! { "user": { "age": 42, "tags": ["a"] } }
//!
//! user[age]     = number;42
//! user[tags][0] = string;a
//! ```
//!
//! ## Key Features
//!
//! - **Reversible tags**: `null;`, `boolean;true`, `number;42`, `string;hi`,
//!   `date;…`, `regex;/a/g`, `array;empty`
//! - **Plain mode**: untagged output for servers that parse forms themselves
//! - **Files stay binary**: blobs and files pass through untouched; a list of
//!   files is sent under one repeated key
//! - **Serde Compatible**: go from `T: Serialize` to form entries and from a
//!   submitted form back to `T: Deserialize`
//! - **Never fails on input**: unknown tags, undefined values and malformed
//!   payloads degrade instead of erroring
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_formdata::{from_form_data, to_form_data, MultipartOptions};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Signup {
//!     email: String,
//!     age: u32,
//!     newsletter: bool,
//!     interests: Vec<String>,
//! }
//!
//! let signup = Signup {
//!     email: "ann@example.com".to_string(),
//!     age: 31,
//!     newsletter: false,
//!     interests: vec!["rust".to_string()],
//! };
//!
//! let form = to_form_data(&signup, MultipartOptions::default()).unwrap();
//! assert_eq!(form.get_text("age"), Some("number;31"));
//! assert_eq!(form.get_text("interests[0]"), Some("string;rust"));
//!
//! let back: Signup = from_form_data(&form).unwrap();
//! assert_eq!(back, signup);
//! ```
//!
//! ### Working with a sink directly
//!
//! ```rust
//! use serde_formdata::{encode, form_value, FormData, MultipartOptions};
//!
//! let mut form = FormData::new();
//! encode(&mut form, &form_value!({ "a": [10, 20] }), &MultipartOptions::new().with_indices(false));
//!
//! let values: Vec<_> = form.get_all("a[]").filter_map(|e| e.as_text()).collect();
//! assert_eq!(values, vec!["number;10", "number;20"]);
//! ```
//!
//! ## Limits
//!
//! - Root values must be objects; any other root writes nothing
//! - Recursion follows tree depth, with no depth limit
//! - The round trip covers the kinds listed above; everything else is
//!   converted through serde first
//!
//! See [`format`] for the full wire format.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod keypath;
pub mod kind;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod sink;
pub mod tag;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decode::{decode, decoded, parse_value};
pub use encode::{encode, encode_with_prefix, form, Encoder};
pub use error::{Error, Result};
pub use kind::Kind;
pub use map::FormMap;
pub use options::MultipartOptions;
pub use ser::{to_value, ValueSerializer};
pub use sink::{FormData, FormEntry, FormSink};
pub use tag::Tag;
pub use value::{Blob, File, Number, RegexValue, Value};

use serde::{de::DeserializeOwned, Serialize};

/// Converts `value` and encodes it into a new [`FormData`].
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{to_form_data, MultipartOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Query { page: u32, filter: Option<String> }
///
/// let form = to_form_data(&Query { page: 2, filter: None }, MultipartOptions::default()).unwrap();
/// assert_eq!(form.get_text("page"), Some("number;2"));
/// assert_eq!(form.get_text("filter"), Some("null;"));
/// ```
///
/// # Errors
///
/// Returns an error if `value` cannot be converted into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_form_data<T>(value: &T, options: MultipartOptions) -> Result<FormData>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let mut form = FormData::new();
    encode(&mut form, &value, &options);
    Ok(form)
}

/// Like [`to_form_data`], with type tags stripped.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::to_plain_form_data;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Query { page: u32, filter: Option<String> }
///
/// let form = to_plain_form_data(&Query { page: 2, filter: None }).unwrap();
/// assert_eq!(form.get_text("page"), Some("2"));
/// assert!(!form.contains_key("filter"));
/// ```
///
/// # Errors
///
/// Returns an error if `value` cannot be converted into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_plain_form_data<T>(value: &T) -> Result<FormData>
where
    T: ?Sized + Serialize,
{
    to_form_data(value, MultipartOptions::plain())
}

/// Regroups, decodes and deserializes a submitted form.
///
/// # Errors
///
/// Returns an error when the decoded tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_form_data<T>(form: &FormData) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decoded(form.to_tree()))
}
