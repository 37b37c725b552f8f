//! Configuration options for form encoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::{encode, form_value, FormData, MultipartOptions};
//!
//! let value = form_value!({ "a": [10, 20] });
//!
//! let mut form = FormData::new();
//! encode(&mut form, &value, &MultipartOptions::new().with_indices(false));
//! assert_eq!(form.get_all("a[]").count(), 2);
//! ```

/// Controls how values are written into a form sink.
///
/// - `plain`: emit native-looking values without `kind;` tags. Use this when
///   the receiving server parses the form itself; the decoder can no longer
///   recover types.
/// - `indices`: write array elements as `arr[0]`, `arr[1]` (default) or as
///   repeated `arr[]` entries.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::MultipartOptions;
///
/// let options = MultipartOptions::default();
/// assert!(!options.plain);
/// assert!(options.indices);
///
/// let options = MultipartOptions::plain();
/// assert!(options.plain);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultipartOptions {
    pub plain: bool,
    pub indices: bool,
}

impl Default for MultipartOptions {
    fn default() -> Self {
        MultipartOptions {
            plain: false,
            indices: true,
        }
    }
}

impl MultipartOptions {
    /// Creates default options (tagged values, indexed arrays).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for untagged output.
    #[must_use]
    pub fn plain() -> Self {
        MultipartOptions {
            plain: true,
            ..Default::default()
        }
    }

    /// Sets whether type tags are stripped.
    #[must_use]
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Sets whether array elements get numeric keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::MultipartOptions;
    ///
    /// let options = MultipartOptions::new().with_indices(false);
    /// assert!(!options.indices);
    /// ```
    #[must_use]
    pub fn with_indices(mut self, indices: bool) -> Self {
        self.indices = indices;
        self
    }
}
