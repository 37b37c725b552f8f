//! Wire format reference.
//!
//! This module documents the field names and field values this crate writes
//! and reads. It contains no code.
//!
//! # Field names
//!
//! Field names are key paths in bracket notation:
//!
//! | Position | Key |
//! |----------|-----|
//! | top-level field `a` | `a` |
//! | field `b` of object `a` | `a[b]` |
//! | element 2 of array `a` (indices on) | `a[2]` |
//! | any element of array `a` (indices off) | `a[]` |
//! | every file of a file list `a` | `a` (repeated) |
//!
//! A field whose name ends in `[]` and whose value is an array loses the
//! suffix before flattening (`{"tags[]": [1]}` writes `tags[0]`). The suffix
//! is removed repeatedly, but a key is never shortened below three
//! characters, so a field literally named `[]` keeps its name.
//!
//! Only objects have field names at the root. A root value of any other kind
//! writes nothing; callers must pass an object (or supply a key prefix).
//!
//! # Field values
//!
//! Every text value is tagged unless plain mode is on:
//!
//! ```text
//! null;                         null
//! boolean;true                  true
//! boolean;false                 false
//! number;<n>                    number, JavaScript rendering (Infinity, -Infinity, NaN)
//! string;<s>                    string, payload taken verbatim (may contain ';')
//! date;<rfc3339>                date, e.g. date;2024-01-15T10:30:00.000Z
//!                               (micro/nanoseconds appended when non-zero)
//! regex;/<pattern>/<flags>      regular expression
//! array;empty                   empty array
//! ```
//!
//! Blobs and files are appended as binary entries and are never tagged.
//!
//! ## Plain mode
//!
//! Plain mode writes the payload alone: `true`, `42`, `hello`,
//! `2024-01-15T10:30:00.000Z`, `/a+/g`. `null` is not written at all and an
//! empty array is written as the two characters `[]`. Plain output is meant
//! for servers that parse forms themselves; the decoder returns it as
//! strings.
//!
//! # Decoding
//!
//! Tags are matched in the order listed above, exact tags first. Anything
//! else, including a tag with different capitalisation or a `date;` payload
//! that does not read as a date, stays the original string.
//!
//! `number;` payloads are read like JavaScript's `Number()`: surrounding
//! whitespace is ignored, an empty payload is `0`, `0x`/`0o`/`0b` prefixes
//! are accepted, and anything unreadable is `NaN`.
//!
//! `date;` payloads may be RFC 3339, RFC 2822, the output of JavaScript's
//! `Date.prototype.toString()`, or a bare `YYYY-MM-DD[THH:MM:SS]` read as
//! UTC.
//!
//! `regex;` payloads split at the first and the last `/`. Without any `/`
//! the result is the empty pattern `(?:)` with no flags.
//!
//! # Regrouping
//!
//! [`unflatten`](crate::keypath::unflatten) reverses the field naming:
//! repeated names collect into arrays, `[]` appends, and objects whose keys
//! are all canonical integers (`0`, `1`, `12`, not `01`) become arrays
//! ordered by index. Gaps left by undefined elements close up, so
//! `[undefined, 1]` comes back as `[1]`.
//!
//! Without indices, `items[][sku]` and `items[][qty]` fill the same element;
//! a field the last element already has starts a new one. An element whose
//! fields were all dropped (undefined, or null in plain mode) leaves no
//! trace, so neighbouring elements can merge.
//!
//! A file list is written as one repeated key, so a list holding exactly one
//! file comes back as that single file rather than a one-element array.
