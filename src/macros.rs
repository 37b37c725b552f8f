/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// `undefined` and `null` are keywords; any other expression is converted
/// with [`to_value`](crate::to_value) and falls back to `Value::Null` if that
/// fails.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{form_value, Value};
///
/// let value = form_value!({
///     "name": "Alice",
///     "nickname": undefined,
///     "tags": ["a", "b"],
///     "meta": { "age": 30 }
/// });
/// assert_eq!(value.get("nickname"), Some(&Value::Undefined));
/// ```
#[macro_export]
macro_rules! form_value {
    (undefined) => {
        $crate::Value::Undefined
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::form_value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::FormMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FormMap::new();
        $(
            object.insert($key.to_string(), $crate::form_value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
