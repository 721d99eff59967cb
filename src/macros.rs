/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys are string labels. Any other expression is converted with
/// [`to_value`](crate::to_value); an expression that fails to convert, such
/// as a map with list keys, becomes [`Value::Null`](crate::Value::Null).
/// Call `to_value` directly when the error matters.
///
/// ```rust
/// use serde_rekey::{tree, Value};
///
/// let value = tree!({
///     "user": {"name": "Alice", "tags": ["a", "b"]},
///     "active": true,
///     "deleted_at": null
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! tree {
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
        $crate::Value::Array(vec![$($crate::tree!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::KeyMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::KeyMap::new();
        $(
            object.insert($key, $crate::tree!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
