/// Builds a [`Value`](crate::Value) tree from JSON-like literal syntax.
///
/// Object keys must be string literals; member order is preserved as
/// written. Any Rust expression with a `From<T> for Value` impl can appear
/// in value position.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::{json, Value};
///
/// let value = json!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "active": true,
///     "address": null
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), Value::Null);
        assert_eq!(json!(true), Value::Bool(true));
        assert_eq!(json!(false), Value::Bool(false));
        assert_eq!(json!(42), Value::Number(Number::Integer(42)));
        assert_eq!(json!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(json!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]), Value::Array(vec![]));

        let arr = json!([1, "two", null]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::String("two".to_string()));
                assert_eq!(vec[2], Value::Null);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}), Value::Object(Map::new()));

        let obj = json!({
            "name": "Alice",
            "age": 30,
            "tags": ["admin", "user"]
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 3);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
                assert!(map.get("tags").unwrap().is_array());
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_json_macro_preserves_member_order() {
        let obj = json!({"z": 1, "a": 2});
        let keys: Vec<_> = obj.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
