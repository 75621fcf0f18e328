use jsonfmt::{json, Map, Number, Value};

#[test]
fn test_json_macro_null() {
    let value = json!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_json_macro_booleans() {
    let true_val = json!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = json!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_json_macro_numbers() {
    let int_val = json!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = json!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = json!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_json_macro_strings() {
    let string_val = json!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = json!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_json_macro_arrays() {
    assert_eq!(json!([]), Value::Array(vec![]));

    let mixed = json!([1, "two", true, null]);
    let expected = Value::Array(vec![
        Value::Number(Number::Integer(1)),
        Value::String("two".to_string()),
        Value::Bool(true),
        Value::Null,
    ]);
    assert_eq!(mixed, expected);
}

#[test]
fn test_json_macro_nested_structures() {
    let value = json!({
        "user": {
            "name": "Alice",
            "scores": [90, 85]
        },
        "active": true
    });

    let user = value.as_object().unwrap().get("user").unwrap();
    assert_eq!(user.as_object().unwrap().get("name"), Some(&json!("Alice")));

    let scores = user.as_object().unwrap().get("scores").unwrap();
    assert_eq!(scores.as_array().unwrap().len(), 2);
}

#[test]
fn test_json_macro_empty_object() {
    assert_eq!(json!({}), Value::Object(Map::new()));
}

#[test]
fn test_json_macro_renders_like_source() {
    use jsonfmt::{FormatOptions, Formatter};

    let value = json!({"a": [1, 2], "b": null});
    let options = FormatOptions::compact();
    let rendered = Formatter::new(&options).render_value(&value).unwrap();
    assert_eq!(rendered, "{\"a\":[1,2],\"b\":null}");
}
