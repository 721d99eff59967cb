use serde::Serialize;
use serde_rekey::{tree, KeyMap, KeyToken, Number, Value};

#[test]
fn test_tree_macro_scalars() {
    assert_eq!(tree!(null), Value::Null);
    assert_eq!(tree!(false), Value::Bool(false));
    assert_eq!(tree!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(tree!(""), Value::String(String::new()));
}

#[test]
fn test_tree_macro_arrays() {
    assert_eq!(tree!([]), Value::Array(vec![]));
    assert_eq!(
        tree!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_tree_macro_objects_use_string_labels() {
    let value = tree!({"id": 1, "tags": ["a"], "owner": {"name": "Alice"},});
    let object = value.as_object().unwrap();

    let keys: Vec<&KeyToken> = object.keys().collect();
    assert_eq!(
        keys,
        vec![
            &KeyToken::from("id"),
            &KeyToken::from("tags"),
            &KeyToken::from("owner")
        ]
    );
    assert!(keys.iter().all(|key| !key.is_symbol()));
    assert_eq!(
        object.get_str("owner").unwrap().as_object().unwrap().get_str("name"),
        Some(&Value::from("Alice"))
    );
}

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_tree_macro_expressions() {
    let name = String::from("Bob");
    let value = tree!({"name": name, "origin": (Point { x: 0, y: 1 })});
    let object = value.as_object().unwrap();
    assert_eq!(object.get_str("name"), Some(&Value::from("Bob")));

    // Records embedded through serde keep symbolic field keys
    let origin = object.get_str("origin").unwrap().as_object().unwrap();
    let mut expected = KeyMap::new();
    expected.insert(KeyToken::sym("x"), Value::from(0));
    expected.insert(KeyToken::sym("y"), Value::from(1));
    assert_eq!(origin, &expected);
}
