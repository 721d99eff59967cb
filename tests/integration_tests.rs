use serde::{Deserialize, Serialize};
use serde_rekey::{
    format, format_with_options, from_value, rekey, rekey_into, tree, Error, KeyPairs, KeyPath,
    KeyToken, RekeyOptions, SymbolTable, Value,
};

fn symbols() -> SymbolTable {
    SymbolTable::from_iter(["a", "b"])
}

fn options() -> RekeyOptions {
    RekeyOptions::new().with_symbols(symbols())
}

fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_parse_invariants() {
    let symbols = symbols();

    assert!(KeyPath::parse("", &symbols).unwrap_err().is_invalid_key_path());
    assert!(KeyPath::parse(Vec::<KeyToken>::new(), &symbols)
        .unwrap_err()
        .is_invalid_key_path());

    let path = KeyPath::parse("a.:b.c", &symbols).unwrap();
    assert_eq!(
        path.tokens(),
        &[
            KeyToken::Str("a".to_string()),
            KeyToken::sym("b"),
            KeyToken::Str("c".to_string())
        ]
    );

    let path = KeyPath::parse("a\\.b.c", &symbols).unwrap();
    assert_eq!(
        path.tokens(),
        &[KeyToken::Str("a.b".to_string()), KeyToken::Str("c".to_string())]
    );
}

#[test]
fn test_pair_validation() {
    let err = KeyPairs::build([("a", ":a.:b")], &symbols()).unwrap_err();
    assert!(err.is_invalid_key_pairs());
    assert_eq!(err.kind(), "invalid_key_pairs");
}

#[test]
fn test_unmapped_pass_through() {
    let renamed = format_with_options(json(r#"{"a": "b", "z": 1}"#), [("a", ":a")], &options())
        .unwrap();
    let map = renamed.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&KeyToken::sym("a")), Some(&Value::from("b")));
    assert_eq!(map.get_str("z"), Some(&Value::from(1)));
}

#[test]
fn test_nested_and_list_scenario() {
    let source = json(r#"[{"a": {"b": "c"}}, {"a": {"b": "d"}}]"#);
    let renamed =
        format_with_options(source, [("a", ":a"), ("a.b", ":a.:b")], &options()).unwrap();

    let items = renamed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for (item, leaf) in items.iter().zip(["c", "d"]) {
        let outer = item.as_object().unwrap();
        assert_eq!(outer.len(), 1);
        let inner = outer.get(&KeyToken::sym("a")).unwrap().as_object().unwrap();
        assert_eq!(inner.get(&KeyToken::sym("b")), Some(&Value::from(leaf)));
    }
}

#[derive(Serialize)]
struct Pair {
    a: String,
    b: String,
}

#[test]
fn test_struct_normalization() {
    let record = Pair {
        a: "x".to_string(),
        b: "y".to_string(),
    };
    let mapping = [(":a", "a"), (":b", "b")];

    let from_record = rekey(&record, mapping, &options()).unwrap();
    let from_map = format_with_options(json(r#"{"a": "x", "b": "y"}"#), mapping, &options());

    assert_eq!(from_record, from_map.unwrap());
    assert_eq!(from_record, tree!({"a": "x", "b": "y"}));
}

#[test]
fn test_identity_on_empty_mapping() {
    let source = json(r#"{"a": [1, 2.5, {"b": null}], "c": {"d": [true, "e"]}}"#);
    assert_eq!(format(source.clone(), &KeyPairs::empty()).unwrap(), source);
    assert_eq!(
        format(source.clone(), Vec::<(&str, &str)>::new()).unwrap(),
        source
    );
}

#[test]
fn test_lists_are_transparent() {
    let pairs = KeyPairs::build([("id", "uid")], &SymbolTable::new()).unwrap();
    let item = json(r#"{"id": 1, "children": [{"id": 2}]}"#);
    let both = format(Value::Array(vec![item.clone(), item.clone()]), &pairs).unwrap();
    let single = format(item, &pairs).unwrap();
    assert_eq!(both, Value::Array(vec![single.clone(), single]));
}

#[test]
fn test_rule_does_not_leak_into_unrelated_subtrees() {
    let pairs = KeyPairs::build([("id", "uid")], &SymbolTable::new()).unwrap();
    let renamed = format(json(r#"{"id": 1, "children": [{"id": 2}]}"#), &pairs).unwrap();
    assert_eq!(renamed, tree!({"uid": 1, "children": [{"id": 2}]}));
}

#[test]
fn test_literal_keys_via_token_lists() {
    let source = json(r#"{"rows": {"0": "first"}}"#);
    // JSON object keys are strings, so "0" is a string label, not a literal
    let pairs = KeyPairs::build(
        [(
            vec![KeyToken::from("rows"), KeyToken::from("0")],
            vec![KeyToken::from("rows"), KeyToken::from("head")],
        )],
        &SymbolTable::new(),
    )
    .unwrap();
    assert_eq!(
        format(source, &pairs).unwrap(),
        tree!({"rows": {"head": "first"}})
    );

    let mut inner = serde_rekey::KeyMap::new();
    inner.insert(KeyToken::from(0), Value::from("first"));
    let mut outer = serde_rekey::KeyMap::new();
    outer.insert("rows", Value::Object(inner));
    let pairs = KeyPairs::build(
        [(
            vec![KeyToken::from("rows"), KeyToken::from(0)],
            vec![KeyToken::from("rows"), KeyToken::from("head")],
        )],
        &SymbolTable::new(),
    )
    .unwrap();
    assert_eq!(
        format(Value::Object(outer), &pairs).unwrap(),
        tree!({"rows": {"head": "first"}})
    );
}

#[test]
fn test_keys_containing_dots() {
    let source = json(r#"{"app.version": "1.2", "app": {"version": "x"}}"#);
    let renamed = format(source, [("app\\.version", "release"), ("app.version", "app.v")]).unwrap();
    assert_eq!(
        renamed,
        tree!({"release": "1.2", "app": {"v": "x"}})
    );
}

#[test]
fn test_mapping_loaded_from_json() {
    let mapping = json(r#"[["usr", "user"], ["usr.nm", "user.name"]]"#);
    let pairs = KeyPairs::from_value(&mapping, &SymbolTable::new()).unwrap();
    let renamed = format(json(r#"{"usr": {"nm": "Alice"}}"#), &pairs).unwrap();
    assert_eq!(renamed, tree!({"user": {"name": "Alice"}}));

    let mapping = json(r#"{"usr": "user", "usr.nm": "user.name"}"#);
    assert_eq!(
        KeyPairs::from_value(&mapping, &SymbolTable::new()).unwrap(),
        pairs
    );
}

#[test]
fn test_mapping_errors_from_json() {
    let err = KeyPairs::from_value(&json(r#"[["a", "b"], ["c"]]"#), &SymbolTable::new())
        .unwrap_err();
    assert_eq!(err.kind(), "invalid_pair");

    let err = KeyPairs::from_value(&json(r#"[["a", 1]]"#), &SymbolTable::new()).unwrap_err();
    assert_eq!(err.kind(), "invalid_key_path");

    let err = KeyPairs::from_value(&json(r#"[["a", ""]]"#), &SymbolTable::new()).unwrap_err();
    assert_eq!(err.kind(), "invalid_key_path");

    let err = KeyPairs::from_value(&json(r#"{"a": "b.c"}"#), &SymbolTable::new()).unwrap_err();
    match err {
        Error::InvalidKeyPairs { index, .. } => assert_eq!(index, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_precompiled_registry_is_shared_across_threads() {
    let pairs = KeyPairs::build([("a", "x"), ("a.b", "x.y")], &SymbolTable::new()).unwrap();
    let results: Vec<Value> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pairs = &pairs;
                scope.spawn(move || format(tree!({"a": {"b": i}}), pairs).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result, tree!({"x": {"y": (i as i32)}}));
    }
}

#[derive(Serialize)]
struct WireOrder {
    order_no: u32,
    cust: WireCustomer,
    lines: Vec<WireLine>,
}

#[derive(Serialize)]
struct WireCustomer {
    nm: String,
}

#[derive(Serialize)]
struct WireLine {
    sku: String,
    qty: u32,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Order {
    id: u32,
    customer: Customer,
    lines: Vec<Line>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Customer {
    name: String,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Line {
    sku: String,
    quantity: u32,
}

#[test]
fn test_adapt_wire_record_into_domain_type() {
    let wire = WireOrder {
        order_no: 12,
        cust: WireCustomer {
            nm: "Alice".to_string(),
        },
        lines: vec![
            WireLine {
                sku: "W-1".to_string(),
                qty: 2,
            },
            WireLine {
                sku: "G-2".to_string(),
                qty: 1,
            },
        ],
    };

    let symbols = SymbolTable::from_iter(["order_no", "cust", "nm", "lines", "qty"]);
    let options = RekeyOptions::new().with_symbols(symbols);
    let mapping = [
        (":order_no", "id"),
        (":cust", "customer"),
        (":cust.:nm", "customer.name"),
        (":lines.:qty", ":lines.quantity"),
    ];

    let order: Order = rekey_into(&wire, mapping, &options).unwrap();
    assert_eq!(
        order,
        Order {
            id: 12,
            customer: Customer {
                name: "Alice".to_string()
            },
            lines: vec![
                Line {
                    sku: "W-1".to_string(),
                    quantity: 2
                },
                Line {
                    sku: "G-2".to_string(),
                    quantity: 1
                },
            ],
        }
    );
}

#[test]
fn test_formatted_value_serializes_to_json() {
    let renamed = format(json(r#"{"a": {"b": [1, 2]}}"#), [("a.b", "a.c")]).unwrap();
    assert_eq!(
        serde_json::to_string(&renamed).unwrap(),
        r#"{"a":{"c":[1,2]}}"#
    );

    #[derive(Deserialize, Debug, PartialEq)]
    struct Target {
        a: Inner,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Inner {
        c: Vec<i64>,
    }

    let target: Target = from_value(renamed).unwrap();
    assert_eq!(target, Target { a: Inner { c: vec![1, 2] } });
}
