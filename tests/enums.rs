use webidl_parser::ast::Definition;
use webidl_parser::parse;

#[test]
fn enum_with_values() {
    let mut defs = parse(r#"enum Color { "red", "green", "blue" };"#).expect("should parse");
    assert_eq!(defs.len(), 2);
    match defs.remove(0) {
        Definition::Enum(e) => {
            let values: Vec<_> = e.values.iter().map(|v| v.value.as_str()).collect();
            assert_eq!(values, vec!["red", "green", "blue"]);
        }
        other => panic!("expected an enum, got {other:?}"),
    }
}

#[test]
fn empty_enum_is_an_error() {
    let err = parse("enum Color { };").unwrap_err();
    assert_eq!(err.message, "No value in enum");
}

#[test]
fn missing_comma_between_values_is_an_error() {
    let err = parse(r#"enum Color { "red" "green" };"#).unwrap_err();
    assert!(err.message.contains("expected"), "unexpected message: {}", err.message);
}

#[test]
fn trailing_comma_is_an_error() {
    let err = parse(r#"enum Color { "red", };"#).unwrap_err();
    assert!(err.message.contains("Trailing comma"), "unexpected message: {}", err.message);
}
