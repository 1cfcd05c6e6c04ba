use webidl_parser::ast::Definition;
use webidl_parser::parse;

#[test]
fn typedef_of_union_type() {
    let mut defs = parse("typedef (DOMString or long) NumberOrString;").expect("should parse");
    assert_eq!(defs.len(), 2);
    match defs.remove(0) {
        Definition::Typedef(t) => {
            assert_eq!(t.name, "NumberOrString");
            assert!(t.idl_type.union);
        }
        other => panic!("expected a typedef, got {other:?}"),
    }
}

#[test]
fn single_branch_union_is_an_error() {
    let err = parse("typedef (DOMString) NumberOrString;").unwrap_err();
    assert!(
        err.message.contains("At least two types"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn typedef_of_plain_type() {
    let mut defs = parse("typedef unsigned long UnsignedLong;").expect("should parse");
    match defs.remove(0) {
        Definition::Typedef(t) => {
            assert_eq!(t.idl_type.base_name, "long");
            assert_eq!(t.idl_type.prefix.as_deref(), Some("unsigned"));
        }
        other => panic!("expected a typedef, got {other:?}"),
    }
}

#[test]
fn nullable_type_rejects_double_question_mark() {
    let err = parse("typedef long?? Foo;").unwrap_err();
    assert!(
        err.message.contains("nullable twice"),
        "unexpected message: {}",
        err.message
    );
}
