use webidl_parser::ast::{DefaultValue, Definition, Member};
use webidl_parser::parse;

fn only_def(src: &str) -> Definition {
    let mut defs = parse(src).expect("should parse");
    assert_eq!(defs.len(), 2);
    defs.remove(0)
}

#[test]
fn required_field_without_default() {
    let def = only_def("dictionary Point { required double x; required double y; };");
    match def {
        Definition::Dictionary(d) => {
            assert_eq!(d.members.len(), 2);
            match &d.members[0] {
                Member::Field(f) => {
                    assert!(f.required);
                    assert!(f.default.is_none());
                    assert_eq!(f.name, "x");
                }
                other => panic!("expected a field, got {other:?}"),
            }
        }
        other => panic!("expected a dictionary, got {other:?}"),
    }
}

#[test]
fn field_with_numeric_default_and_no_default() {
    let def = only_def("dictionary Options { long count = 0; boolean flag; };");
    match def {
        Definition::Dictionary(d) => {
            match &d.members[0] {
                Member::Field(f) => match f.default.as_ref().unwrap() {
                    DefaultValue::Const(_) => {}
                    other => panic!("expected a const default, got {other:?}"),
                },
                other => panic!("expected a field, got {other:?}"),
            }
            match &d.members[1] {
                Member::Field(f) => assert!(f.default.is_none()),
                other => panic!("expected a field, got {other:?}"),
            }
        }
        other => panic!("expected a dictionary, got {other:?}"),
    }
}

#[test]
fn required_member_with_default_is_an_error() {
    let err = parse("dictionary Options { required long count = 0; };").unwrap_err();
    assert!(err.message.contains("must not have a default"), "unexpected message: {}", err.message);
}

#[test]
fn dictionary_with_inheritance() {
    let def = only_def("dictionary Derived : Base { long extra; };");
    match def {
        Definition::Dictionary(d) => assert_eq!(d.inheritance.as_deref(), Some("Base")),
        other => panic!("expected a dictionary, got {other:?}"),
    }
}

#[test]
fn empty_sequence_default_is_accepted() {
    let def = only_def("dictionary Options { sequence<long> values = []; };");
    match def {
        Definition::Dictionary(d) => match &d.members[0] {
            Member::Field(f) => assert!(matches!(f.default, Some(DefaultValue::Sequence { .. }))),
            other => panic!("expected a field, got {other:?}"),
        },
        other => panic!("expected a dictionary, got {other:?}"),
    }
}

#[test]
fn non_empty_sequence_default_is_rejected() {
    let err = parse("dictionary Options { sequence<long> values = [1]; };").unwrap_err();
    assert!(
        err.message.contains("Only empty sequence"),
        "unexpected message: {}",
        err.message
    );
}
