use webidl_parser::ast::{Definition, Member};
use webidl_parser::parse;

#[test]
fn namespace_with_readonly_attribute_and_operation() {
    let mut defs = parse("namespace Console { readonly attribute boolean enabled; void log(DOMString message); };")
        .expect("should parse");
    match defs.remove(0) {
        Definition::Namespace(n) => {
            assert_eq!(n.members.len(), 2);
            match &n.members[0] {
                Member::Attribute(a) => assert!(a.readonly),
                other => panic!("expected an attribute, got {other:?}"),
            }
            match &n.members[1] {
                Member::Operation(op) => assert_eq!(op.name.as_deref(), Some("log")),
                other => panic!("expected an operation, got {other:?}"),
            }
        }
        other => panic!("expected a namespace, got {other:?}"),
    }
}

#[test]
fn non_readonly_namespace_attribute_is_an_error() {
    let err = parse("namespace Console { attribute boolean enabled; };").unwrap_err();
    assert!(err.message.contains("must be readonly"), "unexpected message: {}", err.message);
}

#[test]
fn partial_namespace_is_not_registered() {
    let defs = parse("partial namespace Console {}; namespace Console {};").expect("should parse");
    assert_eq!(defs.len(), 3);
}
