use webidl_parser::ast::{Definition, ExtAttrRhs};
use webidl_parser::parse;

#[test]
fn bare_extended_attribute() {
    let mut defs = parse("[Exposed] interface Foo {};").expect("should parse");
    match defs.remove(0) {
        Definition::Interface(i) => {
            assert_eq!(i.ext_attrs.len(), 1);
            assert_eq!(i.ext_attrs[0].name, "Exposed");
            assert!(i.ext_attrs[0].rhs.is_none());
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn extended_attribute_with_identifier_list_rhs() {
    let mut defs = parse("[Exposed=(Window,Worker)] interface Foo {};").expect("should parse");
    match defs.remove(0) {
        Definition::Interface(i) => {
            let ids = i.ext_attrs[0].rhs_identifiers.as_ref().expect("identifier list");
            let names: Vec<_> = ids.iter().map(|id| id.name.as_str()).collect();
            assert_eq!(names, vec!["Window", "Worker"]);
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn extended_attribute_with_argument_list() {
    let mut defs = parse("[Constructor(DOMString name)] interface Foo {};").expect("should parse");
    match defs.remove(0) {
        Definition::Interface(i) => {
            let args = i.ext_attrs[0].arguments.as_ref().expect("argument list");
            assert_eq!(args.len(), 1);
            assert_eq!(args[0].name, "name");
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn extended_attribute_with_rhs_and_arguments() {
    let mut defs = parse("[LegacyFactoryFunction=Audio(DOMString src)] interface Foo {};").expect("should parse");
    match defs.remove(0) {
        Definition::Interface(i) => {
            match i.ext_attrs[0].rhs.as_ref().unwrap() {
                ExtAttrRhs::Identifier { value, .. } => assert_eq!(value, "Audio"),
                other => panic!("expected an identifier rhs, got {other:?}"),
            }
            assert_eq!(i.ext_attrs[0].arguments.as_ref().unwrap().len(), 1);
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn empty_extended_attribute_list_is_an_error() {
    let err = parse("[] interface Foo {};").unwrap_err();
    assert!(err.message.contains("must not be empty"), "unexpected message: {}", err.message);
}

#[test]
fn trailing_comma_in_extended_attribute_list_is_an_error() {
    let err = parse("[Exposed, ] interface Foo {};").unwrap_err();
    assert!(err.message.contains("Trailing comma"), "unexpected message: {}", err.message);
}

#[test]
fn stray_extended_attributes_without_a_definition_is_an_error() {
    let err = parse("[Exposed]").unwrap_err();
    assert_eq!(err.message, "Stray extended attributes");
}
