use indoc::indoc;
use webidl_parser::ast::{Definition, Member, MemberSpecial, OperationSpecial};
use webidl_parser::parse;

fn only_def(src: &str) -> Definition {
    let mut defs = parse(src).expect("should parse");
    assert_eq!(defs.len(), 2, "expected one definition plus the trailing eof node");
    defs.remove(0)
}

#[test]
fn interface_with_zero_members() {
    let def = only_def("interface Empty {};");
    match def {
        Definition::Interface(i) => {
            assert_eq!(i.name, "Empty");
            assert!(i.members.is_empty());
            assert!(!i.partial);
            assert!(i.inheritance.is_none());
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn interface_with_inheritance() {
    let def = only_def("interface Dog : Animal {};");
    match def {
        Definition::Interface(i) => assert_eq!(i.inheritance.as_deref(), Some("Animal")),
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn readonly_attribute_member() {
    let def = only_def("interface Foo { readonly attribute DOMString bar; };");
    match def {
        Definition::Interface(i) => match &i.members[0] {
            Member::Attribute(a) => {
                assert_eq!(a.name, "bar");
                assert!(a.readonly);
                assert!(!a.inherit);
                assert_eq!(a.idl_type.base_name, "DOMString");
            }
            other => panic!("expected an attribute, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn static_operation_member() {
    let def = only_def("interface Foo { static void bar(); };");
    match def {
        Definition::Interface(i) => match &i.members[0] {
            Member::Operation(op) => {
                assert_eq!(op.member_special, Some(MemberSpecial::Static));
                assert_eq!(op.name.as_deref(), Some("bar"));
                assert!(op.arguments.is_empty());
            }
            other => panic!("expected an operation, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn getter_setter_deleter_operations() {
    let def = only_def("interface Map { getter any (DOMString key); setter void (DOMString key, any value); deleter void (DOMString key); };");
    match def {
        Definition::Interface(i) => {
            let specials: Vec<_> = i
                .members
                .iter()
                .map(|m| match m {
                    Member::Operation(op) => op.special,
                    _ => panic!("expected only operations"),
                })
                .collect();
            assert_eq!(
                specials,
                vec![
                    Some(OperationSpecial::Getter),
                    Some(OperationSpecial::Setter),
                    Some(OperationSpecial::Deleter),
                ]
            );
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn bare_stringifier_member() {
    let def = only_def("interface Foo { stringifier; };");
    match def {
        Definition::Interface(i) => match &i.members[0] {
            Member::Operation(op) => {
                assert_eq!(op.member_special, Some(MemberSpecial::Stringifier));
                assert!(op.name.is_none());
            }
            other => panic!("expected an operation, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn iterable_with_single_type() {
    let def = only_def("interface Foo { iterable<DOMString>; };");
    match def {
        Definition::Interface(i) => match &i.members[0] {
            Member::Iterable(it) => {
                assert!(it.key_type.is_none());
                assert_eq!(it.value_type.base_name, "DOMString");
            }
            other => panic!("expected an iterable, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn iterable_with_two_types_is_an_error() {
    let err = parse("interface Foo { iterable<DOMString, long>; };").unwrap_err();
    assert!(err.message.contains("';'"), "unexpected message: {}", err.message);
}

#[test]
fn maplike_requires_two_types_and_may_be_readonly() {
    let def = only_def("interface Foo { readonly maplike<DOMString, long>; };");
    match def {
        Definition::Interface(i) => match &i.members[0] {
            Member::Iterable(it) => {
                assert!(it.readonly);
                assert_eq!(it.key_type.as_ref().unwrap().base_name, "DOMString");
                assert_eq!(it.value_type.base_name, "long");
            }
            other => panic!("expected an iterable, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn attribute_of_sequence_type_is_rejected() {
    let err = parse("interface Foo { attribute sequence<long> bar; };").unwrap_err();
    assert!(err.message.contains("sequence types"), "unexpected message: {}", err.message);
}

#[test]
fn duplicate_top_level_name_is_an_error() {
    let err = parse("interface Foo {}; interface Foo {};").unwrap_err();
    assert_eq!(err.message, "name \"Foo\" of type \"interface\" was already seen");
}

#[test]
fn partial_interface_is_not_registered() {
    let defs = parse("partial interface Foo {}; interface Foo {};").expect("should parse");
    assert_eq!(defs.len(), 3);
}

#[test]
fn interface_with_several_member_kinds() {
    let src = indoc! {r#"
        interface Dog {
            const boolean isGoodBoy = true;
            readonly attribute DOMString name;
            void bark(optional DOMString tone = "loud");
        };
    "#};
    let def = only_def(src);
    match def {
        Definition::Interface(i) => {
            assert_eq!(i.name, "Dog");
            assert_eq!(i.members.len(), 3);
            assert!(matches!(i.members[0], Member::Const(_)));
            assert!(matches!(i.members[1], Member::Attribute(_)));
            match &i.members[2] {
                Member::Operation(op) => assert_eq!(op.name.as_deref(), Some("bark")),
                other => panic!("expected an operation, got {other:?}"),
            }
        }
        other => panic!("expected an interface, got {other:?}"),
    }
}
