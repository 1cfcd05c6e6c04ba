use webidl_parser::ast::Definition;
use webidl_parser::parse;

fn arguments(src: &str) -> Vec<webidl_parser::ast::Argument> {
    let mut defs = parse(src).expect("should parse");
    match defs.remove(0) {
        Definition::Interface(i) => match &i.members[0] {
            webidl_parser::ast::Member::Operation(op) => op.arguments.clone(),
            other => panic!("expected an operation, got {other:?}"),
        },
        other => panic!("expected an interface, got {other:?}"),
    }
}

#[test]
fn optional_argument_with_default() {
    let args = arguments("interface Foo { void bar(optional long count = 0); };");
    assert_eq!(args.len(), 1);
    assert!(args[0].optional);
    assert!(args[0].default.is_some());
}

#[test]
fn variadic_argument() {
    let args = arguments("interface Foo { void bar(DOMString... names); };");
    assert_eq!(args.len(), 1);
    assert!(args[0].variadic);
    assert!(!args[0].optional);
}

#[test]
fn argument_name_may_be_a_reserved_keyword() {
    let args = arguments("interface Foo { void bar(long required); };");
    assert_eq!(args[0].name, "required");
}

#[test]
fn trailing_comma_in_argument_list_is_an_error() {
    let err = parse("interface Foo { void bar(long a, ); };").unwrap_err();
    assert!(err.message.contains("Trailing comma"), "unexpected message: {}", err.message);
}

#[test]
fn multiple_arguments() {
    let args = arguments("interface Foo { void bar(long a, optional long b = 1, DOMString... rest); };");
    assert_eq!(args.len(), 3);
    assert_eq!(args[0].name, "a");
    assert_eq!(args[1].name, "b");
    assert_eq!(args[2].name, "rest");
}
