use webidl_parser::ast::Definition;
use webidl_parser::parse;

#[test]
fn interface_mixin_body() {
    let mut defs = parse("interface mixin Mixin { attribute long x; };").expect("should parse");
    assert_eq!(defs.len(), 2);
    match defs.remove(0) {
        Definition::InterfaceMixin(m) => {
            assert_eq!(m.name, "Mixin");
            assert_eq!(m.members.len(), 1);
        }
        other => panic!("expected an interface mixin, got {other:?}"),
    }
}

#[test]
fn includes_node() {
    let mut defs = parse("Foo includes Bar;").expect("should parse");
    assert_eq!(defs.len(), 2);
    match defs.remove(0) {
        Definition::Includes(i) => {
            assert_eq!(i.target, "Foo");
            assert_eq!(i.includes, "Bar");
        }
        other => panic!("expected an includes node, got {other:?}"),
    }
}

#[test]
fn interface_and_mixin_and_includes_together() {
    let defs = parse(
        "interface Foo {}; interface mixin Bar { attribute long x; }; Foo includes Bar;",
    )
    .expect("should parse");
    assert_eq!(defs.len(), 4);
}

#[test]
fn callback_interface_shares_interface_body() {
    let mut defs = parse("callback interface Handler { void handle(); };").expect("should parse");
    match defs.remove(0) {
        Definition::CallbackInterface(c) => {
            assert_eq!(c.name, "Handler");
            assert_eq!(c.members.len(), 1);
        }
        other => panic!("expected a callback interface, got {other:?}"),
    }
}

#[test]
fn plain_callback() {
    let mut defs = parse("callback AsyncOperationCallback = void (DOMString result);").expect("should parse");
    match defs.remove(0) {
        Definition::Callback(c) => {
            assert_eq!(c.name, "AsyncOperationCallback");
            assert_eq!(c.arguments.len(), 1);
            assert_eq!(c.idl_type.base_name, "void");
        }
        other => panic!("expected a callback, got {other:?}"),
    }
}
