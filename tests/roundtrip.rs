//! Every fixture here must parse and then reconstruct back into its own
//! source text byte-for-byte.

use indoc::indoc;
use webidl_parser::parse;
use webidl_parser::reconstruct::reconstruct;

fn assert_round_trips(src: &str) {
    let defs = parse(src).expect("should parse");
    assert_eq!(reconstruct(&defs), src);
}

#[test]
fn interface_with_several_member_kinds_round_trips() {
    assert_round_trips(indoc! {"
        [Exposed=Window]
        interface Dog : Animal {
            const boolean isGoodBoy = true;
            readonly attribute DOMString name;
            void bark(optional DOMString tone=\"loud\", long... extra);
            iterable<DOMString>;
        };
    "});
}

#[test]
fn interface_with_multiple_extended_attributes_round_trips() {
    assert_round_trips(indoc! {"
        [Global=Window,Exposed=(Window,Worker)]
        interface Window {
            getter DOMString lookup(DOMString key);
            setter void define(DOMString key, DOMString value);
            deleter void forget(DOMString key);
        };
    "});
}

#[test]
fn extended_attribute_with_argument_list_round_trips() {
    assert_round_trips(indoc! {"
        [LegacyFactoryFunction(DOMString name)]
        interface Person {
            readonly attribute DOMString name;
        };
    "});
}

#[test]
fn dictionary_with_inheritance_and_defaults_round_trips() {
    assert_round_trips(indoc! {"
        dictionary Options : Base {
            required long count;
            boolean flag = true;
            DOMString label = \"hi\";
            sequence<long> values = [];
        };
    "});
}

#[test]
fn enum_round_trips() {
    assert_round_trips(indoc! {"
        enum Color {
            \"red\",
            \"green\",
            \"blue\"
        };
    "});
}

#[test]
fn typedefs_with_union_and_numeric_types_round_trip() {
    assert_round_trips(indoc! {"
        typedef (DOMString or Blob)? Payload;
        typedef unsigned long long Counter;
        typedef unrestricted float Ratio;
    "});
}

#[test]
fn namespace_round_trips() {
    assert_round_trips(indoc! {"
        namespace Utils {
            DOMString greet();
            readonly attribute long count;
        };
    "});
}

#[test]
fn mixin_and_includes_round_trip() {
    assert_round_trips(indoc! {"
        interface mixin Loud {
            void shout();
            const long volume = 11;
        };
        Dog includes Loud;
    "});
}

#[test]
fn callback_interface_round_trips() {
    assert_round_trips(indoc! {"
        callback interface ErrorHandler {
            void handleError(DOMString message);
        };
    "});
}

#[test]
fn plain_callback_round_trips() {
    assert_round_trips("callback AsyncCallback = void (long result);\n");
}

#[test]
fn maplike_and_setlike_round_trip() {
    assert_round_trips(indoc! {"
        interface Registry {
            readonly maplike<DOMString, long>;
        };
        interface Tags {
            setlike<DOMString>;
        };
    "});
}

#[test]
fn static_and_stringifier_members_round_trip() {
    assert_round_trips(indoc! {"
        interface Widget {
            static  Widget create();
            stringifier  DOMString describe();
        };
    "});
}

#[test]
fn partial_definitions_round_trip() {
    assert_round_trips(indoc! {"
        partial  interface Dog {
            void bark();
        };
        partial  dictionary Options {
            boolean flag;
        };
        partial  namespace Utils {
            void reset();
        };
    "});
}

#[test]
fn union_with_three_branches_round_trips() {
    assert_round_trips("typedef (DOMString or  long or  Blob) Payload;\n");
}

#[test]
fn extended_attribute_spacing_round_trips() {
    assert_round_trips(indoc! {"
        [Exposed =Window, LegacyFactoryFunction= Audio(DOMString  src)]
        interface Person {
            readonly attribute DOMString name;
        };
    "});
}

#[test]
fn extended_attribute_identifier_list_spacing_round_trips() {
    assert_round_trips("[Exposed=( Window , Worker )]\ninterface Foo {};\n");
}

#[test]
fn argument_default_spacing_round_trips() {
    assert_round_trips(indoc! {"
        interface Dog {
            void bark(optional DOMString tone =\"loud\");
        };
    "});
}
