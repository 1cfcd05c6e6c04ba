//! Walks a parsed tree back into source text. Every literal emitted here is
//! implied by the AST shape (a keyword, a fixed punctuation mark); the
//! variable part always comes from the node's own fields, and the trivia
//! immediately preceding it from the node's `trivia` map. See
//! `tests/roundtrip.rs` for the fixtures this is checked against.

use crate::ast::*;

fn emit(out: &mut String, trivia: &Trivia, key: &str, literal: &str) {
    if let Some(t) = trivia.get(key) {
        out.push_str(t);
    }
    out.push_str(literal);
}

/// Render a parsed tree back into the source text it came from.
pub fn reconstruct(defs: &[Definition]) -> String {
    let mut out = String::new();
    for def in defs {
        write_definition(&mut out, def);
    }
    out
}

fn write_definition(out: &mut String, def: &Definition) {
    match def {
        Definition::Interface(i) => write_interface(out, i),
        Definition::InterfaceMixin(m) => write_interface_mixin(out, m),
        Definition::CallbackInterface(c) => write_callback_interface(out, c),
        Definition::Callback(c) => write_callback(out, c),
        Definition::Dictionary(d) => write_dictionary(out, d),
        Definition::Namespace(n) => write_namespace(out, n),
        Definition::Enum(e) => write_enum(out, e),
        Definition::Typedef(t) => write_typedef(out, t),
        Definition::Includes(i) => write_includes(out, i),
        Definition::Eof(e) => out.push_str(&e.trivia),
    }
}

fn write_ext_attrs(out: &mut String, attrs: &ExtAttrs) {
    for (i, attr) in attrs.iter().enumerate() {
        if i == 0 {
            emit(out, &attr.trivia, "open", "[");
        } else {
            emit(out, &attr.trivia, "comma", ",");
        }
        emit(out, &attr.trivia, "name", &attr.name);
        if let Some(rhs) = &attr.rhs {
            emit(out, &attr.trivia, "assign", "=");
            write_ext_attr_rhs(out, rhs);
        }
        if let Some(ids) = &attr.rhs_identifiers {
            emit(out, &attr.trivia, "assign", "=");
            write_identifier_list(out, ids);
        }
        if let Some(args) = &attr.arguments {
            write_argument_list(out, args);
        }
        if i == attrs.len() - 1 {
            emit(out, &attr.trivia, "close", "]");
        }
    }
}

fn write_ext_attr_rhs(out: &mut String, rhs: &ExtAttrRhs) {
    match rhs {
        ExtAttrRhs::Identifier { value, trivia } | ExtAttrRhs::Integer { value, trivia } | ExtAttrRhs::Float { value, trivia } => {
            out.push_str(trivia);
            out.push_str(value);
        }
        ExtAttrRhs::StringLit { value, trivia } => {
            out.push_str(trivia);
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
    }
}

fn write_identifier_list(out: &mut String, ids: &[ExtAttrIdentifier]) {
    if ids.is_empty() {
        out.push('(');
        out.push(')');
        return;
    }
    for (i, id) in ids.iter().enumerate() {
        if i == 0 {
            emit(out, &id.trivia, "open", "(");
        } else {
            emit(out, &id.trivia, "comma", ",");
        }
        emit(out, &id.trivia, "name", &id.name);
        if i == ids.len() - 1 {
            emit(out, &id.trivia, "close", ")");
        }
    }
}

fn write_argument_list(out: &mut String, args: &[Argument]) {
    if args.is_empty() {
        out.push('(');
        out.push(')');
        return;
    }
    for (i, arg) in args.iter().enumerate() {
        if i == 0 {
            emit(out, &arg.trivia, "open", "(");
        } else {
            emit(out, &arg.trivia, "comma", ",");
        }
        write_argument(out, arg);
        if i == args.len() - 1 {
            emit(out, &arg.trivia, "close", ")");
        }
    }
}

fn write_argument(out: &mut String, arg: &Argument) {
    write_ext_attrs(out, &arg.ext_attrs);
    if arg.optional {
        emit(out, &arg.trivia, "optional", "optional");
    }
    write_type(out, &arg.idl_type);
    if arg.variadic {
        emit(out, &arg.trivia, "variadic", "...");
    }
    emit(out, &arg.trivia, "name", &arg.name);
    if let Some(default) = &arg.default {
        emit(out, &arg.trivia, "assign", "=");
        write_default(out, default);
    }
}

fn write_type(out: &mut String, ty: &IdlType) {
    match &ty.idl_type {
        IdlTypeBody::Name(_) => {
            if let Some(p) = &ty.prefix {
                emit(out, &ty.trivia, "prefix", p);
            }
            emit(out, &ty.trivia, "base", &ty.base_name);
            if let Some(p) = &ty.postfix {
                emit(out, &ty.trivia, "postfix", p);
            }
        }
        IdlTypeBody::Nested(inner) => {
            emit(out, &ty.trivia, "base", &ty.base_name);
            emit(out, &ty.trivia, "open", "<");
            write_type(out, inner);
            emit(out, &ty.trivia, "close", ">");
        }
        IdlTypeBody::List(list) => {
            if ty.generic == Some(GenericKind::Record) {
                emit(out, &ty.trivia, "base", "record");
                emit(out, &ty.trivia, "open", "<");
                write_type(out, &list[0]);
                emit(out, &ty.trivia, "separator", ",");
                write_type(out, &list[1]);
                emit(out, &ty.trivia, "close", ">");
            } else {
                emit(out, &ty.trivia, "open", "(");
                for (i, t) in list.iter().enumerate() {
                    if i > 0 {
                        emit(out, &t.trivia, "or", "or");
                    }
                    write_type(out, t);
                }
                emit(out, &ty.trivia, "close", ")");
            }
        }
    }
    if ty.nullable {
        emit(out, &ty.trivia, "nullable", "?");
    }
}

fn write_const_value(out: &mut String, value: &ConstValue) {
    out.push_str(value.trivia());
    out.push_str(value.text());
}

fn write_default(out: &mut String, default: &DefaultValue) {
    match default {
        DefaultValue::Const(v) => write_const_value(out, v),
        DefaultValue::Sequence { trivia } => {
            out.push_str(trivia);
            out.push_str("[]");
        }
        DefaultValue::StringLit { value, trivia } => {
            out.push_str(trivia);
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
    }
}

fn write_member(out: &mut String, member: &Member) {
    write_ext_attrs(
        out,
        match member {
            Member::Const(m) => &m.ext_attrs,
            Member::Attribute(m) => &m.ext_attrs,
            Member::Operation(m) => &m.ext_attrs,
            Member::Iterable(m) => &m.ext_attrs,
            Member::Field(m) => &m.ext_attrs,
        },
    );
    match member {
        Member::Const(m) => {
            emit(out, &m.trivia, "const", "const");
            write_type(out, &m.idl_type);
            emit(out, &m.trivia, "name", &m.name);
            emit(out, &m.trivia, "assign", "=");
            write_const_value(out, &m.value);
            emit(out, &m.trivia, "termination", ";");
        }
        Member::Attribute(m) => {
            match m.special {
                Some(MemberSpecial::Static) => emit(out, &m.trivia, "static", "static"),
                Some(MemberSpecial::Stringifier) => emit(out, &m.trivia, "stringifier", "stringifier"),
                None => {}
            }
            if m.inherit {
                emit(out, &m.trivia, "inherit", "inherit");
            }
            if m.readonly {
                emit(out, &m.trivia, "readonly", "readonly");
            }
            emit(out, &m.trivia, "attribute", "attribute");
            write_type(out, &m.idl_type);
            emit(out, &m.trivia, "name", &m.name);
            emit(out, &m.trivia, "termination", ";");
        }
        Member::Operation(m) => {
            let bare_stringifier =
                m.member_special == Some(MemberSpecial::Stringifier) && m.name.is_none() && m.arguments.is_empty();
            if bare_stringifier {
                emit(out, &m.trivia, "stringifier", "stringifier");
                emit(out, &m.trivia, "termination", ";");
                return;
            }
            match m.member_special {
                Some(MemberSpecial::Static) => emit(out, &m.trivia, "static", "static"),
                Some(MemberSpecial::Stringifier) => emit(out, &m.trivia, "stringifier", "stringifier"),
                None => {}
            }
            match m.special {
                Some(OperationSpecial::Getter) => emit(out, &m.trivia, "special", "getter"),
                Some(OperationSpecial::Setter) => emit(out, &m.trivia, "special", "setter"),
                Some(OperationSpecial::Deleter) => emit(out, &m.trivia, "special", "deleter"),
                None => {}
            }
            write_type(out, &m.return_type);
            if let Some(name) = &m.name {
                emit(out, &m.trivia, "name", name);
            }
            write_argument_list(out, &m.arguments);
            emit(out, &m.trivia, "termination", ";");
        }
        Member::Iterable(m) => {
            if m.readonly {
                emit(out, &m.trivia, "readonly", "readonly");
            }
            let keyword = match m.kind {
                IterableKind::Iterable => "iterable",
                IterableKind::Maplike => "maplike",
                IterableKind::Setlike => "setlike",
            };
            emit(out, &m.trivia, "kind", keyword);
            emit(out, &m.trivia, "open", "<");
            if let Some(key) = &m.key_type {
                write_type(out, key);
                emit(out, &m.trivia, "separator", ",");
            }
            write_type(out, &m.value_type);
            emit(out, &m.trivia, "close", ">");
            emit(out, &m.trivia, "termination", ";");
        }
        Member::Field(m) => {
            if m.required {
                emit(out, &m.trivia, "required", "required");
            }
            write_type(out, &m.idl_type);
            emit(out, &m.trivia, "name", &m.name);
            if let Some(default) = &m.default {
                emit(out, &m.trivia, "assign", "=");
                write_default(out, default);
            }
            emit(out, &m.trivia, "termination", ";");
        }
    }
}

fn write_interface(out: &mut String, i: &Interface) {
    write_ext_attrs(out, &i.ext_attrs);
    if i.partial {
        emit(out, &i.trivia, "partial", "partial");
    }
    emit(out, &i.trivia, "interface", "interface");
    emit(out, &i.trivia, "name", &i.escaped_name);
    if let Some(parent) = &i.inheritance {
        emit(out, &i.trivia, "inheritance", ":");
        emit(out, &i.trivia, "inheritanceName", parent);
    }
    emit(out, &i.trivia, "open", "{");
    for m in &i.members {
        write_member(out, m);
    }
    emit(out, &i.trivia, "close", "}");
    emit(out, &i.trivia, "termination", ";");
}

fn write_interface_mixin(out: &mut String, m: &InterfaceMixin) {
    write_ext_attrs(out, &m.ext_attrs);
    if m.partial {
        emit(out, &m.trivia, "partial", "partial");
    }
    emit(out, &m.trivia, "interface", "interface");
    emit(out, &m.trivia, "mixin", "mixin");
    emit(out, &m.trivia, "name", &m.escaped_name);
    emit(out, &m.trivia, "open", "{");
    for member in &m.members {
        write_member(out, member);
    }
    emit(out, &m.trivia, "close", "}");
    emit(out, &m.trivia, "termination", ";");
}

fn write_callback_interface(out: &mut String, c: &CallbackInterface) {
    write_ext_attrs(out, &c.ext_attrs);
    emit(out, &c.trivia, "callback", "callback");
    emit(out, &c.trivia, "interface", "interface");
    emit(out, &c.trivia, "name", &c.escaped_name);
    emit(out, &c.trivia, "open", "{");
    for member in &c.members {
        write_member(out, member);
    }
    emit(out, &c.trivia, "close", "}");
    emit(out, &c.trivia, "termination", ";");
}

fn write_callback(out: &mut String, c: &Callback) {
    write_ext_attrs(out, &c.ext_attrs);
    emit(out, &c.trivia, "callback", "callback");
    emit(out, &c.trivia, "name", &c.escaped_name);
    emit(out, &c.trivia, "assign", "=");
    write_type(out, &c.idl_type);
    write_argument_list(out, &c.arguments);
    emit(out, &c.trivia, "termination", ";");
}

fn write_dictionary(out: &mut String, d: &Dictionary) {
    write_ext_attrs(out, &d.ext_attrs);
    if d.partial {
        emit(out, &d.trivia, "partial", "partial");
    }
    emit(out, &d.trivia, "dictionary", "dictionary");
    emit(out, &d.trivia, "name", &d.escaped_name);
    if let Some(parent) = &d.inheritance {
        emit(out, &d.trivia, "inheritance", ":");
        emit(out, &d.trivia, "inheritanceName", parent);
    }
    emit(out, &d.trivia, "open", "{");
    for m in &d.members {
        write_member(out, m);
    }
    emit(out, &d.trivia, "close", "}");
    emit(out, &d.trivia, "termination", ";");
}

fn write_namespace(out: &mut String, n: &Namespace) {
    write_ext_attrs(out, &n.ext_attrs);
    if n.partial {
        emit(out, &n.trivia, "partial", "partial");
    }
    emit(out, &n.trivia, "namespace", "namespace");
    emit(out, &n.trivia, "name", &n.escaped_name);
    emit(out, &n.trivia, "open", "{");
    for m in &n.members {
        write_member(out, m);
    }
    emit(out, &n.trivia, "close", "}");
    emit(out, &n.trivia, "termination", ";");
}

fn write_enum(out: &mut String, e: &EnumDef) {
    write_ext_attrs(out, &e.ext_attrs);
    emit(out, &e.trivia, "enum", "enum");
    emit(out, &e.trivia, "name", &e.escaped_name);
    emit(out, &e.trivia, "open", "{");
    for (i, value) in e.values.iter().enumerate() {
        if i > 0 {
            emit(out, &value.trivia, "comma", ",");
        }
        emit(out, &value.trivia, "value", &format!("\"{}\"", value.value));
    }
    emit(out, &e.trivia, "close", "}");
    emit(out, &e.trivia, "termination", ";");
}

fn write_typedef(out: &mut String, t: &Typedef) {
    write_ext_attrs(out, &t.ext_attrs);
    emit(out, &t.trivia, "typedef", "typedef");
    write_type(out, &t.idl_type);
    emit(out, &t.trivia, "name", &t.escaped_name);
    emit(out, &t.trivia, "termination", ";");
}

fn write_includes(out: &mut String, i: &Includes) {
    write_ext_attrs(out, &i.ext_attrs);
    emit(out, &i.trivia, "target", &i.target);
    emit(out, &i.trivia, "includes", "includes");
    emit(out, &i.trivia, "includesName", &i.includes);
    emit(out, &i.trivia, "termination", ";");
}
