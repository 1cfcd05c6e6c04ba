//! The tree produced by [`crate::parse`]: a closed set of definition and
//! member variants, each carrying the trivia needed to reconstruct the
//! source it was parsed from.

pub mod ty;

use std::collections::HashMap;

use serde::Serialize;

pub use ty::{GenericKind, IdlType, IdlTypeBody, TypeRole};

/// A string-keyed map from syntactic slot name (`"name"`, `"open"`,
/// `"termination"`, …) to the trivia string that preceded that slot's
/// token. One map per node, as described for the tree's `trivia` field.
pub type Trivia = HashMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtAttr {
    pub name: String,
    pub rhs: Option<ExtAttrRhs>,
    /// Parenthesised argument list, present when no `=` precedes the `(`.
    pub arguments: Option<Vec<Argument>>,
    /// Parenthesised identifier list, present when `=` precedes the `(`.
    pub rhs_identifiers: Option<Vec<ExtAttrIdentifier>>,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExtAttrRhs {
    Identifier { value: String, trivia: String },
    Integer { value: String, trivia: String },
    Float { value: String, trivia: String },
    StringLit { value: String, trivia: String },
}

/// One identifier inside a `[Name=(id, id, ...)]` parenthesised list.
/// `trivia`'s `"name"` key is the identifier's own leading trivia;
/// `"open"`/`"comma"`/`"close"` are its surrounding punctuation, threaded
/// onto the item that follows the same way an argument list's does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtAttrIdentifier {
    pub name: String,
    pub trivia: Trivia,
}

pub type ExtAttrs = Vec<ExtAttr>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ConstValue {
    Boolean { value: bool, trivia: String },
    Infinity { negative: bool, trivia: String },
    NaN { trivia: String },
    Null { trivia: String },
    Number { value: String, trivia: String },
}

impl ConstValue {
    /// The literal text this value was spelled with (its `trivia` is kept
    /// separate so callers can reconstruct source position-by-position).
    pub fn text(&self) -> &str {
        match self {
            ConstValue::Boolean { value: true, .. } => "true",
            ConstValue::Boolean { value: false, .. } => "false",
            ConstValue::Infinity { negative: true, .. } => "-Infinity",
            ConstValue::Infinity { negative: false, .. } => "Infinity",
            ConstValue::NaN { .. } => "NaN",
            ConstValue::Null { .. } => "null",
            ConstValue::Number { value, .. } => value,
        }
    }

    pub fn trivia(&self) -> &str {
        match self {
            ConstValue::Boolean { trivia, .. }
            | ConstValue::Infinity { trivia, .. }
            | ConstValue::NaN { trivia }
            | ConstValue::Null { trivia }
            | ConstValue::Number { trivia, .. } => trivia,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DefaultValue {
    Const(ConstValue),
    Sequence { trivia: String },
    StringLit { value: String, trivia: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub ext_attrs: ExtAttrs,
    pub optional: bool,
    pub idl_type: IdlType,
    pub variadic: bool,
    pub name: String,
    pub default: Option<DefaultValue>,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstMember {
    pub idl_type: IdlType,
    pub name: String,
    pub value: ConstValue,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeMember {
    pub idl_type: IdlType,
    pub name: String,
    pub readonly: bool,
    pub inherit: bool,
    pub special: Option<MemberSpecial>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemberSpecial {
    Static,
    Stringifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationSpecial {
    Getter,
    Setter,
    Deleter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationMember {
    pub return_type: IdlType,
    pub name: Option<String>,
    pub arguments: Vec<Argument>,
    pub special: Option<OperationSpecial>,
    pub member_special: Option<MemberSpecial>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IterableKind {
    Iterable,
    Maplike,
    Setlike,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterableLikeMember {
    pub kind: IterableKind,
    pub readonly: bool,
    /// Present only for `maplike`, which takes a `(key, value)` pair.
    pub key_type: Option<IdlType>,
    pub value_type: IdlType,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryField {
    pub idl_type: IdlType,
    pub name: String,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Member {
    Const(ConstMember),
    Attribute(AttributeMember),
    Operation(OperationMember),
    Iterable(IterableLikeMember),
    Field(DictionaryField),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub value: String,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    pub escaped_name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    pub partial: bool,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceMixin {
    pub name: String,
    pub escaped_name: String,
    pub members: Vec<Member>,
    pub partial: bool,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackInterface {
    pub name: String,
    pub escaped_name: String,
    pub members: Vec<Member>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callback {
    pub name: String,
    pub escaped_name: String,
    pub idl_type: IdlType,
    pub arguments: Vec<Argument>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dictionary {
    pub name: String,
    pub escaped_name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    pub partial: bool,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub escaped_name: String,
    pub members: Vec<Member>,
    pub partial: bool,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDef {
    pub name: String,
    pub escaped_name: String,
    pub values: Vec<EnumValue>,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typedef {
    pub name: String,
    pub escaped_name: String,
    pub idl_type: IdlType,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Includes {
    pub target: String,
    pub includes: String,
    pub ext_attrs: ExtAttrs,
    pub trivia: Trivia,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EofNode {
    pub trivia: String,
}

/// One top-level Web IDL definition. `parse` returns a `Vec<Definition>`
/// whose last element is always `Definition::Eof`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Definition {
    Interface(Interface),
    InterfaceMixin(InterfaceMixin),
    CallbackInterface(CallbackInterface),
    Callback(Callback),
    Dictionary(Dictionary),
    Namespace(Namespace),
    Enum(EnumDef),
    Typedef(Typedef),
    Includes(Includes),
    Eof(EofNode),
}

impl Definition {
    /// The variant tag used in duplicate-name diagnostics and the name
    /// registry (e.g. `"interface"`, `"interface mixin"`).
    pub fn variant_tag(&self) -> &'static str {
        match self {
            Definition::Interface(_) => "interface",
            Definition::InterfaceMixin(_) => "interface mixin",
            Definition::CallbackInterface(_) => "callback interface",
            Definition::Callback(_) => "callback",
            Definition::Dictionary(_) => "dictionary",
            Definition::Namespace(_) => "namespace",
            Definition::Enum(_) => "enum",
            Definition::Typedef(_) => "typedef",
            Definition::Includes(_) => "includes",
            Definition::Eof(_) => "eof",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Interface(d) => Some(&d.name),
            Definition::InterfaceMixin(d) => Some(&d.name),
            Definition::CallbackInterface(d) => Some(&d.name),
            Definition::Callback(d) => Some(&d.name),
            Definition::Dictionary(d) => Some(&d.name),
            Definition::Namespace(d) => Some(&d.name),
            Definition::Enum(d) => Some(&d.name),
            Definition::Typedef(d) => Some(&d.name),
            Definition::Includes(_) | Definition::Eof(_) => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        match self {
            Definition::Interface(d) => d.partial,
            Definition::InterfaceMixin(d) => d.partial,
            Definition::Dictionary(d) => d.partial,
            Definition::Namespace(d) => d.partial,
            _ => false,
        }
    }
}

/// Strip a single leading `_` used to escape an identifier that collides
/// with a reserved terminal (e.g. `_interface`).
pub fn unescape(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}
