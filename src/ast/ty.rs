//! `idlType` nodes: the type grammar shared by attributes, arguments,
//! constants, dictionary fields, typedefs, and return types.

use serde::Serialize;

use super::{ExtAttrs, Trivia};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenericKind {
    Sequence,
    Record,
    FrozenArray,
    Promise,
}

/// The contextual role a type node plays, mirroring spec.md's `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeRole {
    Argument,
    Attribute,
    Const,
    Dictionary,
    Typedef,
    Return,
}

/// The shape of `idlType`'s principal payload: either a printable base
/// name, a single nested type (the element type of `sequence<T>` /
/// `FrozenArray<T>` / `Promise<T>`), or an ordered list of alternatives
/// (union branches, or `record<K, V>`'s two type arguments).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IdlTypeBody {
    Name(String),
    Nested(Box<IdlType>),
    List(Vec<IdlType>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdlType {
    pub idl_type: IdlTypeBody,
    pub base_name: String,
    pub generic: Option<GenericKind>,
    pub nullable: bool,
    pub union: bool,
    /// `"unsigned"` on `unsigned long`/`unsigned short`.
    pub prefix: Option<String>,
    /// The second word of `long long` / `unsigned long long`.
    pub postfix: Option<String>,
    /// `"or"` between union branches, `","` between generic arguments.
    pub separator: Option<String>,
    pub ext_attrs: ExtAttrs,
    pub role: TypeRole,
    pub trivia: Trivia,
}

impl IdlType {
    /// A plain named type with no generics, union branches, or nullability
    /// — e.g. `DOMString`, `boolean`, or a user-defined type reference.
    /// Used by [`crate::parser`]'s `simple_type` and to synthesise the
    /// implicit `DOMString` return type of a bare `stringifier;` member.
    pub fn named(name: impl Into<String>, role: TypeRole, trivia: Trivia) -> Self {
        let name = name.into();
        Self {
            idl_type: IdlTypeBody::Name(name.clone()),
            base_name: name,
            generic: None,
            nullable: false,
            union: false,
            prefix: None,
            postfix: None,
            separator: None,
            ext_attrs: Vec::new(),
            role,
            trivia,
        }
    }

    pub fn is_any(&self) -> bool {
        self.base_name == "any"
    }

    pub fn is_sequence_or_record(&self) -> bool {
        matches!(self.generic, Some(GenericKind::Sequence) | Some(GenericKind::Record))
    }
}
