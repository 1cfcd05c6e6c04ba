//! `type` / `single_type` / `union_type`, and the `argument` / `argument_list`
//! productions that embed them.

use crate::ast::ty::{GenericKind, IdlTypeBody, TypeRole};
use crate::ast::{Argument, IdlType};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

const ARGUMENT_NAME_KEYWORDS: &[T] = &[
    T::Attribute,
    T::Callback,
    T::Const,
    T::Deleter,
    T::Dictionary,
    T::Enum,
    T::Getter,
    T::Includes,
    T::Inherit,
    T::Interface,
    T::Iterable,
    T::Maplike,
    T::Namespace,
    T::Partial,
    T::Required,
    T::Setlike,
    T::Setter,
    T::Static,
    T::Stringifier,
    T::Typedef,
    T::Unrestricted,
];

impl<'src> Parser<'src> {
    /// `type`: a `union_type` or `single_type`, with an optional `?` suffix.
    pub(crate) fn parse_type(&mut self, role: TypeRole) -> Result<Option<IdlType>, ParseError> {
        let mut ty = if self.at(T::ParenOpen) {
            match self.parse_union_type(role)? {
                Some(t) => t,
                None => return Ok(None),
            }
        } else {
            match self.parse_single_type(role)? {
                Some(t) => t,
                None => return Ok(None),
            }
        };

        if let Some(tok) = self.consume(&[T::Question]) {
            if ty.is_any() {
                return Err(self.error("the type \"any\" cannot be made nullable"));
            }
            if ty.generic == Some(GenericKind::Promise) {
                return Err(self.error("the type \"Promise\" cannot be made nullable"));
            }
            ty.nullable = true;
            ty.trivia.insert("nullable", tok.trivia.to_string());
            if self.at(T::Question) {
                return Err(self.error("a type cannot be made nullable twice"));
            }
        }

        Ok(Some(ty))
    }

    /// `union_type`: a parenthesised list of at least two types joined by
    /// `or`.
    fn parse_union_type(&mut self, role: TypeRole) -> Result<Option<IdlType>, ParseError> {
        let saved = self.save();
        let open_trivia = match self.consume(&[T::ParenOpen]) {
            Some(tok) => tok.trivia.to_string(),
            None => return Ok(None),
        };

        let mut types = Vec::new();
        let mut pending_or = None;
        loop {
            let mut t = match self.parse_type(role)? {
                Some(t) => t,
                None => {
                    self.unconsume(saved);
                    return Ok(None);
                }
            };
            if let Some(or_trivia) = pending_or.take() {
                t.trivia.insert("or", or_trivia);
            }
            types.push(t);
            match self.consume(&[T::Or]) {
                Some(tok) => {
                    pending_or = Some(tok.trivia.to_string());
                    continue;
                }
                None => break,
            }
        }

        let close_trivia = self.expect(T::ParenClose, "')' to close union type")?;

        if types.len() < 2 {
            return Err(self.error("At least two types are expected in a union type"));
        }

        let base_name = types
            .iter()
            .map(|t| t.base_name.clone())
            .collect::<Vec<_>>()
            .join(" or ");

        Ok(Some(IdlType {
            idl_type: IdlTypeBody::List(types),
            base_name,
            generic: None,
            nullable: false,
            union: true,
            prefix: None,
            postfix: None,
            separator: Some("or".to_string()),
            ext_attrs: Vec::new(),
            role,
            trivia: trivia_map([("open", open_trivia), ("close", close_trivia.to_string())]),
        }))
    }

    /// `single_type`: a generic, a primitive, a string type, or a plain
    /// identifier (covering user type references as well as the
    /// unreserved special names `any`, `object`, `symbol`, `undefined`).
    fn parse_single_type(&mut self, role: TypeRole) -> Result<Option<IdlType>, ParseError> {
        if let Some(tok) = self.consume(&[T::Sequence]) {
            return self.parse_generic_one(GenericKind::Sequence, "sequence", tok.trivia.to_string(), role).map(Some);
        }
        if let Some(tok) = self.consume(&[T::FrozenArray]) {
            return self.parse_generic_one(GenericKind::FrozenArray, "FrozenArray", tok.trivia.to_string(), role).map(Some);
        }
        if let Some(tok) = self.consume(&[T::Promise]) {
            return self.parse_generic_one(GenericKind::Promise, "Promise", tok.trivia.to_string(), role).map(Some);
        }
        if let Some(tok) = self.consume(&[T::Record]) {
            return self.parse_record(tok.trivia.to_string(), role).map(Some);
        }

        if let Some(tok) = self.consume(&[T::Unsigned]) {
            return self.parse_integer_type(Some(tok.trivia.to_string()), role).map(Some);
        }
        if self.at_any(&[T::Short, T::Long]) {
            return self.parse_integer_type(None, role).map(Some);
        }
        if let Some(tok) = self.consume(&[T::Unrestricted]) {
            return self.parse_float_type(Some(tok.trivia.to_string()), role).map(Some);
        }
        if self.at_any(&[T::Float, T::Double]) {
            return self.parse_float_type(None, role).map(Some);
        }

        if let Some(tok) = self.consume(&[T::Boolean]) {
            return Ok(Some(self.simple_type("boolean", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::Byte]) {
            return Ok(Some(self.simple_type("byte", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::Octet]) {
            return Ok(Some(self.simple_type("octet", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::Void]) {
            return Ok(Some(self.simple_type("void", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::ByteString]) {
            return Ok(Some(self.simple_type("ByteString", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::DomString]) {
            return Ok(Some(self.simple_type("DOMString", tok.trivia.to_string(), role)));
        }
        if let Some(tok) = self.consume(&[T::UsvString]) {
            return Ok(Some(self.simple_type("USVString", tok.trivia.to_string(), role)));
        }

        if let Some(tok) = self.consume(&[T::Identifier]) {
            let name = tok.value.unwrap_or_default().to_string();
            return Ok(Some(self.simple_type(&name, tok.trivia.to_string(), role)));
        }

        Ok(None)
    }

    fn simple_type(&self, base_name: &str, base_trivia: String, role: TypeRole) -> IdlType {
        IdlType {
            idl_type: IdlTypeBody::Name(base_name.to_string()),
            base_name: base_name.to_string(),
            generic: None,
            nullable: false,
            union: false,
            prefix: None,
            postfix: None,
            separator: None,
            ext_attrs: Vec::new(),
            role,
            trivia: trivia_map([("base", base_trivia)]),
        }
    }

    fn parse_generic_one(
        &mut self,
        kind: GenericKind,
        name: &str,
        base_trivia: String,
        role: TypeRole,
    ) -> Result<IdlType, ParseError> {
        let open_trivia = self.expect(T::LessThan, "'<' to open a generic type argument")?.to_string();
        let inner = self
            .parse_type(role)?
            .ok_or_else(|| self.error("expected a type argument"))?;
        let close_trivia = self.expect(T::GreaterThan, "'>' to close a generic type argument")?.to_string();
        Ok(IdlType {
            idl_type: IdlTypeBody::Nested(Box::new(inner)),
            base_name: name.to_string(),
            generic: Some(kind),
            nullable: false,
            union: false,
            prefix: None,
            postfix: None,
            separator: None,
            ext_attrs: Vec::new(),
            role,
            trivia: trivia_map([("base", base_trivia), ("open", open_trivia), ("close", close_trivia)]),
        })
    }

    fn parse_record(&mut self, base_trivia: String, role: TypeRole) -> Result<IdlType, ParseError> {
        let open_trivia = self.expect(T::LessThan, "'<' to open record type arguments")?.to_string();
        let key = self
            .parse_single_type(role)?
            .ok_or_else(|| self.error("expected a string type as the record's key"))?;
        if !matches!(key.base_name.as_str(), "ByteString" | "DOMString" | "USVString") {
            return Err(self.error("a record key must be one of ByteString, DOMString, or USVString"));
        }
        let comma_trivia = self.expect(T::Comma, "',' between record key and value types")?.to_string();
        let value = self
            .parse_type(role)?
            .ok_or_else(|| self.error("expected the record's value type"))?;
        let close_trivia = self.expect(T::GreaterThan, "'>' to close record type arguments")?.to_string();
        Ok(IdlType {
            idl_type: IdlTypeBody::List(vec![key, value]),
            base_name: "record".to_string(),
            generic: Some(GenericKind::Record),
            nullable: false,
            union: false,
            prefix: None,
            postfix: None,
            separator: Some(",".to_string()),
            ext_attrs: Vec::new(),
            role,
            trivia: trivia_map([
                ("base", base_trivia),
                ("open", open_trivia),
                ("separator", comma_trivia),
                ("close", close_trivia),
            ]),
        })
    }

    fn parse_integer_type(&mut self, prefix_trivia: Option<String>, role: TypeRole) -> Result<IdlType, ParseError> {
        if let Some(tok) = self.consume(&[T::Short]) {
            return Ok(self.numeric_type("short", prefix_trivia, tok.trivia.to_string(), None, role));
        }
        let base_tok = self
            .consume(&[T::Long])
            .ok_or_else(|| self.error("expected \"short\" or \"long\""))?;
        let base_trivia = base_tok.trivia.to_string();
        if let Some(tok2) = self.consume(&[T::Long]) {
            Ok(self.numeric_type_with_postfix("long", "long", prefix_trivia, base_trivia, tok2.trivia.to_string(), role))
        } else {
            Ok(self.numeric_type("long", prefix_trivia, base_trivia, None, role))
        }
    }

    fn parse_float_type(&mut self, prefix_trivia: Option<String>, role: TypeRole) -> Result<IdlType, ParseError> {
        if let Some(tok) = self.consume(&[T::Float]) {
            return Ok(self.numeric_type("float", prefix_trivia, tok.trivia.to_string(), None, role));
        }
        if let Some(tok) = self.consume(&[T::Double]) {
            return Ok(self.numeric_type("double", prefix_trivia, tok.trivia.to_string(), None, role));
        }
        Err(self.error("expected \"float\" or \"double\""))
    }

    fn numeric_type(
        &self,
        base_name: &str,
        prefix_trivia: Option<String>,
        base_trivia: String,
        postfix: Option<(&str, String)>,
        role: TypeRole,
    ) -> IdlType {
        let prefix_word = if base_name == "float" || base_name == "double" {
            "unrestricted"
        } else {
            "unsigned"
        };
        let prefix = prefix_trivia.as_ref().map(|_| prefix_word.to_string());
        let mut trivia = trivia_map([("base", base_trivia)]);
        if let Some(p) = &prefix_trivia {
            trivia.insert("prefix", p.clone());
        }
        if let Some((_, t)) = &postfix {
            trivia.insert("postfix", t.clone());
        }
        IdlType {
            idl_type: IdlTypeBody::Name(base_name.to_string()),
            base_name: base_name.to_string(),
            generic: None,
            nullable: false,
            union: false,
            prefix,
            postfix: postfix.map(|(p, _)| p.to_string()),
            separator: None,
            ext_attrs: Vec::new(),
            role,
            trivia,
        }
    }

    fn numeric_type_with_postfix(
        &self,
        base_name: &str,
        postfix_word: &str,
        prefix_trivia: Option<String>,
        base_trivia: String,
        postfix_trivia: String,
        role: TypeRole,
    ) -> IdlType {
        self.numeric_type(base_name, prefix_trivia, base_trivia, Some((postfix_word, postfix_trivia)), role)
    }

    /// `argument`: speculative — rolls back entirely if the type or the
    /// name cannot be parsed.
    pub(crate) fn parse_argument(&mut self) -> Result<Option<Argument>, ParseError> {
        let saved = self.save();
        let ext_attrs = self.parse_extended_attrs()?;

        let (optional, optional_trivia) = match self.consume(&[T::Optional]) {
            Some(tok) => (true, tok.trivia.to_string()),
            None => (false, String::new()),
        };

        let idl_type = match self.parse_type(TypeRole::Argument)? {
            Some(t) => t,
            None => {
                self.unconsume(saved);
                return Ok(None);
            }
        };

        let (variadic, variadic_trivia) = if !optional {
            match self.consume(&[T::Ellipsis]) {
                Some(tok) => (true, tok.trivia.to_string()),
                None => (false, String::new()),
            }
        } else {
            (false, String::new())
        };

        let mut name_types = vec![T::Identifier];
        name_types.extend_from_slice(ARGUMENT_NAME_KEYWORDS);
        let (name, name_trivia) = match self.consume(&name_types) {
            Some(tok) => (tok.value.unwrap_or_default().to_string(), tok.trivia.to_string()),
            None => {
                self.unconsume(saved);
                return Ok(None);
            }
        };

        let (default, assign_trivia) = if optional {
            match self.consume(&[T::Equals]) {
                Some(tok) => (Some(self.parse_default()?), tok.trivia.to_string()),
                None => (None, String::new()),
            }
        } else {
            (None, String::new())
        };

        Ok(Some(Argument {
            ext_attrs,
            optional,
            idl_type,
            variadic,
            name,
            default,
            trivia: trivia_map([
                ("optional", optional_trivia),
                ("variadic", variadic_trivia),
                ("name", name_trivia),
                ("assign", assign_trivia),
            ]),
        }))
    }

    /// `argument_list`: comma-separated `argument`s; a trailing comma is an
    /// error.
    pub(crate) fn parse_argument_list(&mut self) -> Result<Vec<Argument>, ParseError> {
        let open_trivia = self.expect(T::ParenOpen, "'(' to start an argument list")?.to_string();
        let mut args = Vec::new();
        if !self.at(T::ParenClose) {
            let mut pending = Some(open_trivia);
            loop {
                let mut arg = match self.parse_argument()? {
                    Some(arg) => arg,
                    None => return Err(self.error("expected an argument")),
                };
                if let Some(lead) = pending.take() {
                    arg.trivia.insert(if args.is_empty() { "open" } else { "comma" }, lead);
                }
                args.push(arg);
                match self.consume(&[T::Comma]) {
                    Some(tok) => {
                        if self.at(T::ParenClose) {
                            return Err(self.error("Trailing comma in arguments list"));
                        }
                        pending = Some(tok.trivia.to_string());
                        continue;
                    }
                    None => break,
                }
            }
        }
        let close_trivia = self.expect(T::ParenClose, "')' to close an argument list")?.to_string();
        if let Some(last) = args.last_mut() {
            last.trivia.insert("close", close_trivia);
        }
        Ok(args)
    }
}
