//! Member-level productions shared by interface, mixin, and namespace
//! bodies: `const_`, `attribute`, `operation`, and the `iterable` /
//! `maplike` / `setlike` family. Callers decide which of these a
//! particular body allows and in what combination — narrowing lives at
//! the call site, not here.

use crate::ast::ty::TypeRole;
use crate::ast::{
    AttributeMember, ConstMember, ExtAttrs, IterableKind, IterableLikeMember, Member,
    MemberSpecial, OperationMember, OperationSpecial,
};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

impl<'src> Parser<'src> {
    /// `const_`: `"const" const_type identifier "=" const_value ";"`.
    /// Assumes `"const"` has not yet been consumed.
    pub(crate) fn parse_const(&mut self, ext_attrs: ExtAttrs) -> Result<Member, ParseError> {
        let const_trivia = self.expect(T::Const, "\"const\"")?.to_string();
        let idl_type = self
            .parse_type(TypeRole::Const)?
            .ok_or_else(|| self.error("expected the constant's type"))?;
        let (name, name_trivia) = self.expect_ident("a constant name")?;
        let assign_trivia = self.expect(T::Equals, "'=' in const declaration")?.to_string();
        let value = self
            .parse_const_value()?
            .ok_or_else(|| self.error("expected a constant value"))?;
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate const declaration")?.to_string();
        Ok(Member::Const(ConstMember {
            idl_type,
            name,
            value,
            ext_attrs,
            trivia: trivia_map([
                ("const", const_trivia),
                ("name", name_trivia),
                ("assign", assign_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    /// `attribute`: `["inherit"] ["readonly"] "attribute" type
    /// attribute_name ";"`. `allow_inherit` is false for bodies where
    /// `inherit` has no meaning (mixins, namespaces).
    pub(crate) fn parse_attribute(
        &mut self,
        ext_attrs: ExtAttrs,
        allow_inherit: bool,
        special: Option<MemberSpecial>,
        special_trivia: String,
    ) -> Result<Member, ParseError> {
        let (inherit, inherit_trivia) = if allow_inherit {
            match self.consume(&[T::Inherit]) {
                Some(tok) => (true, tok.trivia.to_string()),
                None => (false, String::new()),
            }
        } else {
            (false, String::new())
        };
        let (readonly, readonly_trivia) = match self.consume(&[T::Readonly]) {
            Some(tok) => (true, tok.trivia.to_string()),
            None => (false, String::new()),
        };
        let attribute_trivia = self.expect(T::Attribute, "\"attribute\"")?.to_string();
        let idl_type = self
            .parse_type(TypeRole::Attribute)?
            .ok_or_else(|| self.error("expected the attribute's type"))?;
        if idl_type.is_sequence_or_record() {
            return Err(self.error("Attributes cannot accept sequence types"));
        }
        let (name, name_trivia) = self.parse_attribute_name()?;
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate attribute declaration")?.to_string();
        let mut trivia = trivia_map([
            ("inherit", inherit_trivia),
            ("readonly", readonly_trivia),
            ("attribute", attribute_trivia),
            ("name", name_trivia),
            ("termination", termination_trivia),
        ]);
        match special {
            Some(MemberSpecial::Static) => trivia.insert("static", special_trivia),
            Some(MemberSpecial::Stringifier) => trivia.insert("stringifier", special_trivia),
            None => None,
        };
        Ok(Member::Attribute(AttributeMember {
            idl_type,
            name,
            readonly,
            inherit,
            special,
            ext_attrs,
            trivia,
        }))
    }

    fn parse_attribute_name(&mut self) -> Result<(String, String), ParseError> {
        if let Some(tok) = self.consume(&[T::Required]) {
            return Ok((tok.value.unwrap_or_default().to_string(), tok.trivia.to_string()));
        }
        self.expect_ident("the attribute's name")
    }

    /// `operation`: an optional special marker (only when `allow_special`),
    /// a return type, an optional name, an argument list, and `;`.
    pub(crate) fn parse_operation(
        &mut self,
        ext_attrs: ExtAttrs,
        allow_special: bool,
        member_special: Option<MemberSpecial>,
        member_special_trivia: String,
    ) -> Result<Member, ParseError> {
        let (special, special_trivia) = if allow_special {
            if let Some(tok) = self.consume(&[T::Getter]) {
                (Some(OperationSpecial::Getter), tok.trivia.to_string())
            } else if let Some(tok) = self.consume(&[T::Setter]) {
                (Some(OperationSpecial::Setter), tok.trivia.to_string())
            } else if let Some(tok) = self.consume(&[T::Deleter]) {
                (Some(OperationSpecial::Deleter), tok.trivia.to_string())
            } else {
                (None, String::new())
            }
        } else {
            (None, String::new())
        };

        let return_type = self
            .parse_type(TypeRole::Return)?
            .ok_or_else(|| self.error("expected the operation's return type"))?;

        let (name, name_trivia) = match self.consume(&[T::Identifier]) {
            Some(tok) => (Some(tok.value.unwrap_or_default().to_string()), tok.trivia.to_string()),
            None => (None, String::new()),
        };

        let arguments = self.parse_argument_list()?;
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate operation declaration")?.to_string();

        let mut trivia = trivia_map([
            ("special", special_trivia),
            ("name", name_trivia),
            ("termination", termination_trivia),
        ]);
        match member_special {
            Some(MemberSpecial::Static) => trivia.insert("static", member_special_trivia),
            Some(MemberSpecial::Stringifier) => trivia.insert("stringifier", member_special_trivia),
            None => None,
        };
        Ok(Member::Operation(OperationMember {
            return_type,
            name,
            arguments,
            special,
            member_special,
            ext_attrs,
            trivia,
        }))
    }

    /// `iterable` / `maplike` / `setlike`. `readonly` must already have been
    /// consumed by the caller (it precedes the keyword, when present).
    pub(crate) fn parse_iterable_like(
        &mut self,
        ext_attrs: ExtAttrs,
        readonly: bool,
        readonly_trivia: String,
    ) -> Result<Member, ParseError> {
        if let Some(tok) = self.consume(&[T::Iterable]) {
            let kind_trivia = tok.trivia.to_string();
            let open_trivia = self.expect(T::LessThan, "'<' after \"iterable\"")?.to_string();
            let value = self
                .parse_type(TypeRole::Attribute)?
                .ok_or_else(|| self.error("expected the iterable's value type"))?;
            let close_trivia = self.expect(T::GreaterThan, "'>' to close \"iterable<>\"")?.to_string();
            let termination_trivia = self.expect(T::Semicolon, "';' to terminate iterable declaration")?.to_string();
            return Ok(Member::Iterable(IterableLikeMember {
                kind: IterableKind::Iterable,
                readonly: false,
                key_type: None,
                value_type: value,
                ext_attrs,
                trivia: trivia_map([
                    ("kind", kind_trivia),
                    ("open", open_trivia),
                    ("close", close_trivia),
                    ("termination", termination_trivia),
                ]),
            }));
        }

        if let Some(tok) = self.consume(&[T::Maplike]) {
            let kind_trivia = tok.trivia.to_string();
            let open_trivia = self.expect(T::LessThan, "'<' after \"maplike\"")?.to_string();
            let key = self
                .parse_type(TypeRole::Attribute)?
                .ok_or_else(|| self.error("expected the maplike's key type"))?;
            let separator_trivia = self.expect(T::Comma, "',' between maplike's key and value types")?.to_string();
            let value = self
                .parse_type(TypeRole::Attribute)?
                .ok_or_else(|| self.error("expected the maplike's value type"))?;
            let close_trivia = self.expect(T::GreaterThan, "'>' to close \"maplike<>\"")?.to_string();
            let termination_trivia = self.expect(T::Semicolon, "';' to terminate maplike declaration")?.to_string();
            return Ok(Member::Iterable(IterableLikeMember {
                kind: IterableKind::Maplike,
                readonly,
                key_type: Some(key),
                value_type: value,
                ext_attrs,
                trivia: trivia_map([
                    ("readonly", readonly_trivia),
                    ("kind", kind_trivia),
                    ("open", open_trivia),
                    ("separator", separator_trivia),
                    ("close", close_trivia),
                    ("termination", termination_trivia),
                ]),
            }));
        }

        let tok = self
            .consume(&[T::Setlike])
            .ok_or_else(|| self.error("expected \"iterable\", \"maplike\", or \"setlike\""))?;
        let kind_trivia = tok.trivia.to_string();
        let open_trivia = self.expect(T::LessThan, "'<' after \"setlike\"")?.to_string();
        let value = self
            .parse_type(TypeRole::Attribute)?
            .ok_or_else(|| self.error("expected the setlike's value type"))?;
        let close_trivia = self.expect(T::GreaterThan, "'>' to close \"setlike<>\"")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate setlike declaration")?.to_string();
        Ok(Member::Iterable(IterableLikeMember {
            kind: IterableKind::Setlike,
            readonly,
            key_type: None,
            value_type: value,
            ext_attrs,
            trivia: trivia_map([
                ("readonly", readonly_trivia),
                ("kind", kind_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }
}
