//! `interface_` — dispatches to `interface mixin` or an ordinary
//! interface, and owns the ordinary/mixin body loops. `callback
//! interface` reuses [`Parser::parse_interface_member`] directly since it
//! shares an ordinary interface's full member grammar.

use crate::ast::ty::TypeRole;
use crate::ast::{Definition, ExtAttrs, IdlType, Interface, InterfaceMixin, Member, MemberSpecial, OperationMember};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

impl<'src> Parser<'src> {
    /// `interface_`: `"interface" identifier ["mixin"] ...`.
    pub(crate) fn parse_interface(
        &mut self,
        ext_attrs: ExtAttrs,
        partial: bool,
        partial_trivia: String,
    ) -> Result<Definition, ParseError> {
        let interface_trivia = self.expect(T::Interface, "\"interface\"")?.to_string();
        if let Some(tok) = self.consume(&[T::Mixin]) {
            return self.parse_interface_mixin_rest(
                ext_attrs,
                partial,
                partial_trivia,
                interface_trivia,
                tok.trivia.to_string(),
            );
        }
        self.parse_interface_rest(ext_attrs, partial, partial_trivia, interface_trivia)
    }

    fn parse_interface_rest(
        &mut self,
        ext_attrs: ExtAttrs,
        partial: bool,
        partial_trivia: String,
        interface_trivia: String,
    ) -> Result<Definition, ParseError> {
        let (escaped_name, name_trivia) = self.expect_ident("an interface name")?;
        let name = if partial {
            crate::ast::unescape(&escaped_name).to_string()
        } else {
            self.register(&escaped_name, "interface")?
        };
        self.set_current("interface", name.clone());

        let (inheritance, colon_trivia, parent_trivia) = match self.consume(&[T::Colon]) {
            Some(tok) => {
                let (parent, parent_trivia) = self.expect_ident("the inherited interface's name")?;
                (Some(parent), tok.trivia.to_string(), parent_trivia)
            }
            None => (None, String::new(), String::new()),
        };

        let open_trivia = self.expect(T::BraceOpen, "'{' to open interface body")?.to_string();
        let mut members = Vec::new();
        while !self.at(T::BraceClose) {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            members.push(self.parse_interface_member()?);
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "interface member");
        }
        let close_trivia = self.expect(T::BraceClose, "'}' to close interface body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate interface declaration")?.to_string();

        self.clear_current();
        Ok(Definition::Interface(Interface {
            name,
            escaped_name,
            inheritance,
            members,
            partial,
            ext_attrs,
            trivia: trivia_map([
                ("partial", partial_trivia),
                ("interface", interface_trivia),
                ("name", name_trivia),
                ("inheritance", colon_trivia),
                ("inheritanceName", parent_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    fn parse_interface_mixin_rest(
        &mut self,
        ext_attrs: ExtAttrs,
        partial: bool,
        partial_trivia: String,
        interface_trivia: String,
        mixin_trivia: String,
    ) -> Result<Definition, ParseError> {
        let (escaped_name, name_trivia) = self.expect_ident("an interface mixin name")?;
        let name = if partial {
            crate::ast::unescape(&escaped_name).to_string()
        } else {
            self.register(&escaped_name, "interface mixin")?
        };
        self.set_current("interface mixin", name.clone());

        let open_trivia = self.expect(T::BraceOpen, "'{' to open interface mixin body")?.to_string();
        let mut members = Vec::new();
        while !self.at(T::BraceClose) {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            members.push(self.parse_mixin_member()?);
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "interface mixin member");
        }
        let close_trivia = self.expect(T::BraceClose, "'}' to close interface mixin body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate interface mixin declaration")?.to_string();

        self.clear_current();
        Ok(Definition::InterfaceMixin(InterfaceMixin {
            name,
            escaped_name,
            members,
            partial,
            ext_attrs,
            trivia: trivia_map([
                ("partial", partial_trivia),
                ("interface", interface_trivia),
                ("mixin", mixin_trivia),
                ("name", name_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    /// A single member of an ordinary interface or callback interface body:
    /// `const_`, `static`-prefixed attribute/operation, `stringifier`
    /// (bare, attribute, or operation), `iterable`/`maplike`/`setlike`,
    /// a plain or `readonly`/`inherit` attribute, or a regular/special
    /// operation.
    pub(crate) fn parse_interface_member(&mut self) -> Result<Member, ParseError> {
        let ext_attrs = self.parse_extended_attrs()?;

        if self.at(T::Const) {
            return self.parse_const(ext_attrs);
        }

        if let Some(tok) = self.consume(&[T::Static]) {
            let static_trivia = tok.trivia.to_string();
            if self.at(T::Attribute) || self.at(T::Readonly) {
                return self.parse_attribute(ext_attrs, false, Some(MemberSpecial::Static), static_trivia);
            }
            return self.parse_operation(ext_attrs, false, Some(MemberSpecial::Static), static_trivia);
        }

        if let Some(tok) = self.consume(&[T::Stringifier]) {
            let stringifier_trivia = tok.trivia.to_string();
            if let Some(semi) = self.consume(&[T::Semicolon]) {
                return Ok(Member::Operation(OperationMember {
                    return_type: IdlType::named("DOMString", TypeRole::Return, trivia_map([])),
                    name: None,
                    arguments: Vec::new(),
                    special: None,
                    member_special: Some(MemberSpecial::Stringifier),
                    ext_attrs,
                    trivia: trivia_map([("stringifier", stringifier_trivia), ("termination", semi.trivia.to_string())]),
                }));
            }
            if self.at(T::Attribute) || self.at(T::Readonly) {
                return self.parse_attribute(ext_attrs, false, Some(MemberSpecial::Stringifier), stringifier_trivia);
            }
            return self.parse_operation(ext_attrs, false, Some(MemberSpecial::Stringifier), stringifier_trivia);
        }

        if self.at_any(&[T::Iterable, T::Maplike, T::Setlike]) {
            return self.parse_iterable_like(ext_attrs, false, String::new());
        }

        let saved = self.save();
        if let Some(tok) = self.consume(&[T::Readonly]) {
            if self.at_any(&[T::Maplike, T::Setlike]) {
                return self.parse_iterable_like(ext_attrs, true, tok.trivia.to_string());
            }
            self.unconsume(saved);
        }

        if self.at_any(&[T::Attribute, T::Readonly, T::Inherit]) {
            return self.parse_attribute(ext_attrs, true, None, String::new());
        }

        self.parse_operation(ext_attrs, true, None, String::new())
    }

    /// An interface mixin's narrower member set: `const_`, a non-inheriting
    /// attribute, or a regular (unmarked) operation.
    fn parse_mixin_member(&mut self) -> Result<Member, ParseError> {
        let ext_attrs = self.parse_extended_attrs()?;

        if self.at(T::Const) {
            return self.parse_const(ext_attrs);
        }
        if self.at(T::Attribute) || self.at(T::Readonly) {
            return self.parse_attribute(ext_attrs, false, None, String::new());
        }
        self.parse_operation(ext_attrs, false, None, String::new())
    }
}
