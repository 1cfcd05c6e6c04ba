//! The constructs with no further narrowing needed beyond their own
//! production: `namespace`, `enum_`, `typedef`, `includes`, and
//! `callback` (both the plain and `callback interface` forms).

use crate::ast::ty::TypeRole;
use crate::ast::{Callback, CallbackInterface, Definition, EnumDef, EnumValue, ExtAttrs, Includes, Namespace, Typedef};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

impl<'src> Parser<'src> {
    /// `namespace`: members are a regular operation or a readonly
    /// attribute; nothing else.
    pub(crate) fn parse_namespace(
        &mut self,
        ext_attrs: ExtAttrs,
        partial: bool,
        partial_trivia: String,
    ) -> Result<Definition, ParseError> {
        let namespace_trivia = self.expect(T::Namespace, "\"namespace\"")?.to_string();
        let (escaped_name, name_trivia) = self.expect_ident("a namespace name")?;
        let name = if partial {
            crate::ast::unescape(&escaped_name).to_string()
        } else {
            self.register(&escaped_name, "namespace")?
        };
        self.set_current("namespace", name.clone());

        let open_trivia = self.expect(T::BraceOpen, "'{' to open namespace body")?.to_string();
        let mut members = Vec::new();
        while !self.at(T::BraceClose) {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            let member_ext_attrs = self.parse_extended_attrs()?;
            if self.at(T::Readonly) {
                members.push(self.parse_attribute(member_ext_attrs, false, None, String::new())?);
            } else if self.at(T::Attribute) {
                return Err(self.error("Namespace attributes must be readonly"));
            } else {
                members.push(self.parse_operation(member_ext_attrs, false, None, String::new())?);
            }
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "namespace member");
        }
        let close_trivia = self.expect(T::BraceClose, "'}' to close namespace body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate namespace declaration")?.to_string();

        self.clear_current();
        Ok(Definition::Namespace(Namespace {
            name,
            escaped_name,
            members,
            partial,
            ext_attrs,
            trivia: trivia_map([
                ("partial", partial_trivia),
                ("namespace", namespace_trivia),
                ("name", name_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    /// `enum_`: a non-empty, comma-separated list of quoted strings.
    pub(crate) fn parse_enum(&mut self, ext_attrs: ExtAttrs) -> Result<Definition, ParseError> {
        let enum_trivia = self.expect(T::Enum, "\"enum\"")?.to_string();
        let (escaped_name, name_trivia) = self.expect_ident("an enum name")?;
        let name = self.register(&escaped_name, "enum")?;
        self.set_current("enum", name.clone());

        let open_trivia = self.expect(T::BraceOpen, "'{' to open enum body")?.to_string();
        if self.at(T::BraceClose) {
            return Err(self.error("No value in enum"));
        }

        let mut values = Vec::new();
        let mut pending_comma = None;
        loop {
            let (value, value_trivia) = self.parse_string_lit("an enum value")?;
            let mut trivia = trivia_map([("value", value_trivia)]);
            if let Some(comma) = pending_comma.take() {
                trivia.insert("comma", comma);
            }
            values.push(EnumValue { value, trivia });
            if let Some(tok) = self.consume(&[T::Comma]) {
                if self.at(T::BraceClose) {
                    return Err(self.error("Trailing comma in enum"));
                }
                pending_comma = Some(tok.trivia.to_string());
                continue;
            }
            break;
        }

        let close_trivia = self.expect(T::BraceClose, "'}' to close enum body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate enum declaration")?.to_string();

        self.clear_current();
        Ok(Definition::Enum(EnumDef {
            name,
            escaped_name,
            values,
            ext_attrs,
            trivia: trivia_map([
                ("enum", enum_trivia),
                ("name", name_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    /// `typedef`: `"typedef" type identifier ";"`.
    pub(crate) fn parse_typedef(&mut self, ext_attrs: ExtAttrs) -> Result<Definition, ParseError> {
        let typedef_trivia = self.expect(T::Typedef, "\"typedef\"")?.to_string();
        let idl_type = self
            .parse_type(TypeRole::Typedef)?
            .ok_or_else(|| self.error("expected the typedef's type"))?;
        let (escaped_name, name_trivia) = self.expect_ident("a typedef name")?;
        let name = self.register(&escaped_name, "typedef")?;
        self.set_current("typedef", name.clone());

        let termination_trivia = self.expect(T::Semicolon, "';' to terminate typedef declaration")?.to_string();

        self.clear_current();
        Ok(Definition::Typedef(Typedef {
            name,
            escaped_name,
            idl_type,
            ext_attrs,
            trivia: trivia_map([
                ("typedef", typedef_trivia),
                ("name", name_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    /// `includes`: `identifier "includes" identifier ";"`. Speculative —
    /// returns `Ok(None)` (rolling back) if the leading identifier isn't
    /// followed by `"includes"`.
    pub(crate) fn parse_includes(&mut self, ext_attrs: ExtAttrs) -> Result<Option<Definition>, ParseError> {
        let saved = self.save();
        let target_tok = match self.consume(&[T::Identifier]) {
            Some(tok) => tok,
            None => return Ok(None),
        };
        let target = target_tok.value.unwrap_or_default().to_string();
        let target_trivia = target_tok.trivia.to_string();

        let includes_tok = match self.consume(&[T::Includes]) {
            Some(tok) => tok,
            None => {
                self.unconsume(saved);
                return Ok(None);
            }
        };

        let (includes, includes_name_trivia) = self.expect_ident("the name of the included interface mixin")?;
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate includes declaration")?.to_string();

        Ok(Some(Definition::Includes(Includes {
            target,
            includes,
            ext_attrs,
            trivia: trivia_map([
                ("target", target_trivia),
                ("includes", includes_tok.trivia.to_string()),
                ("includesName", includes_name_trivia),
                ("termination", termination_trivia),
            ]),
        })))
    }

    /// `callback`: either `"callback" "interface" ...` (sharing an
    /// ordinary interface's body) or `"callback" identifier "=" type "("
    /// argument_list ")" ";"`.
    pub(crate) fn parse_callback(&mut self, ext_attrs: ExtAttrs) -> Result<Definition, ParseError> {
        let callback_trivia = self.expect(T::Callback, "\"callback\"")?.to_string();
        if self.at(T::Interface) {
            return self.parse_callback_interface(ext_attrs, callback_trivia);
        }

        let (escaped_name, name_trivia) = self.expect_ident("a callback name")?;
        let name = self.register(&escaped_name, "callback")?;
        self.set_current("callback", name.clone());

        let assign_trivia = self.expect(T::Equals, "'=' in callback declaration")?.to_string();
        let idl_type = self
            .parse_type(TypeRole::Return)?
            .ok_or_else(|| self.error("expected the callback's return type"))?;
        let arguments = self.parse_argument_list()?;
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate callback declaration")?.to_string();

        self.clear_current();
        Ok(Definition::Callback(Callback {
            name,
            escaped_name,
            idl_type,
            arguments,
            ext_attrs,
            trivia: trivia_map([
                ("callback", callback_trivia),
                ("name", name_trivia),
                ("assign", assign_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    fn parse_callback_interface(&mut self, ext_attrs: ExtAttrs, callback_trivia: String) -> Result<Definition, ParseError> {
        let interface_trivia = self.expect(T::Interface, "\"interface\"")?.to_string();
        let (escaped_name, name_trivia) = self.expect_ident("a callback interface name")?;
        let name = self.register(&escaped_name, "callback interface")?;
        self.set_current("callback interface", name.clone());

        let open_trivia = self.expect(T::BraceOpen, "'{' to open callback interface body")?.to_string();
        let mut members = Vec::new();
        while !self.at(T::BraceClose) {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            members.push(self.parse_interface_member()?);
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "callback interface member");
        }
        let close_trivia = self.expect(T::BraceClose, "'}' to close callback interface body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate callback interface declaration")?.to_string();

        self.clear_current();
        Ok(Definition::CallbackInterface(CallbackInterface {
            name,
            escaped_name,
            members,
            ext_attrs,
            trivia: trivia_map([
                ("callback", callback_trivia),
                ("interface", interface_trivia),
                ("name", name_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }

    fn parse_string_lit(&mut self, what: &str) -> Result<(String, String), ParseError> {
        match self.consume(&[T::StringLit]) {
            Some(tok) => {
                let raw = tok.value.unwrap_or_default();
                let stripped = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw);
                Ok((stripped.to_string(), tok.trivia.to_string()))
            }
            None => Err(self.error(format!("expected {}", what))),
        }
    }
}
