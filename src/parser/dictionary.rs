//! `dictionary` and its field production.

use crate::ast::ty::TypeRole;
use crate::ast::{Dictionary, DictionaryField, ExtAttrs, Member};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

impl<'src> Parser<'src> {
    /// `dictionary`: `["partial"] "dictionary" identifier [":" identifier]
    /// "{" DictionaryMember* "}" ";"`. `"partial"` has already been
    /// consumed by the caller.
    pub(crate) fn parse_dictionary(
        &mut self,
        ext_attrs: ExtAttrs,
        partial: bool,
        partial_trivia: String,
    ) -> Result<Dictionary, ParseError> {
        let dictionary_trivia = self.expect(T::Dictionary, "\"dictionary\"")?.to_string();
        let (escaped_name, name_trivia) = self.expect_ident("a dictionary name")?;
        let name = if partial {
            crate::ast::unescape(&escaped_name).to_string()
        } else {
            self.register(&escaped_name, "dictionary")?
        };
        self.set_current("dictionary", name.clone());

        let (inheritance, colon_trivia, parent_trivia) = match self.consume(&[T::Colon]) {
            Some(tok) => {
                let (parent, parent_trivia) = self.expect_ident("the inherited dictionary's name")?;
                (Some(parent), tok.trivia.to_string(), parent_trivia)
            }
            None => (None, String::new(), String::new()),
        };

        let open_trivia = self.expect(T::BraceOpen, "'{' to open dictionary body")?.to_string();
        let mut members = Vec::new();
        while !self.at(T::BraceClose) {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            let field_ext_attrs = self.parse_extended_attrs()?;
            members.push(self.parse_dictionary_field(field_ext_attrs)?);
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "dictionary field");
        }
        let close_trivia = self.expect(T::BraceClose, "'}' to close dictionary body")?.to_string();
        let termination_trivia = self.expect(T::Semicolon, "';' to terminate dictionary declaration")?.to_string();

        self.clear_current();
        Ok(Dictionary {
            name,
            escaped_name,
            inheritance,
            members,
            partial,
            ext_attrs,
            trivia: trivia_map([
                ("partial", partial_trivia),
                ("dictionary", dictionary_trivia),
                ("name", name_trivia),
                ("inheritance", colon_trivia),
                ("inheritanceName", parent_trivia),
                ("open", open_trivia),
                ("close", close_trivia),
                ("termination", termination_trivia),
            ]),
        })
    }

    fn parse_dictionary_field(&mut self, ext_attrs: ExtAttrs) -> Result<Member, ParseError> {
        let (required, required_trivia) = match self.consume(&[T::Required]) {
            Some(tok) => (true, tok.trivia.to_string()),
            None => (false, String::new()),
        };
        let idl_type = self
            .parse_type(TypeRole::Dictionary)?
            .ok_or_else(|| self.error("expected the dictionary field's type"))?;
        let (name, name_trivia) = self.expect_ident("a dictionary field name")?;

        let (default, assign_trivia) = match self.consume(&[T::Equals]) {
            Some(tok) => (Some(self.parse_default()?), tok.trivia.to_string()),
            None => (None, String::new()),
        };

        if required && default.is_some() {
            return Err(self.error("A required member must not have a default value"));
        }

        let termination_trivia = self.expect(T::Semicolon, "';' to terminate dictionary field")?.to_string();
        Ok(Member::Field(DictionaryField {
            idl_type,
            name,
            required,
            default,
            ext_attrs,
            trivia: trivia_map([
                ("required", required_trivia),
                ("name", name_trivia),
                ("assign", assign_trivia),
                ("termination", termination_trivia),
            ]),
        }))
    }
}
