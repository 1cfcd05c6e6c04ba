//! `extended_attrs` / `simple_extended_attr`: the bracketed `[Name]`,
//! `[Name=Value]`, `[Name(args)]`, `[Name=(ids)]` annotations.

use crate::ast::{ExtAttr, ExtAttrIdentifier, ExtAttrRhs, ExtAttrs};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::{trivia_map, Parser};

impl<'src> Parser<'src> {
    /// Optional `[ ... ]` list of comma-separated extended attributes.
    /// Returns an empty `Vec` ("absent") if there is no `[`.
    pub(crate) fn parse_extended_attrs(&mut self) -> Result<ExtAttrs, ParseError> {
        let open_trivia = match self.consume(&[T::BracketOpen]) {
            Some(tok) => tok.trivia.to_string(),
            None => return Ok(Vec::new()),
        };

        if self.at(T::BracketClose) {
            return Err(self.error("Extended attributes must not be empty"));
        }

        let mut attrs = Vec::new();
        let mut pending = Some(open_trivia);
        loop {
            let mut attr = self.parse_simple_extended_attr()?;
            if let Some(lead) = pending.take() {
                attr.trivia.insert(if attrs.is_empty() { "open" } else { "comma" }, lead);
            }
            attrs.push(attr);
            match self.consume(&[T::Comma]) {
                Some(tok) => {
                    if self.at(T::BracketClose) {
                        return Err(self.error("Trailing comma in extended attribute list"));
                    }
                    pending = Some(tok.trivia.to_string());
                    continue;
                }
                None => break,
            }
        }

        let close_trivia = self.expect(T::BracketClose, "']' to close extended attribute list")?.to_string();
        if let Some(last) = attrs.last_mut() {
            last.trivia.insert("close", close_trivia);
        }
        Ok(attrs)
    }

    fn parse_simple_extended_attr(&mut self) -> Result<ExtAttr, ParseError> {
        let (name, name_trivia) = self.expect_ident("an extended attribute name")?;

        let mut rhs = None;
        let mut rhs_identifiers = None;
        let mut arguments = None;
        let mut assign_trivia = String::new();

        if let Some(tok) = self.consume(&[T::Equals]) {
            assign_trivia = tok.trivia.to_string();
            if self.at(T::ParenOpen) {
                rhs_identifiers = Some(self.parse_identifier_list()?);
            } else {
                rhs = Some(self.parse_ext_attr_rhs_value()?);
                if self.at(T::ParenOpen) {
                    arguments = Some(self.parse_argument_list()?);
                }
            }
        } else if self.at(T::ParenOpen) {
            arguments = Some(self.parse_argument_list()?);
        }

        Ok(ExtAttr {
            name,
            rhs,
            arguments,
            rhs_identifiers,
            trivia: trivia_map([("name", name_trivia), ("assign", assign_trivia)]),
        })
    }

    fn parse_ext_attr_rhs_value(&mut self) -> Result<ExtAttrRhs, ParseError> {
        if let Some(tok) = self.consume(&[T::Identifier]) {
            return Ok(ExtAttrRhs::Identifier {
                value: tok.value.unwrap_or_default().to_string(),
                trivia: tok.trivia.to_string(),
            });
        }
        if let Some(tok) = self.consume(&[T::Integer]) {
            return Ok(ExtAttrRhs::Integer {
                value: tok.value.unwrap_or_default().to_string(),
                trivia: tok.trivia.to_string(),
            });
        }
        if let Some(tok) = self.consume(&[T::Float]) {
            return Ok(ExtAttrRhs::Float {
                value: tok.value.unwrap_or_default().to_string(),
                trivia: tok.trivia.to_string(),
            });
        }
        if let Some(tok) = self.consume(&[T::StringLit]) {
            let raw = tok.value.unwrap_or_default();
            let stripped = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw);
            return Ok(ExtAttrRhs::StringLit {
                value: stripped.to_string(),
                trivia: tok.trivia.to_string(),
            });
        }
        Err(self.error("expected an identifier, number, or string after \"=\""))
    }

    fn parse_identifier_list(&mut self) -> Result<Vec<ExtAttrIdentifier>, ParseError> {
        let open_trivia = self.expect(T::ParenOpen, "'(' to start identifier list")?.to_string();
        let mut ids = Vec::new();
        if !self.at(T::ParenClose) {
            let mut pending = Some(open_trivia);
            loop {
                let (name, name_trivia) = self.expect_ident("an identifier")?;
                let mut trivia = trivia_map([("name", name_trivia)]);
                if let Some(lead) = pending.take() {
                    trivia.insert(if ids.is_empty() { "open" } else { "comma" }, lead);
                }
                ids.push(ExtAttrIdentifier { name, trivia });
                match self.consume(&[T::Comma]) {
                    Some(tok) => {
                        if self.at(T::ParenClose) {
                            return Err(self.error("Trailing comma in identifier list"));
                        }
                        pending = Some(tok.trivia.to_string());
                        continue;
                    }
                    None => break,
                }
            }
        }
        let close_trivia = self.expect(T::ParenClose, "')' to close identifier list")?.to_string();
        if let Some(last) = ids.last_mut() {
            last.trivia.insert("close", close_trivia);
        }
        Ok(ids)
    }
}
