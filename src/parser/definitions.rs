//! `definitions` / `definition` / `partial`: the top-level loop that ties
//! every other production together.

use crate::ast::{Definition, EofNode, ExtAttrs};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// `definitions`: zero or more `[ExtendedAttributeList] Definition`,
    /// followed by a synthetic `Eof` node. Stray extended attributes with
    /// no definition to attach to, or tokens left over once no definition
    /// matches, are both errors.
    pub(crate) fn parse_definitions(&mut self) -> Result<Vec<Definition>, ParseError> {
        let mut defs = Vec::new();

        loop {
            #[cfg(debug_assertions)]
            let checkpoint = self.save();
            let ext_attrs = self.parse_extended_attrs()?;
            self.clear_current();
            match self.parse_definition(ext_attrs.clone())? {
                Some(def) => defs.push(def),
                None => {
                    if !ext_attrs.is_empty() {
                        return Err(self.error("Stray extended attributes"));
                    }
                    break;
                }
            }
            #[cfg(debug_assertions)]
            self.assert_progress(checkpoint, "top-level definition");
        }

        let eof_trivia = self
            .consume(&[T::Eof])
            .map(|tok| tok.trivia.to_string())
            .unwrap_or_default();
        if !self.at(T::Eof) {
            return Err(self.error("Unrecognised tokens"));
        }

        defs.push(Definition::Eof(EofNode { trivia: eof_trivia }));
        Ok(defs)
    }

    /// `definition`: first-match dispatch across every top-level
    /// construct. Returns `Ok(None)` ("absent") only for `includes`,
    /// which is itself speculative.
    fn parse_definition(&mut self, ext_attrs: ExtAttrs) -> Result<Option<Definition>, ParseError> {
        if self.at(T::Callback) {
            return Ok(Some(self.parse_callback(ext_attrs)?));
        }
        if self.at(T::Interface) {
            return Ok(Some(self.parse_interface(ext_attrs, false, String::new())?));
        }
        if let Some(tok) = self.consume(&[T::Partial]) {
            return Ok(Some(self.parse_partial(ext_attrs, tok.trivia.to_string())?));
        }
        if self.at(T::Dictionary) {
            return Ok(Some(Definition::Dictionary(self.parse_dictionary(ext_attrs, false, String::new())?)));
        }
        if self.at(T::Enum) {
            return Ok(Some(self.parse_enum(ext_attrs)?));
        }
        if self.at(T::Typedef) {
            return Ok(Some(self.parse_typedef(ext_attrs)?));
        }
        if self.at(T::Namespace) {
            return Ok(Some(self.parse_namespace(ext_attrs, false, String::new())?));
        }
        self.parse_includes(ext_attrs)
    }

    /// `partial`: `"partial"` has already been consumed; dispatches to the
    /// one of the three constructs that may be partial. Partial
    /// definitions are never registered in the name table and never carry
    /// an inheritance clause.
    fn parse_partial(&mut self, ext_attrs: ExtAttrs, partial_trivia: String) -> Result<Definition, ParseError> {
        if self.at(T::Interface) {
            return self.parse_interface(ext_attrs, true, partial_trivia);
        }
        if self.at(T::Dictionary) {
            return Ok(Definition::Dictionary(self.parse_dictionary(ext_attrs, true, partial_trivia)?));
        }
        if self.at(T::Namespace) {
            return self.parse_namespace(ext_attrs, true, partial_trivia);
        }
        Err(self.error("expected \"interface\", \"dictionary\", or \"namespace\" after \"partial\""))
    }
}
