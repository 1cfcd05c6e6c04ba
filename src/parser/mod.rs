//! Recursive-descent parser: one production per Web IDL construct, built on
//! top of the [`Cursor`] primitives. Productions either return a node and
//! leave the cursor past what they consumed, return `Ok(None)` and leave the
//! cursor untouched ("absent"), or return `Err` and the whole parse unwinds.

mod definitions;
mod dictionary;
mod extended_attrs;
mod interface;
mod members;
mod simple_defs;
mod types;
mod values;

use std::collections::HashMap;

use crate::ast::Trivia;
use crate::cursor::Cursor;
use crate::error::{ParseError, TokenRecord};
use crate::lexer::TokenType as T;

pub(crate) const MAX_ERROR_CONTEXT: usize = 5;

pub struct Parser<'src> {
    cursor: Cursor<'src>,
    names: HashMap<String, &'static str>,
    current: Option<(&'static str, String)>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        let tokens = crate::lexer::tokenize(src);
        Self {
            cursor: Cursor::new(tokens),
            names: HashMap::new(),
            current: None,
        }
    }

    pub(crate) fn at(&self, ty: T) -> bool {
        self.cursor.probe(ty)
    }

    pub(crate) fn at_any(&self, tys: &[T]) -> bool {
        self.cursor.probe_any(tys)
    }

    pub(crate) fn consume(&mut self, tys: &[T]) -> Option<crate::lexer::Token<'src>> {
        self.cursor.consume(tys)
    }

    /// `value + trivia` of a consumed token, discarding the rest of the
    /// token record (used when building tree nodes that only need text).
    pub(crate) fn untyped_consume(&mut self, tys: &[T]) -> Option<(Option<&'src str>, &'src str)> {
        self.cursor.untyped_consume(tys)
    }

    pub(crate) fn save(&self) -> crate::cursor::SavedPosition {
        self.cursor.save()
    }

    pub(crate) fn unconsume(&mut self, saved: crate::cursor::SavedPosition) {
        self.cursor.unconsume(saved);
    }

    #[cfg(debug_assertions)]
    pub(crate) fn assert_progress(&self, since: crate::cursor::SavedPosition, production: &str) {
        self.cursor.assert_progress(since, production);
    }

    /// Consume `ty`, raising `"expected {what}"` if it isn't next. Returns
    /// the token's trivia (the value is implied by `ty`).
    pub(crate) fn expect(&mut self, ty: T, what: &str) -> Result<&'src str, ParseError> {
        match self.consume(&[ty]) {
            Some(tok) => Ok(tok.trivia),
            None => Err(self.error(format!("expected {}", what))),
        }
    }

    pub(crate) fn expect_ident(&mut self, what: &str) -> Result<(String, String), ParseError> {
        match self.consume(&[T::Identifier]) {
            Some(tok) => Ok((tok.value.unwrap_or_default().to_string(), tok.trivia.to_string())),
            None => Err(self.error(format!("expected {}", what))),
        }
    }

    /// Build a `ParseError` for `message`, prefixed with the enclosing
    /// definition's tag and name when one is being parsed, and carrying the
    /// next few upcoming tokens as context.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let message = match &self.current {
            Some((tag, name)) => format!("{} \"{}\": {}", tag, name, message.into()),
            None => message.into(),
        };
        let upcoming = self.cursor.upcoming(MAX_ERROR_CONTEXT);
        let input = upcoming.iter().map(|t| t.text()).collect::<String>();
        let tokens = upcoming.iter().map(TokenRecord::from).collect();
        ParseError::new(message, self.cursor.line(), input, tokens)
    }

    pub(crate) fn set_current(&mut self, tag: &'static str, name: String) {
        self.current = Some((tag, name));
    }

    pub(crate) fn clear_current(&mut self) {
        self.current = None;
    }

    /// Unescape, duplicate-check, and register a non-partial top-level
    /// name, per spec.md §4.4. Partial definitions never call this.
    pub(crate) fn register(&mut self, escaped_name: &str, tag: &'static str) -> Result<String, ParseError> {
        let name = crate::ast::unescape(escaped_name).to_string();
        if let Some(existing) = self.names.get(name.as_str()) {
            return Err(self.error(format!(
                "name \"{}\" of type \"{}\" was already seen",
                name, existing
            )));
        }
        self.names.insert(name.clone(), tag);
        Ok(name)
    }
}

pub(crate) fn trivia_map<const N: usize>(pairs: [(&'static str, String); N]) -> Trivia {
    pairs.into_iter().collect()
}

/// Parse `src`, returning the definitions followed by a synthetic `Eof`
/// node, or the first diagnostic encountered.
pub fn parse(src: &str) -> Result<Vec<crate::ast::Definition>, ParseError> {
    let mut parser = Parser::new(src);
    parser.parse_definitions()
}
