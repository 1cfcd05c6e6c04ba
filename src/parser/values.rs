//! `const_value` and `default_`: literal values used for constant
//! initialisers, dictionary field defaults, and argument defaults.

use crate::ast::{ConstValue, DefaultValue};
use crate::error::ParseError;
use crate::lexer::TokenType as T;
use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// `const_value`: `true` | `false` | `Infinity` | `-Infinity` | `NaN` |
    /// an integer literal | a float literal.
    pub(crate) fn parse_const_value(&mut self) -> Result<Option<ConstValue>, ParseError> {
        if let Some(tok) = self.consume(&[T::True]) {
            return Ok(Some(ConstValue::Boolean { value: true, trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::False]) {
            return Ok(Some(ConstValue::Boolean { value: false, trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::Infinity]) {
            return Ok(Some(ConstValue::Infinity { negative: false, trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::MinusInfinity]) {
            return Ok(Some(ConstValue::Infinity { negative: true, trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::NaN]) {
            return Ok(Some(ConstValue::NaN { trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::Null]) {
            return Ok(Some(ConstValue::Null { trivia: tok.trivia.to_string() }));
        }
        if let Some(tok) = self.consume(&[T::Integer]) {
            return Ok(Some(ConstValue::Number {
                value: tok.value.unwrap_or_default().to_string(),
                trivia: tok.trivia.to_string(),
            }));
        }
        if let Some(tok) = self.consume(&[T::Float]) {
            return Ok(Some(ConstValue::Number {
                value: tok.value.unwrap_or_default().to_string(),
                trivia: tok.trivia.to_string(),
            }));
        }
        Ok(None)
    }

    /// `default_`: a `const_value`, an empty sequence literal `[]`, or a
    /// quoted string (with its surrounding quotes stripped).
    pub(crate) fn parse_default(&mut self) -> Result<DefaultValue, ParseError> {
        if let Some(value) = self.parse_const_value()? {
            return Ok(DefaultValue::Const(value));
        }
        if let Some(open_tok) = self.consume(&[T::BracketOpen]) {
            if self.consume(&[T::BracketClose]).is_none() {
                return Err(self.error("Only empty sequence default values are allowed"));
            }
            return Ok(DefaultValue::Sequence { trivia: open_tok.trivia.to_string() });
        }
        if let Some(tok) = self.consume(&[T::StringLit]) {
            let raw = tok.value.unwrap_or_default();
            let stripped = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw);
            return Ok(DefaultValue::StringLit {
                value: stripped.to_string(),
                trivia: tok.trivia.to_string(),
            });
        }
        Err(self.error("expected a default value"))
    }
}
