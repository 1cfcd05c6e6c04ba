//! The single error type surfaced by [`crate::parse`].

use serde::Serialize;

use crate::lexer::{Token, TokenType};

/// An owned, JSON-serialisable copy of a [`Token`], used only inside error
/// payloads (the borrowed form can't outlive the `parse` call that produced
/// the error).
#[derive(Debug, Clone, Serialize)]
pub struct TokenRecord {
    #[serde(rename = "type")]
    pub ty: TokenType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub trivia: String,
}

impl<'src> From<&Token<'src>> for TokenRecord {
    fn from(token: &Token<'src>) -> Self {
        Self {
            ty: token.ty,
            value: token.value.map(str::to_owned),
            trivia: token.trivia.to_owned(),
        }
    }
}

/// A parse failure. Rendered as
/// `"<message>, line <line> (tokens: <json of input>)\n<pretty json of tokens>"`,
/// matching what callers that `eprintln!("{err}")` today expect to see.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}, line {line} (tokens: {input_json})\n{tokens_pretty}")]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    /// The first five upcoming tokens rejoined with their trivia.
    pub input: String,
    /// A shallow copy of the first five upcoming token records.
    pub tokens: Vec<TokenRecord>,
    input_json: String,
    tokens_pretty: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32, input: String, tokens: Vec<TokenRecord>) -> Self {
        let input_json = serde_json::to_string(&input).unwrap_or_else(|_| "null".to_string());
        let tokens_pretty = serde_json::to_string_pretty(&tokens).unwrap_or_else(|_| "[]".to_string());
        Self {
            message: message.into(),
            line,
            input,
            tokens,
            input_json,
            tokens_pretty,
        }
    }
}
