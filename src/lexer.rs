//! Sticky, priority-ordered tokeniser for Web IDL source text.
//!
//! A single [`logos`] pass classifies every lexeme; whitespace and comments
//! are lexed as ordinary patterns but consumed via `#[logos(skip ...)]`, so
//! the only bookkeeping left to [`tokenize`] is slicing the gap between two
//! real tokens' spans into the next token's `trivia`. Reserved-terminal
//! reclassification (an identifier spelled like a keyword becomes that
//! keyword's token type) happens once, right after a match.

use logos::Logos;
use serde::Serialize;

/// The classified kind of a token. Lexical classes, punctuation, and
/// reserved-terminal keywords share one flat enum, exactly as WebIDL's own
/// tokeniser treats them as one vocabulary of terminal spellings — `float`
/// is deliberately both the fractional-literal class and the `float`
/// keyword's type, since an identifier can never collide with a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    Float,
    Integer,
    Identifier,
    StringLit,
    Other,
    Eof,

    ParenOpen,
    ParenClose,
    Comma,
    MinusInfinity,
    Ellipsis,
    Colon,
    Semicolon,
    LessThan,
    Equals,
    GreaterThan,
    Question,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,

    FrozenArray,
    Infinity,
    NaN,
    Promise,
    Boolean,
    Byte,
    Double,
    False,
    Implements,
    Legacyiterable,
    Long,
    Mixin,
    Null,
    Octet,
    Optional,
    Or,
    Readonly,
    Record,
    Sequence,
    Short,
    True,
    Unsigned,
    Void,
    ByteString,
    DomString,
    UsvString,
    Attribute,
    Callback,
    Const,
    Deleter,
    Dictionary,
    Enum,
    Getter,
    Includes,
    Inherit,
    Interface,
    Iterable,
    Maplike,
    Namespace,
    Partial,
    Required,
    Setlike,
    Setter,
    Static,
    Stringifier,
    Typedef,
    Unrestricted,
}

/// A classified lexeme together with the trivia (whitespace/comments) that
/// immediately preceded it. `value` is absent only for the synthetic `Eof`
/// token produced at the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    #[serde(rename = "type")]
    pub ty: TokenType,
    pub value: Option<&'src str>,
    pub trivia: &'src str,
}

impl<'src> Token<'src> {
    /// `trivia + value`, the substring this token contributes to a
    /// byte-for-byte reconstruction of the source.
    pub fn text(&self) -> String {
        format!("{}{}", self.trivia, self.value.unwrap_or(""))
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*(?:[^*]|\*[^/])*\*/")]
enum RawToken {
    // Anchored so a fraction or exponent is required; a bare run of digits
    // falls through to `Integer` instead.
    #[regex(r"-?(?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|-?[0-9]+[eE][+-]?[0-9]+", priority = 6)]
    Float,

    #[regex(r"-?(?:0[xX][0-9A-Fa-f]+|0[0-7]*|[1-9][0-9]*)", priority = 5)]
    Integer,

    #[regex(r"_?[A-Za-z][0-9A-Za-z_-]*", priority = 5)]
    Identifier,

    #[regex(r#""[^"]*""#, priority = 5)]
    StringLit,

    #[token("(", priority = 10)]
    ParenOpen,
    #[token(")", priority = 10)]
    ParenClose,
    #[token(",", priority = 10)]
    Comma,
    #[token("-Infinity", priority = 10)]
    MinusInfinity,
    #[token("...", priority = 10)]
    Ellipsis,
    #[token(":", priority = 10)]
    Colon,
    #[token(";", priority = 10)]
    Semicolon,
    #[token("<", priority = 10)]
    LessThan,
    #[token("=", priority = 10)]
    Equals,
    #[token(">", priority = 10)]
    GreaterThan,
    #[token("?", priority = 10)]
    Question,
    #[token("[", priority = 10)]
    BracketOpen,
    #[token("]", priority = 10)]
    BracketClose,
    #[token("{", priority = 10)]
    BraceOpen,
    #[token("}", priority = 10)]
    BraceClose,

    // Last resort: a single byte that is neither whitespace nor alphanumeric.
    #[regex(r"[^\sA-Za-z0-9]", priority = 1)]
    Other,
}

fn reserved_terminal(value: &str) -> Option<TokenType> {
    Some(match value {
        "FrozenArray" => TokenType::FrozenArray,
        "Infinity" => TokenType::Infinity,
        "NaN" => TokenType::NaN,
        "Promise" => TokenType::Promise,
        "boolean" => TokenType::Boolean,
        "byte" => TokenType::Byte,
        "double" => TokenType::Double,
        "false" => TokenType::False,
        "float" => TokenType::Float,
        "implements" => TokenType::Implements,
        "legacyiterable" => TokenType::Legacyiterable,
        "long" => TokenType::Long,
        "mixin" => TokenType::Mixin,
        "null" => TokenType::Null,
        "octet" => TokenType::Octet,
        "optional" => TokenType::Optional,
        "or" => TokenType::Or,
        "readonly" => TokenType::Readonly,
        "record" => TokenType::Record,
        "sequence" => TokenType::Sequence,
        "short" => TokenType::Short,
        "true" => TokenType::True,
        "unsigned" => TokenType::Unsigned,
        "void" => TokenType::Void,
        "ByteString" => TokenType::ByteString,
        "DOMString" => TokenType::DomString,
        "USVString" => TokenType::UsvString,
        "attribute" => TokenType::Attribute,
        "callback" => TokenType::Callback,
        "const" => TokenType::Const,
        "deleter" => TokenType::Deleter,
        "dictionary" => TokenType::Dictionary,
        "enum" => TokenType::Enum,
        "getter" => TokenType::Getter,
        "includes" => TokenType::Includes,
        "inherit" => TokenType::Inherit,
        "interface" => TokenType::Interface,
        "iterable" => TokenType::Iterable,
        "maplike" => TokenType::Maplike,
        "namespace" => TokenType::Namespace,
        "partial" => TokenType::Partial,
        "required" => TokenType::Required,
        "setlike" => TokenType::Setlike,
        "setter" => TokenType::Setter,
        "static" => TokenType::Static,
        "stringifier" => TokenType::Stringifier,
        "typedef" => TokenType::Typedef,
        "unrestricted" => TokenType::Unrestricted,
        _ => return None,
    })
}

fn classify(raw: RawToken, value: &str) -> TokenType {
    match raw {
        RawToken::Float => TokenType::Float,
        RawToken::Integer => TokenType::Integer,
        RawToken::Identifier => reserved_terminal(value).unwrap_or(TokenType::Identifier),
        RawToken::StringLit => TokenType::StringLit,
        RawToken::ParenOpen => TokenType::ParenOpen,
        RawToken::ParenClose => TokenType::ParenClose,
        RawToken::Comma => TokenType::Comma,
        RawToken::MinusInfinity => TokenType::MinusInfinity,
        RawToken::Ellipsis => TokenType::Ellipsis,
        RawToken::Colon => TokenType::Colon,
        RawToken::Semicolon => TokenType::Semicolon,
        RawToken::LessThan => TokenType::LessThan,
        RawToken::Equals => TokenType::Equals,
        RawToken::GreaterThan => TokenType::GreaterThan,
        RawToken::Question => TokenType::Question,
        RawToken::BracketOpen => TokenType::BracketOpen,
        RawToken::BracketClose => TokenType::BracketClose,
        RawToken::BraceOpen => TokenType::BraceOpen,
        RawToken::BraceClose => TokenType::BraceClose,
        RawToken::Other => TokenType::Other,
    }
}

/// Tokenise `src` into a stream terminated by a synthetic `Eof` token that
/// carries any trailing trivia. Never fails on well-formed UTF-8 input: any
/// byte that matches nothing else is classified as `Other`. Panics only if
/// the underlying lexer fails to advance past the cursor, which indicates a
/// gap in the token grammar rather than malformed input.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut lexer = RawToken::lexer(src);
    let mut tokens = Vec::new();
    let mut prev_end = 0usize;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if span.start < prev_end || span.end == span.start {
            panic!("Token stream not progressing");
        }
        match result {
            Ok(raw) => {
                let value = &src[span.clone()];
                let trivia = &src[prev_end..span.start];
                tokens.push(Token {
                    ty: classify(raw, value),
                    value: Some(value),
                    trivia,
                });
                prev_end = span.end;
            }
            Err(()) => panic!("Token stream not progressing"),
        }
    }

    tokens.push(Token {
        ty: TokenType::Eof,
        value: None,
        trivia: &src[prev_end..],
    });
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(src: &str) -> Vec<TokenType> {
        tokenize(src).into_iter().map(|t| t.ty).collect()
    }

    #[test]
    fn basic_punctuation() {
        assert_eq!(
            types("( ) , ... : ; < = > ? [ ] { }"),
            vec![
                TokenType::ParenOpen,
                TokenType::ParenClose,
                TokenType::Comma,
                TokenType::Ellipsis,
                TokenType::Colon,
                TokenType::Semicolon,
                TokenType::LessThan,
                TokenType::Equals,
                TokenType::GreaterThan,
                TokenType::Question,
                TokenType::BracketOpen,
                TokenType::BracketClose,
                TokenType::BraceOpen,
                TokenType::BraceClose,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn keyword_reclassification() {
        let tokens = tokenize("interface Foo");
        assert_eq!(tokens[0].ty, TokenType::Interface);
        assert_eq!(tokens[0].value, Some("interface"));
        assert_eq!(tokens[1].ty, TokenType::Identifier);
        assert_eq!(tokens[1].value, Some("Foo"));
    }

    #[test]
    fn negative_infinity_is_one_token() {
        let tokens = tokenize("-Infinity");
        assert_eq!(tokens[0].ty, TokenType::MinusInfinity);
        assert_eq!(tokens[0].value, Some("-Infinity"));
    }

    #[test]
    fn negative_float_is_not_minus_infinity() {
        let tokens = tokenize("-5.3");
        assert_eq!(tokens[0].ty, TokenType::Float);
        assert_eq!(tokens[0].value, Some("-5.3"));
    }

    #[test]
    fn integer_bases() {
        assert_eq!(types("0 07 0x1A 42"), vec![
            TokenType::Integer,
            TokenType::Integer,
            TokenType::Integer,
            TokenType::Integer,
            TokenType::Eof,
        ]);
    }

    #[test]
    fn float_requires_fraction_or_exponent() {
        let tokens = tokenize("123");
        assert_eq!(tokens[0].ty, TokenType::Integer);
        let tokens = tokenize("1e5");
        assert_eq!(tokens[0].ty, TokenType::Float);
        assert_eq!(tokens[0].value, Some("1e5"));
    }

    #[test]
    fn trivia_round_trips() {
        let src = "  // comment\n interface Foo {};";
        let tokens = tokenize(src);
        let rebuilt: String = tokens.iter().map(Token::text).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn unclassifiable_bytes_become_other() {
        let tokens = tokenize("^$%&");
        assert!(tokens[..4].iter().all(|t| t.ty == TokenType::Other));
    }

    #[test]
    fn strings_are_not_unescaped() {
        let tokens = tokenize(r#""hello world""#);
        assert_eq!(tokens[0].ty, TokenType::StringLit);
        assert_eq!(tokens[0].value, Some(r#""hello world""#));
    }
}
