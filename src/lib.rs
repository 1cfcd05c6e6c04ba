//! A tokeniser and recursive-descent parser for Web IDL source text.
//!
//! ```
//! let defs = webidl_parser::parse("interface Foo { readonly attribute DOMString bar; };").unwrap();
//! assert_eq!(defs.len(), 2); // the interface, plus a trailing eof node
//! ```
//!
//! [`parse`] turns a source string into a [`Vec<ast::Definition>`], or the
//! first [`error::ParseError`] encountered. Every node carries enough
//! trivia to reconstruct the exact source text it was parsed from.

pub mod ast;
pub mod cursor;
pub mod error;
pub mod lexer;
mod parser;
pub mod reconstruct;

pub use error::ParseError;
pub use parser::parse;
pub use reconstruct::reconstruct;
