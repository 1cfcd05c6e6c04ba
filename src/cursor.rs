//! Token cursor: a mutable position into the token stream plus a line
//! counter, offering the `probe` / `consume` / `unconsume` primitives the
//! parser's productions are built from.

use crate::lexer::{Token, TokenType};

/// A cursor position saved before a speculative production. Restoring it
/// rolls back both the token position and the line counter in one step,
/// which keeps "symmetric decrement" an invariant of the representation
/// rather than something `unconsume` has to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPosition {
    pos: usize,
    line: u32,
}

pub struct Cursor<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    line: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens,
            pos: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The token at the current position. Indexing never goes out of bounds
    /// because the stream always ends with `Eof` and `pos` never advances
    /// past it.
    pub fn current(&self) -> &Token<'src> {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn at_eof(&self) -> bool {
        self.current().ty == TokenType::Eof
    }

    /// Does the next token have this type? No side effect.
    pub fn probe(&self, ty: TokenType) -> bool {
        self.current().ty == ty
    }

    pub fn probe_any(&self, types: &[TokenType]) -> bool {
        types.contains(&self.current().ty)
    }

    /// If the next token matches any listed type, advance and return it.
    pub fn consume(&mut self, types: &[TokenType]) -> Option<Token<'src>> {
        if !types.contains(&self.current().ty) {
            return None;
        }
        let token = self.tokens[self.pos].clone();
        self.line += token.trivia.matches('\n').count() as u32;
        if !self.at_eof() {
            self.pos += 1;
        }
        Some(token)
    }

    /// Like `consume`, but returns only the value/trivia pair — used where
    /// embedding the full token record would leak lexical noise into the
    /// tree.
    pub fn untyped_consume(&mut self, types: &[TokenType]) -> Option<(Option<&'src str>, &'src str)> {
        self.consume(types).map(|t| (t.value, t.trivia))
    }

    pub fn save(&self) -> SavedPosition {
        SavedPosition {
            pos: self.pos,
            line: self.line,
        }
    }

    pub fn unconsume(&mut self, saved: SavedPosition) {
        self.pos = saved.pos;
        self.line = saved.line;
    }

    /// Debug-only guard against a loop-driven production that returns
    /// `Ok` without consuming anything, which would otherwise spin
    /// forever instead of making progress or raising a diagnostic.
    #[cfg(debug_assertions)]
    pub fn assert_progress(&self, since: SavedPosition, production: &str) {
        if self.pos == since.pos {
            panic!("{production} did not advance the cursor at line {}", self.line);
        }
    }

    /// The first `n` upcoming tokens (including the current one), stopping
    /// after `Eof` since nothing follows it. Used to build error context.
    pub fn upcoming(&self, n: usize) -> Vec<Token<'src>> {
        let mut out = Vec::with_capacity(n);
        for token in self.tokens[self.pos..].iter() {
            if out.len() >= n {
                break;
            }
            let is_eof = token.ty == TokenType::Eof;
            out.push(token.clone());
            if is_eof {
                break;
            }
        }
        out
    }
}
