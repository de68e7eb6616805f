//! Parsing (tokens to AST)
//!
//! Recursive descent with one token of lookahead and no backtracking. The
//! first unexpected token aborts the parse; no partial tree is returned.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::error::{QuillResult, SyntaxError};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Deepest nesting of parentheses and `if` blocks accepted
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser state for building AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    depth: usize,
}

impl Parser {
    /// Create a new parser for the given tokens
    ///
    /// A missing trailing [`TokenKind::Eof`] is supplied so lookahead never
    /// runs off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end)));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse tokens into an AST
    ///
    /// Tokens after an early [`TokenKind::Eof`] are rejected rather than
    /// ignored.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        if let Some(trailing) = self.tokens.get(self.current + 1) {
            return Err(SyntaxError::UnexpectedToken {
                found: trailing.describe(),
                expected: "nothing after end of input".to_string(),
                span: trailing.span,
            });
        }

        Ok(Program { statements })
    }

    // === Nesting ===

    /// Enter a parenthesised group or `if` body opened at `span`
    pub(super) fn enter_nested(&mut self, span: Span) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave_nested(&mut self) {
        self.depth -= 1;
    }

    // === Token navigation ===

    /// Current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Consume the current token and return it; never moves past `Eof`
    pub(super) fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume a token of the given kind or fail naming what was expected
    pub(super) fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the current token
    pub(super) fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::UnexpectedToken {
            found: token.describe(),
            expected: expected.to_string(),
            span: token.span,
        }
    }
}

/// Parse a token sequence in one call
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Lex and parse `source`
pub fn parse_source(source: &str) -> QuillResult<Program> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(Parser::new(tokens).parse()?)
}
