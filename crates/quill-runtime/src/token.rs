//! Token types for lexical analysis
//!
//! Defines the closed set of tokens recognized by the Quill lexer.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token
    pub lexeme: String,
    /// Source location
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Text used when this token shows up in an error message
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Variable name
    Identifier,
    /// Integer literal (42)
    Number,

    // Keywords
    /// `print` keyword
    Print,
    /// `input` keyword
    Input,
    /// `if` keyword
    If,
    /// `then` keyword
    Then,
    /// `endif` keyword
    Endif,

    // Operators
    /// `=` (assignment)
    Assign,
    /// `>`, `<`, `==`, `!=`, `>=`, `<=`
    CompareOp,
    /// `+`, `-`, `*`
    ArithOp,

    // Punctuation
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        match s {
            "print" => Some(TokenKind::Print),
            "input" => Some(TokenKind::Input),
            "if" => Some(TokenKind::If),
            "then" => Some(TokenKind::Then),
            "endif" => Some(TokenKind::Endif),
            _ => None,
        }
    }

    /// Human-readable name, used in "expected ..." messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Print => "print",
            TokenKind::Input => "input",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Endif => "endif",
            TokenKind::Assign => "=",
            TokenKind::CompareOp => "comparison operator",
            TokenKind::ArithOp => "arithmetic operator",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token can continue an expression as a binary operator
    pub fn is_binary_operator(&self) -> bool {
        matches!(self, TokenKind::CompareOp | TokenKind::ArithOp)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
