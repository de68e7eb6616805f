//! Error types for every pipeline stage
//!
//! Each stage fails fast with its own typed error. [`Error`] unifies them for
//! callers that run the whole pipeline, and [`ErrorKind`] gives the coarse
//! classification used by diagnostics.

use crate::diagnostic::error_codes;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a pipeline failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Lexical,
    Syntax,
    UnboundVariable,
    InputExhausted,
    Output,
    /// A bug in the pipeline itself, never caused by user input
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::UnboundVariable => "unbound variable",
            ErrorKind::InputExhausted => "input exhausted",
            ErrorKind::Output => "output error",
            ErrorKind::Internal => "internal error",
        };
        f.write_str(name)
    }
}

/// Tokenization failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("Unexpected character '!' (only '!=' is an operator)")]
    LoneBang { span: Span },

    #[error("Fractional number literal '{lexeme}' is not supported")]
    FractionalNumber { lexeme: String, span: Span },

    #[error("Number literal '{lexeme}' is too large")]
    NumberOutOfRange { lexeme: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::LoneBang { span }
            | LexError::FractionalNumber { span, .. }
            | LexError::NumberOutOfRange { span, .. } => *span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => error_codes::UNEXPECTED_CHARACTER,
            LexError::LoneBang { .. } => error_codes::LONE_BANG,
            LexError::FractionalNumber { .. } => error_codes::FRACTIONAL_NUMBER,
            LexError::NumberOutOfRange { .. } => error_codes::NUMBER_OUT_OF_RANGE,
        }
    }
}

/// Parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// `found` is the offending token as it should appear in a message
    #[error("Unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    /// Parentheses or `if` blocks opened more than `limit` levels deep
    #[error("Nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },

    #[error("Unknown operator '{op}'")]
    UnknownOperator { op: String, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::NestingTooDeep { span, .. }
            | SyntaxError::UnknownOperator { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::UnexpectedToken { .. } | SyntaxError::NestingTooDeep { .. } => {
                ErrorKind::Syntax
            }
            SyntaxError::UnknownOperator { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SyntaxError::UnexpectedToken { .. } => error_codes::UNEXPECTED_TOKEN,
            SyntaxError::NestingTooDeep { .. } => error_codes::NESTING_TOO_DEEP,
            SyntaxError::UnknownOperator { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Interpretation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Unbound variable: {name}")]
    UnboundVariable { name: String, span: Span },

    /// `supplied` is the total number of input values given to the run
    #[error("No input value left for '{name}' ({supplied} supplied)")]
    InputExhausted {
        name: String,
        supplied: usize,
        span: Span,
    },

    #[error("Failed to write output: {message}")]
    Output { message: String, span: Span },

    #[error("Internal error: {message}")]
    Internal { message: String, span: Span },
}

impl RuntimeError {
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::UnboundVariable { span, .. }
            | RuntimeError::InputExhausted { span, .. }
            | RuntimeError::Output { span, .. }
            | RuntimeError::Internal { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            RuntimeError::InputExhausted { .. } => ErrorKind::InputExhausted,
            RuntimeError::Output { .. } => ErrorKind::Output,
            RuntimeError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::UnboundVariable { .. } => error_codes::UNBOUND_VARIABLE,
            RuntimeError::InputExhausted { .. } => error_codes::INPUT_EXHAUSTED,
            RuntimeError::Output { .. } => error_codes::OUTPUT_ERROR,
            RuntimeError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Any failure of the lex → parse → interpret pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lexical,
            Error::Syntax(e) => e.kind(),
            Error::Runtime(e) => e.kind(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Lex(e) => e.span(),
            Error::Syntax(e) => e.span(),
            Error::Runtime(e) => e.span(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(e) => e.code(),
            Error::Syntax(e) => e.code(),
            Error::Runtime(e) => e.code(),
        }
    }
}

/// Result type for whole-pipeline operations
pub type QuillResult<T> = Result<T, Error>;
