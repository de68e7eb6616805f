//! Quill Runtime - Core language implementation
//!
//! This library provides the complete Quill pipeline:
//! - Lexical analysis ([`lexer`])
//! - Recursive-descent parsing into an AST ([`parser`], [`ast`])
//! - Tree-walking interpretation over integers ([`interpreter`])
//! - Structured diagnostics for every failure ([`diagnostic`])

/// Quill runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runtime;
pub mod span;
pub mod token;

// Re-export commonly used types
pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use diagnostic::{error_codes, Diagnostic, DIAG_VERSION};
pub use error::{Error, ErrorKind, LexError, QuillResult, RuntimeError, SyntaxError};
pub use interpreter::{interpret, Interpreter};
pub use lexer::{tokenize, Lexer};
pub use output::{capture_writer, stdout_writer, CaptureBuffer, OutputWriter};
pub use parser::{parse, parse_source, Parser};
pub use runtime::Quill;
pub use span::Span;
pub use token::{Token, TokenKind};
