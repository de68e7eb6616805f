//! Diagnostic records for pipeline failures
//!
//! Every [`Error`](crate::error::Error) can be turned into a [`Diagnostic`]:
//! a flat, serializable record with code, location and source snippet that a
//! host renders either as human-readable text or as JSON.

use crate::error::{Error, ErrorKind, LexError, RuntimeError, SyntaxError};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// A rendered pipeline failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Error code (e.g., "QL1001")
    pub code: String,
    /// Failure classification
    pub kind: ErrorKind,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Length of error span
    pub length: usize,
    /// Source line string
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic without source context
    pub fn new(
        code: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            code: code.into(),
            kind,
            message: message.into(),
            file: "<unknown>".to_string(),
            line: 1,
            column: span.start + 1,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            help: None,
        }
    }

    /// Build a diagnostic for `error`, locating its span in `source`
    pub fn from_error(error: &Error, source: &str) -> Self {
        let span = error.span();
        let (line, column) = line_and_column(source, span.start);
        let snippet = source.lines().nth(line - 1).unwrap_or("").to_string();

        let mut diag = Self::new(error.code(), error.kind(), error.to_string(), span)
            .with_line(line)
            .with_column(column)
            .with_snippet(snippet)
            .with_label(label_for(error));

        if let Some(help) = help_for(error) {
            diag = diag.with_help(help);
        }

        diag
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Set the column number
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the snippet (source line)
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[QL1001]: Unexpected character '$'
        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));

        // Location: --> path/to/file.ql:12:9
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.file, self.line, self.column
        ));

        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));

            // Zero-length spans (end of input) still get one caret
            let padding = " ".repeat(self.column.saturating_sub(1));
            let carets = "^".repeat(self.length.max(1));
            output.push_str(&format!("   | {}{}", padding, carets));
            if !self.label.is_empty() {
                output.push_str(&format!(" {}", self.label));
            }
            output.push('\n');
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// 1-based line and column of a character offset
///
/// Offsets in trailing whitespace or past the end land one column after the
/// last non-blank character, so end-of-input errors point at real text.
fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let content_end = source.trim_end().chars().count();
    let mut line = 1;
    let mut column = 1;
    for c in source.chars().take(offset.min(content_end)) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn label_for(error: &Error) -> &'static str {
    match error {
        Error::Lex(_) => "lexer error",
        Error::Syntax(SyntaxError::UnexpectedToken { .. }) => "unexpected token",
        Error::Syntax(SyntaxError::NestingTooDeep { .. }) => "nested too deeply",
        Error::Syntax(SyntaxError::UnknownOperator { .. }) => "unknown operator",
        Error::Runtime(RuntimeError::UnboundVariable { .. }) => "not bound",
        Error::Runtime(RuntimeError::InputExhausted { .. }) => "no input left",
        Error::Runtime(RuntimeError::Output { .. }) => "while printing",
        Error::Runtime(RuntimeError::Internal { .. }) => "here",
    }
}

fn help_for(error: &Error) -> Option<String> {
    match error {
        Error::Lex(LexError::LoneBang { .. }) => {
            Some("use '!=' for inequality; there is no logical not".to_string())
        }
        Error::Lex(LexError::FractionalNumber { .. }) => {
            Some("only integer literals are supported".to_string())
        }
        Error::Lex(LexError::NumberOutOfRange { .. }) => {
            Some(format!("literals must not exceed {}", i64::MAX))
        }
        Error::Runtime(RuntimeError::UnboundVariable { name, .. }) => Some(format!(
            "assign '{}' or read it with input({}) before using it",
            name, name
        )),
        Error::Syntax(SyntaxError::NestingTooDeep { .. }) => {
            Some("move inner parts into their own assignments".to_string())
        }
        Error::Runtime(RuntimeError::InputExhausted { .. }) => {
            Some("supply one more input value per input(...) executed".to_string())
        }
        Error::Syntax(SyntaxError::UnknownOperator { .. })
        | Error::Runtime(RuntimeError::Internal { .. }) => {
            Some("this is a bug in the Quill runtime".to_string())
        }
        _ => None,
    }
}

/// Error code registry
pub mod error_codes {
    // QL1xxx - Lexical errors
    pub const UNEXPECTED_CHARACTER: &str = "QL1001";
    pub const LONE_BANG: &str = "QL1002";
    pub const FRACTIONAL_NUMBER: &str = "QL1003";
    pub const NUMBER_OUT_OF_RANGE: &str = "QL1004";

    // QL2xxx - Syntax errors
    pub const UNEXPECTED_TOKEN: &str = "QL2001";
    pub const NESTING_TOO_DEEP: &str = "QL2002";

    // QL3xxx - Runtime errors
    pub const UNBOUND_VARIABLE: &str = "QL3001";
    pub const INPUT_EXHAUSTED: &str = "QL3002";
    pub const OUTPUT_ERROR: &str = "QL3003";

    // QL9xxx - Internal errors
    pub const INTERNAL_ERROR: &str = "QL9001";
}
