//! Quill runtime API for embedding

use crate::ast::Program;
use crate::diagnostic::Diagnostic;
use crate::error::QuillResult;
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::output::{stdout_writer, OutputWriter};
use crate::parser::Parser;
use crate::token::Token;

/// Quill runtime instance
///
/// Runs the whole pipeline (lex, parse, interpret) for one source text at a
/// time. Every [`run`](Quill::run) starts from an empty variable map and a
/// fresh input cursor; nothing carries over between runs.
///
/// # Examples
///
/// ```
/// use quill_runtime::{capture_writer, Quill};
///
/// let (writer, buffer) = capture_writer();
/// let runtime = Quill::new().with_output(writer);
///
/// let printed = runtime.run("input(a); print(a * 2);", &[21]).unwrap();
/// assert_eq!(printed, vec![42]);
/// assert_eq!(buffer.contents(), "42\n");
/// ```
pub struct Quill {
    output: OutputWriter,
}

impl Quill {
    /// Create a runtime that prints to stdout
    pub fn new() -> Self {
        Self {
            output: stdout_writer(),
        }
    }

    /// Redirect `print` output for every subsequent run
    pub fn with_output(mut self, output: OutputWriter) -> Self {
        self.output = output;
        self
    }

    /// Tokenize `source`, including the trailing end-of-input token
    pub fn tokens(&self, source: &str) -> QuillResult<Vec<Token>> {
        Ok(Lexer::new(source).tokenize()?)
    }

    /// Lex and parse `source` without running it
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_runtime::Quill;
    ///
    /// let program = Quill::new().check("x = 1; print(x);").unwrap();
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    pub fn check(&self, source: &str) -> QuillResult<Program> {
        let tokens = self.tokens(source)?;
        Ok(Parser::new(tokens).parse()?)
    }

    /// Run `source` to completion, reading `inputs` in order
    ///
    /// Returns the printed values. On failure, values printed before the
    /// failing statement have already reached the output writer.
    pub fn run(&self, source: &str, inputs: &[i64]) -> QuillResult<Vec<i64>> {
        let program = self.check(source)?;
        let mut interpreter = Interpreter::new(inputs.to_vec()).with_output(self.output.clone());
        interpreter.eval(&program)?;
        Ok(interpreter.into_printed())
    }

    /// Like [`run`](Quill::run), but failures come back as a [`Diagnostic`]
    /// located in `source`
    pub fn run_with_diagnostic(
        &self,
        source: &str,
        inputs: &[i64],
    ) -> Result<Vec<i64>, Diagnostic> {
        self.run(source, inputs).map_err(|e| Diagnostic::from_error(&e, source))
    }
}

impl Default for Quill {
    fn default() -> Self {
        Self::new()
    }
}
