//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation over integer values. All run state lives on the
//! [`Interpreter`] value:
//! - the variable map (grows monotonically, no deletion)
//! - the input cursor (advances strictly forward)
//! - the output sink and the list of values printed so far

mod expr;
mod stmt;

pub use expr::apply_binary;

use crate::ast::Program;
use crate::error::RuntimeError;
use crate::output::{stdout_writer, OutputWriter};
use std::collections::HashMap;

/// Interpreter state for one run
pub struct Interpreter {
    /// Variable bindings
    pub(super) variables: HashMap<String, i64>,
    /// Values available to `input(...)`, consumed in order
    pub(super) inputs: Vec<i64>,
    /// Index of the next unread input value
    pub(super) cursor: usize,
    /// Where `print` writes
    pub(super) output: OutputWriter,
    /// Every value printed so far, in order
    pub(super) printed: Vec<i64>,
}

impl Interpreter {
    /// Create an interpreter that reads from `inputs` and prints to stdout
    pub fn new(inputs: Vec<i64>) -> Self {
        Self {
            variables: HashMap::new(),
            inputs,
            cursor: 0,
            output: stdout_writer(),
            printed: Vec::new(),
        }
    }

    /// Redirect `print` output
    pub fn with_output(mut self, output: OutputWriter) -> Self {
        self.output = output;
        self
    }

    /// Execute every top-level statement in order
    ///
    /// Stops at the first error. Output written before the failing statement
    /// stays written.
    pub fn eval(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.eval_block(&program.statements)
    }

    /// Values printed so far
    pub fn printed(&self) -> &[i64] {
        &self.printed
    }

    /// Current value of a variable, if bound
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Number of input values consumed so far
    pub fn inputs_consumed(&self) -> usize {
        self.cursor
    }

    /// Consume the interpreter, returning the printed values
    pub fn into_printed(self) -> Vec<i64> {
        self.printed
    }
}

/// Run `program` against `inputs`, writing to `output`
///
/// Returns the printed values in execution order.
pub fn interpret(
    program: &Program,
    inputs: &[i64],
    output: OutputWriter,
) -> Result<Vec<i64>, RuntimeError> {
    let mut interpreter = Interpreter::new(inputs.to_vec()).with_output(output);
    interpreter.eval(program)?;
    Ok(interpreter.into_printed())
}
