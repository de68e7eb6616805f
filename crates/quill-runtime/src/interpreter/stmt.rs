//! Statement execution

use crate::ast::*;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use std::io::Write;

impl Interpreter {
    /// Execute statements in written order
    pub(super) fn eval_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    /// Execute a statement
    pub(super) fn eval_statement(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Assign(assign) => self.eval_assign(assign),
            Stmt::Print(print) => self.eval_print(print),
            Stmt::Input(input) => self.eval_input(input),
            Stmt::If(if_stmt) => self.eval_if(if_stmt),
        }
    }

    fn eval_assign(&mut self, assign: &AssignStmt) -> Result<(), RuntimeError> {
        let value = self.eval_expr(&assign.expression)?;
        self.variables.insert(assign.identifier.name.clone(), value);
        Ok(())
    }

    fn eval_print(&mut self, print: &PrintStmt) -> Result<(), RuntimeError> {
        let value = self.eval_expr(&print.expression)?;

        {
            let mut out = self.output.lock().map_err(|_| RuntimeError::Output {
                message: "output writer lock poisoned".to_string(),
                span: print.span,
            })?;
            writeln!(out, "{}", value).map_err(|e| RuntimeError::Output {
                message: e.to_string(),
                span: print.span,
            })?;
        }

        self.printed.push(value);
        Ok(())
    }

    fn eval_input(&mut self, input: &InputStmt) -> Result<(), RuntimeError> {
        let value = self
            .inputs
            .get(self.cursor)
            .copied()
            .ok_or_else(|| RuntimeError::InputExhausted {
                name: input.identifier.name.clone(),
                supplied: self.inputs.len(),
                span: input.span,
            })?;

        self.cursor += 1;
        self.variables.insert(input.identifier.name.clone(), value);
        Ok(())
    }

    /// Non-zero condition runs the body once; zero skips it
    fn eval_if(&mut self, if_stmt: &IfStmt) -> Result<(), RuntimeError> {
        if self.eval_expr(&if_stmt.condition)? != 0 {
            self.eval_block(&if_stmt.then_body)?;
        }
        Ok(())
    }
}
