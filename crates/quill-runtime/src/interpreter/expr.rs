//! Expression evaluation
//!
//! Arithmetic wraps on `i64` overflow. Comparisons produce `1` or `0`.

use crate::ast::*;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;

impl Interpreter {
    /// Evaluate an expression
    pub(super) fn eval_expr(&self, expr: &Expr) -> Result<i64, RuntimeError> {
        match expr {
            Expr::Number(lit) => eval_number(lit),
            Expr::Identifier(id) => self.get_variable(id),
            Expr::Binary(binary) => self.eval_binary(binary),
        }
    }

    fn get_variable(&self, id: &Identifier) -> Result<i64, RuntimeError> {
        self.variables
            .get(&id.name)
            .copied()
            .ok_or_else(|| RuntimeError::UnboundVariable {
                name: id.name.clone(),
                span: id.span,
            })
    }

    /// Left operand is fully evaluated before the right one
    ///
    /// The left spine is walked with a loop; only right operands recurse, and
    /// the parser bounds their nesting.
    fn eval_binary(&self, binary: &BinaryExpr) -> Result<i64, RuntimeError> {
        let mut spine = vec![binary];
        let mut leftmost = &*binary.left;
        while let Expr::Binary(inner) = leftmost {
            spine.push(inner);
            leftmost = &*inner.left;
        }

        let mut value = self.eval_expr(leftmost)?;
        for node in spine.iter().rev() {
            let right = self.eval_expr(&node.right)?;
            value = apply_binary(node.op, value, right);
        }
        Ok(value)
    }
}

/// Apply an operator to two evaluated operands
pub fn apply_binary(op: BinaryOp, left: i64, right: i64) -> i64 {
    match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Eq => (left == right) as i64,
        BinaryOp::Ne => (left != right) as i64,
        BinaryOp::Lt => (left < right) as i64,
        BinaryOp::Le => (left <= right) as i64,
        BinaryOp::Gt => (left > right) as i64,
        BinaryOp::Ge => (left >= right) as i64,
    }
}

/// The lexer only produces in-range digit runs, so failure here is a bug
fn eval_number(lit: &NumberLiteral) -> Result<i64, RuntimeError> {
    lit.text.parse::<i64>().map_err(|e| RuntimeError::Internal {
        message: format!("invalid number literal '{}': {}", lit.text, e),
        span: lit.span,
    })
}
