//! Expression parsing
//!
//! Binary operators have no precedence: they fold strictly left to right, so
//! `a + b * c` is `((a + b) * c)`.

use crate::ast::*;
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// `Primary ( (CompareOp | ArithOp) Primary )*`
    pub(super) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_primary()?;

        while self.peek().kind.is_binary_operator() {
            let op_token = self.advance();
            let op = BinaryOp::from_symbol(&op_token.lexeme).ok_or_else(|| {
                SyntaxError::UnknownOperator {
                    op: op_token.lexeme.clone(),
                    span: op_token.span,
                }
            })?;
            let right = self.parse_primary()?;
            let span = left.span().merge(right.span());

            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    /// `Identifier | Number | ( Expression )`
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek().kind {
            TokenKind::Identifier => Ok(Expr::Identifier(self.parse_identifier()?)),
            TokenKind::Number => {
                let token = self.advance();
                Ok(Expr::Number(NumberLiteral {
                    text: token.lexeme,
                    span: token.span,
                }))
            }
            TokenKind::LeftParen => {
                let open = self.advance();
                self.enter_nested(open.span)?;
                let expr = self.parse_expression()?;
                self.consume(TokenKind::RightParen, "')' after expression")?;
                self.leave_nested();
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}
