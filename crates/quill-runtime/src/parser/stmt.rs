//! Statement parsing

use crate::ast::*;
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// Parse a statement, including its terminating `;`
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.check(TokenKind::If) {
            return self.parse_if_stmt();
        }

        let stmt = self.parse_simple_stmt()?;
        let end = self
            .consume(TokenKind::Semicolon, "';' after statement")?
            .span;

        Ok(match stmt {
            Stmt::Assign(mut s) => {
                s.span = s.span.merge(end);
                Stmt::Assign(s)
            }
            Stmt::Print(mut s) => {
                s.span = s.span.merge(end);
                Stmt::Print(s)
            }
            Stmt::Input(mut s) => {
                s.span = s.span.merge(end);
                Stmt::Input(s)
            }
            Stmt::If(s) => Stmt::If(s),
        })
    }

    /// Parse an assignment, print, or input statement
    fn parse_simple_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.peek().kind {
            TokenKind::Identifier => self.parse_assign_stmt(),
            TokenKind::Print => self.parse_print_stmt(),
            TokenKind::Input => self.parse_input_stmt(),
            _ => Err(self.unexpected("statement")),
        }
    }

    /// `if Expression then Statement* endif ;`
    fn parse_if_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let if_span = self.consume(TokenKind::If, "'if'")?.span;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::Then, "'then' after condition")?;

        self.enter_nested(if_span)?;
        let mut then_body = Vec::new();
        while !self.check(TokenKind::Endif) {
            then_body.push(self.parse_statement()?);
        }
        self.leave_nested();

        self.consume(TokenKind::Endif, "'endif'")?;
        let end = self
            .consume(TokenKind::Semicolon, "';' after 'endif'")?
            .span;

        Ok(Stmt::If(IfStmt {
            condition,
            then_body,
            span: if_span.merge(end),
        }))
    }

    /// `name = Expression`
    fn parse_assign_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let identifier = self.parse_identifier()?;
        self.consume(TokenKind::Assign, "'=' after variable name")?;
        let expression = self.parse_expression()?;
        let span = identifier.span.merge(expression.span());

        Ok(Stmt::Assign(AssignStmt {
            identifier,
            expression,
            span,
        }))
    }

    /// `print ( Expression )`
    fn parse_print_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let keyword = self.consume(TokenKind::Print, "'print'")?.span;
        self.consume(TokenKind::LeftParen, "'(' after 'print'")?;
        let expression = self.parse_expression()?;
        let end = self.consume(TokenKind::RightParen, "')'")?.span;

        Ok(Stmt::Print(PrintStmt {
            expression,
            span: keyword.merge(end),
        }))
    }

    /// `input ( name )`
    fn parse_input_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let keyword = self.consume(TokenKind::Input, "'input'")?.span;
        self.consume(TokenKind::LeftParen, "'(' after 'input'")?;
        let identifier = self.parse_identifier()?;
        let end = self.consume(TokenKind::RightParen, "')'")?.span;

        Ok(Stmt::Input(InputStmt {
            identifier,
            span: keyword.merge(end),
        }))
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.consume(TokenKind::Identifier, "identifier")?;
        Ok(Identifier {
            name: token.lexeme,
            span: token.span,
        })
    }
}
