//! Number and identifier scanning for the lexer

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl Lexer {
    /// Scan a number literal
    ///
    /// Digits and `.` are consumed as one run so that `3.5` is reported as a
    /// single bad literal rather than `3` followed by an unexpected `.`.
    pub(super) fn number(&mut self) -> Result<Token, LexError> {
        while !self.is_at_end() && (self.peek().is_ascii_digit() || self.peek() == '.') {
            self.advance();
        }

        let lexeme = self.current_lexeme();

        if lexeme.contains('.') {
            return Err(LexError::FractionalNumber {
                lexeme,
                span: self.current_span(),
            });
        }

        if lexeme.parse::<i64>().is_err() {
            return Err(LexError::NumberOutOfRange {
                lexeme,
                span: self.current_span(),
            });
        }

        Ok(self.make_token(TokenKind::Number, &lexeme))
    }

    /// Scan an identifier or keyword
    pub(super) fn identifier(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_alphanumeric() {
            self.advance();
        }

        let lexeme = self.current_lexeme();
        let kind = TokenKind::is_keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, &lexeme)
    }
}
