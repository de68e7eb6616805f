//! Lexical analysis (tokenization)
//!
//! The lexer converts Quill source code into a stream of tokens with span
//! information. Scanning is a single greedy pass that stops at the first
//! invalid character.

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

mod literals;

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    pub(super) chars: Vec<char>,
    /// Current position in chars
    pub(super) current: usize,
    /// Start position of current token
    pub(super) start_pos: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            chars: source.as_ref().chars().collect(),
            current: 0,
            start_pos: 0,
        }
    }

    /// Tokenize the source code
    ///
    /// On success the last token is always [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        self.start_pos = self.current;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, ""));
        }

        let c = self.advance();

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen, "("),
            ')' => self.make_token(TokenKind::RightParen, ")"),
            ';' => self.make_token(TokenKind::Semicolon, ";"),

            '+' => self.make_token(TokenKind::ArithOp, "+"),
            '-' => self.make_token(TokenKind::ArithOp, "-"),
            '*' => self.make_token(TokenKind::ArithOp, "*"),

            '=' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::CompareOp, "==")
                } else {
                    self.make_token(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::CompareOp, "!=")
                } else {
                    return Err(LexError::LoneBang {
                        span: self.current_span(),
                    });
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::CompareOp, "<=")
                } else {
                    self.make_token(TokenKind::CompareOp, "<")
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::CompareOp, ">=")
                } else {
                    self.make_token(TokenKind::CompareOp, ">")
                }
            }

            c if c.is_ascii_digit() => self.number()?,

            c if c.is_ascii_alphabetic() => self.identifier(),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    ch: c,
                    span: self.current_span(),
                })
            }
        };

        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    // === Character navigation ===

    /// Advance to next character and return it
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    pub(super) fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Span from the start of the current token to the current position
    pub(super) fn current_span(&self) -> Span {
        Span::new(self.start_pos, self.current)
    }

    /// Text of the current token
    pub(super) fn current_lexeme(&self) -> String {
        self.chars[self.start_pos..self.current].iter().collect()
    }

    /// Create a token with the given kind and lexeme
    pub(super) fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, self.current_span())
    }
}

/// Tokenize `source` in one call
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("();"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comparison_operators() {
        let tokens = tokenize("> < == != >= <=").unwrap();
        let lexemes: Vec<&str> = tokens[..6].iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec![">", "<", "==", "!=", ">=", "<="]);
        assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::CompareOp));
    }

    #[test]
    fn test_assign_vs_equality() {
        assert_eq!(
            kinds("x = y == z"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::CompareOp,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_greedy_two_char_operator() {
        // `>==` is `>=` followed by a lone `=`
        let tokens = tokenize(">==").unwrap();
        assert_eq!(tokens[0].lexeme, ">=");
        assert_eq!(tokens[1].kind, TokenKind::Assign);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("print input if then endif printer x1"),
            vec![
                TokenKind::Print,
                TokenKind::Input,
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Endif,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("ab = 12;").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 4));
        assert_eq!(tokens[2].span, Span::new(5, 7));
        assert_eq!(tokens[3].span, Span::new(7, 8));
        assert_eq!(tokens[4].span, Span::new(8, 8));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("x = 1 $ 2;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '$',
                span: Span::new(6, 7)
            }
        );
    }

    #[test]
    fn test_lone_bang() {
        let err = tokenize("if !x then").unwrap_err();
        assert_eq!(
            err,
            LexError::LoneBang {
                span: Span::new(3, 4)
            }
        );
    }

    #[test]
    fn test_bang_at_end_of_input() {
        assert!(matches!(tokenize("!"), Err(LexError::LoneBang { .. })));
    }

    #[test]
    fn test_underscore_is_rejected() {
        assert!(matches!(
            tokenize("my_var"),
            Err(LexError::UnexpectedCharacter { ch: '_', .. })
        ));
    }
}
