//! Parser tests
//!
//! Grouping is checked through the fully parenthesized `Display` form of
//! expressions; errors through their rendered messages.

use pretty_assertions::assert_eq;
use quill_runtime::ast::{Expr, Stmt};
use quill_runtime::{
    parse, parse_source, Error, ErrorKind, Program, Span, SyntaxError, Token, TokenKind,
    VersionedProgram, AST_VERSION,
};
use rstest::rstest;

fn parse_ok(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(e) => panic!("Failed to parse {:?}: {}", source, e),
    }
}

fn printed_expr(source: &str) -> String {
    match &parse_ok(source).statements[0] {
        Stmt::Print(p) => p.expression.to_string(),
        other => panic!("Expected print statement, got {:?}", other),
    }
}

fn syntax_message(source: &str) -> String {
    match parse_source(source) {
        Err(Error::Syntax(e)) => e.to_string(),
        other => panic!("Expected syntax error for {:?}, got {:?}", source, other),
    }
}

// ============================================================================
// Expression grouping
// ============================================================================

#[rstest]
#[case("print(1);", "1")]
#[case("print(x);", "x")]
#[case("print(2 + 3 * 4);", "((2 + 3) * 4)")]
#[case("print(2 * 3 + 4);", "((2 * 3) + 4)")]
#[case("print(a - b - c);", "((a - b) - c)")]
#[case("print(1 + 2 > 2);", "((1 + 2) > 2)")]
#[case("print(1 < 2 == 1);", "((1 < 2) == 1)")]
#[case("print(2 * (3 + 4));", "(2 * (3 + 4))")]
#[case("print(((x)));", "x")]
#[case("print((a + b) * (c - d));", "((a + b) * (c - d))")]
fn test_left_to_right_grouping(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(printed_expr(source), expected);
}

#[test]
fn test_statement_kinds_in_order() {
    let program = parse_ok("input(n); x = n * 2; if x > 10 then print(x); endif; print(0);");
    let kinds: Vec<&str> = program
        .statements
        .iter()
        .map(|s| match s {
            Stmt::Assign(_) => "assign",
            Stmt::Print(_) => "print",
            Stmt::Input(_) => "input",
            Stmt::If(_) => "if",
        })
        .collect();
    assert_eq!(kinds, vec!["input", "assign", "if", "print"]);
}

#[test]
fn test_statement_spans_include_semicolon() {
    let program = parse_ok("print(a + 10);\nif a then endif;");
    assert_eq!(program.statements[0].span(), Span::new(0, 14));
    assert_eq!(program.statements[1].span(), Span::new(15, 31));

    match &program.statements[0] {
        Stmt::Print(p) => {
            assert!(matches!(p.expression, Expr::Binary(_)));
            assert_eq!(p.expression.span(), Span::new(6, 12));
        }
        other => panic!("Expected print statement, got {:?}", other),
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

#[rstest]
#[case("x = 1", "Unexpected token end of input, expected ';' after statement")]
#[case("x 1;", "Unexpected token '1', expected '=' after variable name")]
#[case("x = ;", "Unexpected token ';', expected expression")]
#[case("print 1;", "Unexpected token '1', expected '(' after 'print'")]
#[case("print(1;", "Unexpected token ';', expected ')'")]
#[case("input(1);", "Unexpected token '1', expected identifier")]
#[case("input();", "Unexpected token ')', expected identifier")]
#[case("if x print(1); endif;", "Unexpected token 'print', expected 'then' after condition")]
#[case("if x then print(1);", "Unexpected token end of input, expected statement")]
#[case("if x then print(1); endif", "Unexpected token end of input, expected ';' after 'endif'")]
#[case("endif;", "Unexpected token 'endif', expected statement")]
#[case("then;", "Unexpected token 'then', expected statement")]
#[case(";", "Unexpected token ';', expected statement")]
#[case("print((1);", "Unexpected token ';', expected ')' after expression")]
#[case("x = 1 + ;", "Unexpected token ';', expected expression")]
#[case("x = print;", "Unexpected token 'print', expected expression")]
fn test_syntax_error_messages(#[case] source: &str, #[case] message: &str) {
    assert_eq!(syntax_message(source), message);
}

#[test]
fn test_error_span_points_at_offending_token() {
    match parse_source("x = 1;\nprint 2;") {
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::Syntax);
            assert_eq!(e.code(), "QL2001");
            assert_eq!(e.span(), Span::new(13, 14));
        }
        Ok(_) => panic!("Expected syntax error"),
    }
}

#[test]
fn test_no_partial_tree_on_error() {
    // The first two statements are valid, but the whole parse fails
    assert!(parse_source("x = 1; print(x); print(").is_err());
}

#[test]
fn test_unknown_operator_is_internal() {
    let tokens = vec![
        Token::new(TokenKind::Print, "print", Span::new(0, 5)),
        Token::new(TokenKind::LeftParen, "(", Span::new(5, 6)),
        Token::new(TokenKind::Number, "6", Span::new(6, 7)),
        Token::new(TokenKind::ArithOp, "/", Span::new(7, 8)),
        Token::new(TokenKind::Number, "2", Span::new(8, 9)),
        Token::new(TokenKind::RightParen, ")", Span::new(9, 10)),
        Token::new(TokenKind::Semicolon, ";", Span::new(10, 11)),
        Token::new(TokenKind::Eof, "", Span::new(11, 11)),
    ];
    let err = parse(tokens).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnknownOperator {
            op: "/".to_string(),
            span: Span::new(7, 8),
        }
    );
    assert_eq!(err.kind(), ErrorKind::Internal);
}

// ============================================================================
// AST JSON dump
// ============================================================================

#[test]
fn test_versioned_ast_json() {
    let program = parse_ok("x = 1 + 2;");
    let versioned = VersionedProgram::from(program.clone());
    let json = versioned.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ast_version"], AST_VERSION);
    assert_eq!(value["statements"][0]["Assign"]["identifier"]["name"], "x");
    assert_eq!(
        value["statements"][0]["Assign"]["expression"]["Binary"]["op"],
        "+"
    );

    let back = VersionedProgram::from_json(&json).unwrap();
    assert_eq!(back.program, program);
}
