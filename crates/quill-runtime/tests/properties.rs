//! Property tests over generated programs and characters

use proptest::prelude::*;
use quill_runtime::ast::BinaryOp;
use quill_runtime::interpreter::apply_binary;
use quill_runtime::token::TokenKind;
use quill_runtime::{capture_writer, tokenize, ErrorKind, LexError, Quill};

// ============================================================================
// Program generators
// ============================================================================

const OPERATORS: &[&str] = &["+", "-", "*", "==", "!=", "<", "<=", ">", ">="];

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,5}".prop_filter("keywords are not identifiers", |s| {
        TokenKind::is_keyword(s).is_none()
    })
}

fn number() -> impl Strategy<Value = String> {
    (0i64..1_000_000).prop_map(|n| n.to_string())
}

fn expression() -> impl Strategy<Value = String> {
    let primary = prop_oneof![identifier(), number()];
    primary.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("({})", e)),
            (
                inner.clone(),
                prop::collection::vec((prop::sample::select(OPERATORS), inner), 1..4)
            )
                .prop_map(|(first, rest)| {
                    let mut out = first;
                    for (op, operand) in rest {
                        out.push_str(&format!(" {} {}", op, operand));
                    }
                    out
                }),
        ]
    })
}

fn statement(expr: BoxedStrategy<String>, allow_input: bool) -> impl Strategy<Value = String> {
    let simple = if allow_input {
        prop_oneof![
            (identifier(), expr.clone()).prop_map(|(id, e)| format!("{} = {};", id, e)),
            expr.clone().prop_map(|e| format!("print({});", e)),
            identifier().prop_map(|id| format!("input({});", id)),
        ]
        .boxed()
    } else {
        prop_oneof![
            (identifier(), expr.clone()).prop_map(|(id, e)| format!("{} = {};", id, e)),
            expr.clone().prop_map(|e| format!("print({});", e)),
        ]
        .boxed()
    };

    simple.prop_recursive(3, 16, 4, move |inner| {
        (expr.clone(), prop::collection::vec(inner, 0..4)).prop_map(|(cond, body)| {
            format!("if {} then {} endif;", cond, body.join(" "))
        })
    })
}

fn program(allow_input: bool) -> impl Strategy<Value = String> {
    prop::collection::vec(statement(expression().boxed(), allow_input), 0..8)
        .prop_map(|stmts| stmts.join("\n"))
}

/// Programs that only use `x`, so every read after the first assignment is bound
fn bound_program() -> impl Strategy<Value = String> {
    let expr = "[0-9]{1,3}|x".prop_map(|s| s.to_string());
    prop::collection::vec(
        prop_oneof![
            (expr.clone(), prop::sample::select(OPERATORS), expr.clone())
                .prop_map(|(l, op, r)| format!("x = {} {} {};", l, op, r)),
            expr.prop_map(|e| format!("print({});", e)),
        ],
        0..10,
    )
    .prop_map(|stmts| format!("x = 1; {}", stmts.join(" ")))
}

fn run(source: &str, inputs: &[i64]) -> (String, Result<Vec<i64>, ErrorKind>) {
    let (writer, buffer) = capture_writer();
    let result = Quill::new()
        .with_output(writer)
        .run(source, inputs)
        .map_err(|e| e.kind());
    (buffer.contents(), result)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn generated_programs_always_parse(source in program(true)) {
        let result = quill_runtime::parse_source(&source);
        prop_assert!(result.is_ok(), "{:?} failed: {:?}", source, result.err());
    }

    #[test]
    fn no_input_programs_are_deterministic(source in program(false)) {
        let first = run(&source, &[]);
        let second = run(&source, &[]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bound_programs_run_to_completion(source in bound_program()) {
        let (stdout, result) = run(&source, &[]);
        let printed = result.map_err(|k| TestCaseError::fail(format!("{}: {}", source, k)))?;
        let lines: Vec<String> = printed.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(stdout.lines().map(String::from).collect::<Vec<_>>(), lines);
    }

    #[test]
    fn assign_then_print_echoes_value(name in identifier(), value in 0i64..=i64::MAX) {
        let source = format!("{} = {}; print({});", name, value, name);
        prop_assert_eq!(run(&source, &[]).1, Ok(vec![value]));
    }

    #[test]
    fn inputs_are_consumed_in_order(a in any::<i64>(), b in any::<i64>()) {
        let (_, result) = run("input(a); input(b); print(a); print(b);", &[a, b]);
        prop_assert_eq!(result, Ok(vec![a, b]));
    }

    #[test]
    fn lexing_single_characters(c in any::<char>()) {
        let in_alphabet = c.is_whitespace()
            || c.is_ascii_alphanumeric()
            || "=<>+-*();".contains(c);
        let result = tokenize(&c.to_string());

        if in_alphabet {
            prop_assert!(result.is_ok(), "{:?} should lex", c);
        } else {
            prop_assert!(
                matches!(
                    result,
                    Err(LexError::UnexpectedCharacter { .. }) | Err(LexError::LoneBang { .. })
                ),
                "{:?} should be a lexical error, got {:?}", c, result
            );
        }
    }

    #[test]
    fn comparisons_agree_with_integers(a in any::<i64>(), b in any::<i64>()) {
        let cases = [
            (BinaryOp::Eq, a == b),
            (BinaryOp::Ne, a != b),
            (BinaryOp::Lt, a < b),
            (BinaryOp::Le, a <= b),
            (BinaryOp::Gt, a > b),
            (BinaryOp::Ge, a >= b),
        ];
        for (op, expected) in cases {
            let value = apply_binary(op, a, b);
            prop_assert!(value == 0 || value == 1);
            prop_assert_eq!(value == 1, expected, "{} {} {}", a, op, b);
        }
    }

    #[test]
    fn comparisons_through_source(a in 0i64..1000, b in 0i64..1000) {
        let source = format!(
            "print({a} == {b}); print({a} != {b}); print({a} < {b}); \
             print({a} <= {b}); print({a} > {b}); print({a} >= {b});",
            a = a,
            b = b
        );
        let expected: Vec<i64> = [a == b, a != b, a < b, a <= b, a > b, a >= b]
            .iter()
            .map(|&t| t as i64)
            .collect();
        prop_assert_eq!(run(&source, &[]).1, Ok(expected));
    }
}
