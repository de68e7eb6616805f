//! Shared test utilities
//!
//! Helpers that run source text through the pipeline with captured output.

#![allow(dead_code)]

use quill_runtime::{capture_writer, ErrorKind, Quill, QuillResult};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Outcome of one run: captured stdout plus the pipeline result
pub struct RunOutcome {
    pub stdout: String,
    pub result: QuillResult<Vec<i64>>,
}

/// Run `source` with `inputs`, capturing everything printed
pub fn run_captured(source: &str, inputs: &[i64]) -> RunOutcome {
    let (writer, buffer) = capture_writer();
    let result = Quill::new().with_output(writer).run(source, inputs);
    RunOutcome {
        stdout: buffer.contents(),
        result,
    }
}

/// Assert that `source` runs cleanly and prints exactly `expected`
///
/// # Example
/// ```
/// assert_prints("print(1 + 1);", &[], &[2]);
/// ```
pub fn assert_prints(source: &str, inputs: &[i64], expected: &[i64]) {
    let outcome = run_captured(source, inputs);
    match outcome.result {
        Ok(printed) => assert_eq!(printed, expected, "source: {}", source),
        Err(e) => panic!("Expected success for {:?}, got error: {}", source, e),
    }
}

/// Assert that `source` fails with the given error kind
pub fn assert_error_kind(source: &str, inputs: &[i64], expected: ErrorKind) {
    match run_captured(source, inputs).result {
        Err(e) => assert_eq!(e.kind(), expected, "error was: {}", e),
        Ok(printed) => panic!(
            "Expected {} error for {:?}, but it printed {:?}",
            expected, source, printed
        ),
    }
}
