//! Check command - lex and parse Quill source files without executing

use anyhow::Result;
use quill_runtime::{parse_source, Program};

/// Check that a source file lexes and parses
///
/// Nothing is executed, so `input(...)` and unbound variables are not
/// reported here.
pub fn run(file_path: &str, json: bool) -> Result<()> {
    let source = super::read_source(file_path)?;

    match parse_source(&source) {
        Ok(program) => {
            print_success(file_path, &program, json);
            Ok(())
        }
        Err(e) => Err(super::report(&e, &source, file_path, json, "check")),
    }
}

fn print_success(file_path: &str, program: &Program, json: bool) {
    if json {
        let summary = serde_json::json!({
            "file": file_path,
            "ok": true,
            "statements": program.statements.len(),
        });
        println!("{}", summary);
    } else {
        println!("{}: OK ({} statements)", file_path, program.statements.len());
    }
}
