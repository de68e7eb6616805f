//! AST dump command - output AST as JSON

use anyhow::Result;
use quill_runtime::{parse_source, VersionedProgram};

/// Dump AST to JSON
///
/// Parses the source file and outputs the versioned AST as JSON to stdout.
/// Failures are reported as JSON diagnostics on stderr.
pub fn run(file_path: &str) -> Result<()> {
    let source = super::read_source(file_path)?;

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(e) => return Err(super::report(&e, &source, file_path, true, "parse")),
    };

    let json = VersionedProgram::new(program).to_json()?;
    println!("{}", json);

    Ok(())
}
