pub mod ast;
pub mod check;
pub mod run;
pub mod tokens;

use anyhow::{Context, Result};
use colored::Colorize;
use quill_runtime::{Diagnostic, Error};
use std::fmt;
use std::fs;

/// A failure whose diagnostic has already been written to stderr
///
/// `main` exits non-zero on this error without printing it again.
#[derive(Debug)]
pub struct Reported {
    pub action: &'static str,
    pub file: String,
}

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {} {}", self.action, self.file)
    }
}

impl std::error::Error for Reported {}

/// Read a source file, naming it in the error
pub(crate) fn read_source(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))
}

/// Print the diagnostic for `error` to stderr and return the matching
/// [`Reported`] failure
pub(crate) fn report(
    error: &Error,
    source: &str,
    file_path: &str,
    json: bool,
    action: &'static str,
) -> anyhow::Error {
    let diag = Diagnostic::from_error(error, source).with_file(file_path);
    if json {
        match diag.to_json_string() {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprint!("{}", diag.to_human_string()),
        }
    } else {
        eprint!("{}", colorize(&diag.to_human_string()));
    }

    anyhow::Error::new(Reported {
        action,
        file: file_path.to_string(),
    })
}

/// Color the header, location arrow, carets and help line
///
/// `colored` decides whether escapes are emitted at all.
fn colorize(human: &str) -> String {
    let mut out = String::new();
    for line in human.lines() {
        let styled = if let Some(rest) = line.strip_prefix("error") {
            format!("{}{}", "error".red().bold(), rest.bold())
        } else if let Some(rest) = line.strip_prefix("  -->") {
            format!("  {}{}", "-->".blue().bold(), rest)
        } else if line.starts_with("   |") && line.contains('^') {
            line.red().to_string()
        } else if let Some(rest) = line.strip_prefix("   = help:") {
            format!("   {}{}", "= help:".cyan().bold(), rest)
        } else {
            line.to_string()
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}
