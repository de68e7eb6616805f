//! Run command - execute Quill source files

use anyhow::{bail, Context, Result};
use quill_config::Config as ProjectSettings;
use quill_runtime::{Error, Interpreter, Lexer, Parser};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Source file used when neither the command line nor quill.toml names one
pub const DEFAULT_SOURCE: &str = "test.code";
/// Input file used when neither the command line nor quill.toml names one
pub const DEFAULT_INPUT: &str = "test.input";

/// Options for `quill run`
#[derive(Debug, Default)]
pub struct RunOptions {
    pub file: Option<String>,
    pub input: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// Where the program and its input values come from
#[derive(Debug, PartialEq)]
pub struct RunPlan {
    pub source: PathBuf,
    pub input: PathBuf,
    /// A missing input file is an error only when someone asked for it
    pub input_required: bool,
}

impl RunPlan {
    /// Command line first, then project settings, then the defaults
    pub fn resolve(options: &RunOptions, settings: Option<&ProjectSettings>) -> Self {
        let source = options
            .file
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| settings.and_then(|s| s.source_path()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

        let requested = options
            .input
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| settings.and_then(|s| s.input_path()));

        match requested {
            Some(input) => Self {
                source,
                input,
                input_required: true,
            },
            None => Self {
                source,
                input: PathBuf::from(DEFAULT_INPUT),
                input_required: false,
            },
        }
    }
}

/// Run a Quill program
///
/// Printed values go to stdout, one per line. Any failure prints a
/// diagnostic to stderr and returns an error.
pub fn run(options: &RunOptions, settings: Option<&ProjectSettings>) -> Result<()> {
    let plan = RunPlan::resolve(options, settings);
    let file_path = plan.source.display().to_string();

    let source = super::read_source(&file_path)?;
    let inputs = load_inputs(&plan.input, plan.input_required)?;

    let timer = Instant::now();
    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => return fail(Error::from(e), &source, &file_path, options.json),
    };
    if options.verbose {
        eprintln!("[lex]       {} tokens in {:.2?}", tokens.len(), timer.elapsed());
    }

    let timer = Instant::now();
    let program = match Parser::new(tokens).parse() {
        Ok(program) => program,
        Err(e) => return fail(Error::from(e), &source, &file_path, options.json),
    };
    if options.verbose {
        eprintln!(
            "[parse]     {} statements in {:.2?}",
            program.statements.len(),
            timer.elapsed()
        );
    }

    let timer = Instant::now();
    let mut interpreter = Interpreter::new(inputs);
    let outcome = interpreter.eval(&program);
    if options.verbose {
        eprintln!(
            "[interpret] {} printed, {} inputs read in {:.2?}",
            interpreter.printed().len(),
            interpreter.inputs_consumed(),
            timer.elapsed()
        );
    }

    match outcome {
        Ok(()) => Ok(()),
        Err(e) => fail(Error::from(e), &source, &file_path, options.json),
    }
}

fn fail(error: Error, source: &str, file_path: &str, json: bool) -> Result<()> {
    Err(super::report(&error, source, file_path, json, "run"))
}

/// Read input values from `path`
///
/// A missing file yields no values unless `required` is set.
pub fn load_inputs(path: &Path, required: bool) -> Result<Vec<i64>> {
    if !required && !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_inputs(&text).with_context(|| format!("Invalid input file: {}", path.display()))
}

/// One integer per line; surrounding whitespace and blank lines are ignored
pub fn parse_inputs(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => bail!("line {}: '{}' is not an integer", index + 1, line),
        }
    }
    Ok(values)
}
