//! Token dump command - output the token stream as JSON

use anyhow::Result;
use quill_runtime::{tokenize, Error};

/// Dump tokens to JSON
///
/// The array always ends with the end-of-input token.
pub fn run(file_path: &str) -> Result<()> {
    let source = super::read_source(file_path)?;

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            return Err(super::report(&Error::from(e), &source, file_path, true, "tokenize"));
        }
    };

    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}
