use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::process::ExitCode;

mod commands;
mod config;

/// Quill language interpreter.
///
/// Quill is a tiny integer language: assignments, print, input and
/// if/then/endif, evaluated strictly left to right with no operator
/// precedence.
///
/// EXAMPLES:
///     quill run main.ql                    Run a program
///     quill run main.ql --input values     Run with input values
///     quill check main.ql                  Lex and parse without running
///     quill ast main.ql                    Dump the AST as JSON
///
/// ENVIRONMENT VARIABLES:
///     QUILL_DIAGNOSTICS  Set to 'json' for JSON diagnostics by default
///     QUILL_SOURCE       Override run.source from quill.toml
///     QUILL_INPUT        Override run.input from quill.toml
///     QUILL_NO_COLOR     Set to disable colored output
///     NO_COLOR           Set to disable colored output
#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Quill source file
    ///
    /// Without FILE, runs run.source from quill.toml, or test.code in the
    /// current directory. Input values are read one per line from --input,
    /// run.input, or test.input (skipped if absent).
    ///
    /// EXAMPLES:
    ///     quill run                            Run test.code with test.input
    ///     quill run main.ql --input nums.txt   Run with explicit input values
    ///     quill run main.ql --json             Output diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Quill source file
        file: Option<String>,
        /// File with one integer input value per line
        #[arg(long, short = 'i')]
        input: Option<String>,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
        /// Report per-phase timing on stderr
        #[arg(long, short = 'v')]
        verbose: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Lex and parse a Quill source file without running it
    ///
    /// EXAMPLES:
    ///     quill check main.ql         Check for errors
    ///     quill check main.ql --json  Output as JSON
    #[command(visible_alias = "c")]
    Check {
        /// Path to the Quill source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Dump the token stream as JSON
    Tokens {
        /// Path to the Quill source file
        file: String,
    },

    /// Dump the AST as JSON
    Ast {
        /// Path to the Quill source file
        file: String,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     quill completions bash > /etc/bash_completion.d/quill
    ///     quill completions zsh > ~/.zfunc/_quill
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    match run_cli(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        // The diagnostic is already on stderr
        Err(e) if e.is::<commands::Reported>() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let cli_config = config::Config::from_env();

    if cli_config.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run {
            file,
            input,
            json,
            verbose,
            no_color,
        } => {
            if no_color {
                colored::control::set_override(false);
            }

            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let settings = quill_config::ConfigLoader::new()
                .load_from_directory(&cwd)
                .context("Failed to load quill.toml")?;

            let options = commands::run::RunOptions {
                file,
                input,
                // Command-line flag overrides environment variable
                json: json || cli_config.default_json,
                verbose,
            };
            commands::run::run(&options, Some(&settings))?;
        }
        Commands::Check { file, json } => {
            commands::check::run(&file, json || cli_config.default_json)?;
        }
        Commands::Tokens { file } => {
            commands::tokens::run(&file)?;
        }
        Commands::Ast { file } => {
            commands::ast::run(&file)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
