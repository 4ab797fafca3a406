//! cfpl - command-line host for the interpreter.
//!
//! Thin plumbing around [`cfpl_drv::Interpreter`]: read a source file,
//! run it with the given input string, print the output or the error.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfpl_drv::Interpreter;

/// Run a CFPL program.
#[derive(Parser)]
#[command(name = "cfpl", version, about)]
struct Cli {
    /// Path to the CFPL source file
    program: PathBuf,

    /// Comma-separated values consumed by INPUT statements
    #[arg(long, default_value = "")]
    input: String,

    /// Print the final variable environment after a successful run
    #[arg(long)]
    variables: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let source = fs::read_to_string(&cli.program)
        .with_context(|| format!("failed to read {}", cli.program.display()))?;

    let mut interpreter = Interpreter::new();
    match interpreter.run(&source, &cli.input) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            if cli.variables {
                for (name, value) in interpreter.get_variables() {
                    println!("{name} = {value}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
