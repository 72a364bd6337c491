//! `balie-ner` CLI - find named entities in a text file with Balie

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use balie_ner::NerError;

mod cmd;

#[derive(Parser)]
#[command(name = "balie-ner")]
#[command(about = "Find named entities with the Balie recognizer")]
#[command(version)]
struct Cli {
    /// Path to input file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to output file. Writes to STDOUT if no file is given.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the entity tuples
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cmd::cmd_chunk(cli.input.as_deref(), cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<NerError>())
        .map_or(1, NerError::exit_code)
}
