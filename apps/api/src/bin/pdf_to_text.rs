//! Prints the text of a PDF to stdout.
//!
//! Usage: pdf-to-text <pdf_path>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_ner::convert::extract_pdf_text;

#[derive(Debug, Parser)]
#[command(name = "pdf-to-text", version, about = "Extract the text of a PDF to stdout")]
struct Cli {
    /// PDF file to read
    pdf_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and succeed.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match extract_pdf_text(&cli.pdf_path) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
