//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::cli::{Args, ReportFormat};
use chatlens::output::{render_report, to_csv, to_json};
use chatlens::{ChatlensError, Session};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        if e.is_empty_input() {
            eprintln!("Error: nothing to analyze ({})", e);
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CHATLENS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();
    let analysis_config = args.analysis_config()?;

    let bytes = fs::read(&args.input)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ChatlensError::utf8(format!("reading {}", args.input), e))?;

    let session =
        Session::from_text_with(&text, args.parser_config())?.with_config(analysis_config);

    tracing::info!(
        input = %args.input,
        records = session.transcript().len(),
        selection = %session.config().filter,
        format = %args.format,
        "analyzing chat"
    );

    let rendered = match args.format {
        ReportFormat::Text => render_report(&session.analyze()?),
        ReportFormat::Json => to_json(&session.analyze()?)?,
        ReportFormat::Csv => to_csv(&session.view(args.full_view))?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("Output saved to {}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
