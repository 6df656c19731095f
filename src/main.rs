use std::{fs, path::PathBuf};

use bantam::{
    errors::errors::{CompilationError, ErrorHandler},
    display_error,
    parser::parser::parse,
    passes::main_method_finder::MainMethodFinder,
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed when no files are given on the command line.
const DEFAULT_TEST_FILE: &str = "tests/fixtures/parser_test.btm";

#[derive(Parser, Debug)]
#[command(name = "bantam")]
#[command(about = "Scan and parse Bantam Java source files")]
struct Cli {
    /// Source files to parse, in order
    files: Vec<PathBuf>,

    /// Log parser activity
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "bantam=debug" } else { "bantam=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let files = if cli.files.is_empty() {
        vec![PathBuf::from(DEFAULT_TEST_FILE)]
    } else {
        cli.files
    };

    let mut handler = ErrorHandler::new();

    for file in files {
        let file_name = file.to_string_lossy().to_string();
        info!("Running file: {}", file_name);
        println!("Running file: {}", file_name);

        let program = match parse(&file_name, &mut handler) {
            Ok(program) => program,
            Err(error) => {
                report(&error, &file_name);
                handler.clear();
                continue;
            }
        };

        handler.clear();
        println!("Scan and Parse Successful");

        if MainMethodFinder::new().has_main(&program) {
            info!("{}: found entry point Main.main", file_name);
        } else {
            warn!("{}: no `void main()` in class Main", file_name);
        }
    }
}

fn report(error: &CompilationError, file: &str) {
    // The source is re-read only to render context lines
    let source = fs::read_to_string(file).unwrap_or_default();

    println!("Compilation error:");
    for diagnostic in error.get_errors() {
        display_error(diagnostic, &source, file);
    }
}
