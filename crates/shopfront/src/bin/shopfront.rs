// ABOUTME: CLI binary for the shopfront product page extractor.
// ABOUTME: Reads an HTML file (or stdin), extracts the product record and prints it as JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use shopfront::Extractor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Extract structured product data from a saved product page")]
struct Args {
    /// HTML file to read (default: stdin)
    #[arg()]
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long = "compact")]
    compact: bool,

    /// Base URL for resolving relative image sources
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut builder = Extractor::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url)?;
    }
    let extractor = builder.build();

    let html = read_input(args.input.as_ref())?;
    let start = Instant::now();
    let result = extractor.extract_html(&html);
    let elapsed = start.elapsed();
    tracing::info!(
        reviews = result.reviews.len(),
        suggested = result.suggested.len(),
        "extraction finished"
    );

    let json = result.to_json(!args.compact)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?
        }
        None => println!("{}", json),
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
