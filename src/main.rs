use anyhow::Result;
use clap::Parser;
use colored::*;
use npm_blame_rs::analyzer::Blamer;
use npm_blame_rs::report::{to_json, BlameReport};
use rayon::prelude::*;
use std::path::PathBuf;

/// Blames the packages of a `node_modules` tree for shipping files nobody
/// needs at runtime.
///
/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dependency trees to scan, usually `node_modules` directories.
    /// Each tree is scanned independently and gets its own report.
    /// Defaults to the current directory.
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Also blame packages for shipping `.jsx` and `.ts` sources.
    /// Adds the HAS_JSX and HAS_TS columns to the report.
    #[arg(long)]
    sources: bool,

    /// List packages without issues too.
    #[arg(long)]
    all: bool,

    /// Output raw JSON.
    /// Always an array with one report per scanned tree, even when a single
    /// path is given, so the output can be consumed by other tools.
    #[arg(long)]
    json: bool,

    /// Log every scanned entry to stderr at debug level.
    /// `RUST_LOG` takes precedence over this flag.
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point of the application.
///
/// Parses the arguments, scans every requested tree and prints the reports
/// either as tables or as JSON.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so it never mixes with the report on stdout.
    npm_blame_rs::logging::init(cli.verbose);

    let blamer = Blamer::new(cli.sources);

    // Every tree gets its own store, so trees can be walked in parallel.
    // The first tree that fails to be read aborts the whole run.
    let reports = cli
        .paths
        .par_iter()
        .map(|path| -> Result<BlameReport> {
            let store = blamer.analyze(path)?;
            Ok(BlameReport::from_store(path, &store, cli.all))
        })
        .collect::<Result<Vec<_>>>()?;

    if cli.json {
        println!("{}", to_json(&reports)?);
        return Ok(());
    }

    // Human-readable tables, headed by the tree path when several were scanned.
    for report in &reports {
        if reports.len() > 1 {
            println!("{}", report.root.display().to_string().bold());
        }
        println!("{}", report.render());
    }

    Ok(())
}
