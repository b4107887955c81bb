use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use worlds_patcher::{logging, patch_file, report, PatchOptions, DEFAULT_TARGET};

#[derive(Parser)]
#[command(name = "worlds-patcher")]
#[command(about = "Move the home world of worlds.js onto the background cache", long_about = None)]
#[command(version)]
struct Cli {
    /// File to patch in place
    #[arg(default_value = DEFAULT_TARGET)]
    file: PathBuf,

    /// Dry run - run every step without modifying the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of changes
    #[arg(short, long)]
    diff: bool,

    /// Log the outcome of every step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = PatchOptions {
        dry_run: cli.dry_run,
    };

    let result = patch_file(&cli.file, options)
        .with_context(|| format!("could not patch {}", cli.file.display()))?;

    debug!(
        file = %cli.file.display(),
        changed = result.changed(),
        dry_run = cli.dry_run,
        "patch finished"
    );

    report::print_banner()?;

    if cli.diff && result.changed() {
        report::print_diff(&cli.file, &result.original, &result.content)?;
    }

    Ok(())
}
