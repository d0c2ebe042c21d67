//! os6-set-seed: pin the shared JVM test seed before a CI run
//!
//! Swaps the `Random.nextInt()` initializer in `OSTestUtils.kt` for a
//! literal value and prints it, so a failing run can be replayed with
//! the same sequence. Run from the root of the Android checkout.

use clap::Parser;
use os6_seed::{OS_TEST_UTILS_PATH, PatchOutcome, pin_seed, random_seed};
use owo_colors::OwoColorize;
use std::path::Path;
use std::process::ExitCode;

/// Pin the oneSafe 6 test seed
#[derive(Parser)]
#[command(name = "os6-set-seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed to pin (drawn at random when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<i16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("os6_seed=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(seed: Option<i16>) -> anyhow::Result<()> {
    let seed = match seed {
        Some(value) => value,
        None => random_seed()?,
    };

    let outcome = pin_seed(Path::new(OS_TEST_UTILS_PATH), seed)?;

    println!("Test seed set to {}", seed.cyan().bold());
    if outcome == PatchOutcome::Pinned {
        println!("{} {}", "✓".green(), OS_TEST_UTILS_PATH);
    }

    Ok(())
}
