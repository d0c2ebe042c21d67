//! os6-trigger-beta: queue a oneSafe 6 beta build on TeamCity
//!
//! Loads the checked-in build request template, points it at the
//! requested branch, and posts it to the build queue with
//! queue-priority promotion. Run from the directory holding the
//! template.

use clap::Parser;
use os6_api_client::payload::{self, BETA_PAYLOAD_FILE};
use os6_api_client::teamcity::TeamCityClient;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process::ExitCode;

/// Queue a beta build on TeamCity
#[derive(Parser)]
#[command(name = "os6-trigger-beta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TeamCity server URL
    #[arg(long)]
    server: String,

    /// TeamCity bearer token
    #[arg(long)]
    token: String,

    /// Branch to build
    #[arg(long)]
    branch: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("os6_api_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli.server, &cli.token, &cli.branch).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(server: &str, token: &str, branch: &str) -> anyhow::Result<()> {
    let template = payload::load(Path::new(BETA_PAYLOAD_FILE))?;
    let request = payload::with_branch(&template, branch)?;

    let client = TeamCityClient::new(server, token)?;
    let response = client.queue_build(&request).await?;

    if response.is_success() {
        println!(
            "{} Beta build queued for {} ({})",
            "✓".green(),
            branch.green().bold(),
            response.status
        );
    } else {
        println!(
            "{} TeamCity answered {} for {}",
            "⚠".yellow(),
            response.status,
            branch.yellow().bold()
        );
    }
    println!("{}", response.body_pretty());

    Ok(())
}
