//! os6-loco-delete: clear the auto-translated Loco entries of one asset
//!
//! Machine-translated entries go stale when the source copy changes.
//! This deletes them for every auto-translated locale so the next
//! translation pass refills the asset from scratch.

use clap::Parser;
use os6_api_client::credentials;
use os6_api_client::loco::{AUTO_TRANSLATED_LOCALES, LOCO_API_KEY_ENV, LocoClient};
use owo_colors::OwoColorize;
use std::process::ExitCode;

/// Delete the auto-translated locales of one Loco asset
#[derive(Parser)]
#[command(name = "os6-loco-delete")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Loco asset id to clear
    #[arg(long)]
    id: String,

    /// Loco API key (falls back to LOCO_OS6_API_KEY)
    #[arg(long)]
    key: Option<String>,

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

    match run(&cli.id, cli.key).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(id: &str, key: Option<String>) -> anyhow::Result<()> {
    let api_key = credentials::resolve(key, LOCO_API_KEY_ENV)?;
    let client = LocoClient::new(api_key)?;

    println!("Deleting auto-translated locales of {}", id.cyan().bold());

    for locale in AUTO_TRANSLATED_LOCALES {
        let response = client.delete_translation(id, locale).await?;

        if response.is_success() {
            println!("{} {} ({})", "✓".green(), locale.green().bold(), response.status);
        } else {
            println!("{} {} ({})", "⚠".yellow(), locale.yellow().bold(), response.status);
        }
        println!("{}", response.body_pretty());
    }

    Ok(())
}
