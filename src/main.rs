//! ldgen - detect page entities and generate schema.org JSON-LD

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ldgen::cli::{Cli, Commands};
use ldgen::error::Result;

mod commands;
mod utils;

fn main() {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("\n{}", hint);
            }
            std::process::exit(1);
        }
    }
}

/// Run the selected command, returning the process exit code
fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { file, explain, json } => {
            commands::cmd_detect(file.as_deref(), explain, json).map(|_| 0)
        }
        Commands::Generate { file, url, eeat, modified_today } => {
            commands::cmd_generate(file.as_deref(), url.as_deref(), eeat.as_deref(), modified_today)
                .map(|_| 0)
        }
        Commands::Validate { file, json } => commands::cmd_validate(file.as_deref(), json),
        Commands::Howto { title, file, total_time, url, supplies, tools } => {
            commands::cmd_howto(&title, file.as_deref(), total_time, url, supplies, tools).map(|_| 0)
        }
        Commands::Person { name, job_title, linkedin, twitter, url, works_for } => {
            commands::cmd_person(&name, job_title, linkedin, twitter, url, works_for).map(|_| 0)
        }
        Commands::Hash { file } => commands::cmd_hash(file.as_deref()).map(|_| 0),
        Commands::Completions { shell } => commands::cmd_completions(shell).map(|_| 0),
    }
}
