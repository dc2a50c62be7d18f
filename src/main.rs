mod catalog;
mod cli;
mod download;
mod logging;
mod orchestrator;
mod report;

use std::process::ExitCode;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode, Error> {
    logging::init();
    let cli = Cli::parse();

    let code = match &cli.command {
        Commands::Fetch {
            selection,
            fetcher,
            create_dir,
        } => match command::fetch(selection, *fetcher, *create_dir).await {
            Ok(report) => {
                println!("{}", report.summary());
                for failed in &report.failed {
                    eprintln!(
                        "Failed: {} {} ({}): {}",
                        failed.task.variable.description(),
                        failed.task.year,
                        failed.task.url,
                        failed.error
                    );
                }
                if report.is_success() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        Commands::List { selection } => match command::list(selection) {
            Ok(count) => {
                eprintln!("{} files", count);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    };

    Ok(code)
}
