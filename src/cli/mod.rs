//! Command line interface.

pub mod command;

use std::path::PathBuf;

use clap::{command, Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Variable, DEFAULT_OUTPUT_DIR, END_YEAR, FIRST_YEAR};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the daily files, skipping any already on disk
    Fetch {
        #[command(flatten)]
        selection: Selection,
        /// How to download each file
        #[arg(long, value_enum, default_value_t = FetcherKind::Http)]
        fetcher: FetcherKind,
        /// Create the output directory if it does not exist
        #[arg(long)]
        create_dir: bool,
    },
    /// Print each URL and destination without downloading
    List {
        #[command(flatten)]
        selection: Selection,
    },
}

#[derive(Args, Debug, Clone)]
/// Which files to work on
pub struct Selection {
    /// Directory the files are saved in
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
    /// First year to fetch
    #[arg(long, default_value_t = FIRST_YEAR)]
    pub start_year: u16,
    /// Year to stop at (not fetched)
    #[arg(long, default_value_t = END_YEAR)]
    pub end_year: u16,
    /// Only fetch these variables (hgt, uwnd, olr, psfc, t2m, skint)
    #[arg(long = "variable", value_name = "NAME")]
    pub variables: Vec<Variable>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherKind {
    /// Built-in HTTP client
    Http,
    /// External wget tool
    Wget,
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}

/// Creates a progress bar measured in bytes.
pub fn create_byte_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}")
            .unwrap()
            .progress_chars("=> "),
    )
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn should_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_default_to_full_catalog() {
        let cli = Cli::try_parse_from(["twcr", "fetch"]).unwrap();
        let Commands::Fetch {
            selection,
            fetcher,
            create_dir,
        } = cli.command
        else {
            panic!("expected fetch");
        };

        assert_eq!(selection.output_dir, PathBuf::from("/home/scratch/20CR_v3"));
        assert_eq!(selection.start_year, 1836);
        assert_eq!(selection.end_year, 2016);
        assert!(selection.variables.is_empty());
        assert_eq!(fetcher, FetcherKind::Http);
        assert!(!create_dir);
    }

    #[test]
    fn should_parse_variables_and_fetcher() {
        let cli = Cli::try_parse_from([
            "twcr",
            "fetch",
            "--fetcher",
            "wget",
            "--variable",
            "olr",
            "--variable",
            "t2m",
            "--start-year",
            "1979",
        ])
        .unwrap();
        let Commands::Fetch {
            selection, fetcher, ..
        } = cli.command
        else {
            panic!("expected fetch");
        };

        assert_eq!(fetcher, FetcherKind::Wget);
        assert_eq!(
            selection.variables,
            vec![Variable::OutgoingLongwave, Variable::AirTemperature2m]
        );
        assert_eq!(selection.start_year, 1979);
    }

    #[test]
    fn should_reject_unknown_variable() {
        assert!(Cli::try_parse_from(["twcr", "list", "--variable", "vwnd"]).is_err());
    }
}
