//! Download every selected file into the output directory.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use indicatif::MultiProgress;
use tracing::info;

use crate::{
    catalog::tasks,
    cli::{create_progress_bar, FetcherKind, Selection},
    download::{Fetcher, HttpFetcher, WgetFetcher},
    orchestrator,
    report::RunReport,
};

pub async fn fetch(selection: &Selection, kind: FetcherKind, create_dir: bool) -> Result<RunReport> {
    let range = selection.year_range()?;
    let variables = selection.variables();
    prepare_output_dir(&selection.output_dir, create_dir)?;

    let total = (range.len() * variables.len()) as u64;
    let multi = MultiProgress::new();
    let bar = multi.add(create_progress_bar(total, "Fetching".to_string()));

    let fetcher: Box<dyn Fetcher> = match kind {
        FetcherKind::Http => Box::new(HttpFetcher::new()?.with_progress(multi.clone())),
        FetcherKind::Wget => Box::new(WgetFetcher::default()),
    };

    info!(
        years = ?range.years(),
        files = total,
        output_dir = %selection.output_dir.display(),
        fetcher = ?kind,
        "starting fetch"
    );
    let report = orchestrator::run(
        fetcher.as_ref(),
        tasks(range, &variables, &selection.output_dir),
        &bar,
    )
    .await;
    bar.finish_with_message("Fetch complete");

    Ok(report)
}

fn prepare_output_dir(dir: &Path, create: bool) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        bail!("`{}` exists but is not a directory", dir.display());
    }
    if !create {
        bail!(
            "output directory `{}` does not exist (pass --create-dir to create it)",
            dir.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create `{}`", dir.display()))?;
    info!(output_dir = %dir.display(), "created output directory");

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_accept_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(prepare_output_dir(temp_dir.path(), false).is_ok());
    }

    #[test]
    fn should_reject_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("20CR_v3");

        let err = prepare_output_dir(&dir, false).unwrap_err();
        assert!(err.to_string().contains("--create-dir"));
        assert!(!dir.exists());
    }

    #[test]
    fn should_create_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("scratch").join("20CR_v3");

        prepare_output_dir(&dir, true).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn should_reject_file_as_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, b"").unwrap();

        assert!(prepare_output_dir(&file, true).is_err());
    }
}
