//! Walks the task list one file at a time.

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::{
    catalog::DownloadTask,
    download::{FetchOutcome, Fetcher},
    report::RunReport,
};

/// Fetches every task in order, skipping files that already exist.
///
/// A failed task is recorded and the run carries on with the next one.
pub async fn run<I>(fetcher: &dyn Fetcher, tasks: I, progress_bar: &ProgressBar) -> RunReport
where
    I: IntoIterator<Item = DownloadTask>,
{
    let mut report = RunReport::default();

    for task in tasks {
        progress_bar.set_message(format!("{} {}", task.variable, task.year));

        let result = fetcher.fetch(&task.url, &task.destination, true).await;
        match &result {
            Ok(FetchOutcome::Downloaded { bytes }) => {
                debug!(year = task.year, variable = %task.variable, bytes, "downloaded")
            }
            Ok(FetchOutcome::Skipped) => {}
            // Log lines share stderr with the bars.
            Err(e) => progress_bar.suspend(|| {
                warn!(year = task.year, variable = %task.variable, url = %task.url, "fetch failed: {}", e)
            }),
        }
        report.record(task, result);
        progress_bar.inc(1);
    }

    report
}

// -- Tests -------------------------------------------------------------------
