//! Tally of what a fetch run did.

use crate::{
    catalog::DownloadTask,
    download::{FetchError, FetchOutcome},
};

#[derive(Debug)]
pub struct FailedTask {
    pub task: DownloadTask,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub downloaded: usize,
    pub bytes: u64,
    pub skipped: usize,
    pub failed: Vec<FailedTask>,
}

impl RunReport {
    pub fn record(&mut self, task: DownloadTask, result: Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Downloaded { bytes }) => {
                self.downloaded += 1;
                self.bytes += bytes;
            }
            Ok(FetchOutcome::Skipped) => self.skipped += 1,
            Err(e) => self.failed.push(FailedTask {
                task,
                error: e.to_string(),
            }),
        }
    }

    pub fn attempted(&self) -> usize {
        self.downloaded + self.skipped + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} files: {} downloaded ({}), {} already present, {} failed",
            self.attempted(),
            self.downloaded,
            indicatif::HumanBytes(self.bytes),
            self.skipped,
            self.failed.len()
        )
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use std::path::Path;

    use super::*;
    use crate::catalog::Variable;

    fn task() -> DownloadTask {
        DownloadTask::new(1900, Variable::SurfacePressure, Path::new("/tmp"))
    }

    #[test]
    fn should_tally_outcomes() {
        let mut report = RunReport::default();
        report.record(task(), Ok(FetchOutcome::Downloaded { bytes: 1024 }));
        report.record(task(), Ok(FetchOutcome::Downloaded { bytes: 1024 }));
        report.record(task(), Ok(FetchOutcome::Skipped));
        report.record(
            task(),
            Err(FetchError::Status {
                url: task().url,
                status: 404,
            }),
        );

        assert_eq!(report.downloaded, 2);
        assert_eq!(report.bytes, 2048);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.attempted(), 4);
        assert!(!report.is_success());
        assert!(report.failed[0].error.contains("404"));
        assert_eq!(report.failed[0].task.variable, Variable::SurfacePressure);
    }

    #[test]
    fn should_summarise() {
        let mut report = RunReport::default();
        report.record(task(), Ok(FetchOutcome::Skipped));

        assert!(report.is_success());
        assert_eq!(
            report.summary(),
            "1 files: 0 downloaded (0 B), 1 already present, 0 failed"
        );
    }
}
