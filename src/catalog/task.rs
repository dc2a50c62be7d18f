//! Resolving (year, variable) pairs into download tasks.

use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};

use super::{DirectoryLabel, Variable, BASE_URL, END_YEAR, FIRST_YEAR};

#[derive(Debug, Clone, PartialEq)]
/// One remote file and where it should be saved.
pub struct DownloadTask {
    pub year: u16,
    pub variable: Variable,
    pub url: String,
    pub destination: PathBuf,
}

impl DownloadTask {
    pub fn new(year: u16, variable: Variable, output_dir: &Path) -> Self {
        let label = DirectoryLabel::for_year(year);
        let url = format!("{}/{}", BASE_URL, variable.remote_path(label, year));
        let destination = output_dir.join(variable.file_name(year));

        DownloadTask {
            year,
            variable,
            url,
            destination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A half-open range of years inside the reanalysis period.
pub struct YearRange {
    start: u16,
    end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start < FIRST_YEAR || end > END_YEAR {
            bail!(
                "years {}..{} fall outside the reanalysis period {}..{}",
                start,
                end,
                FIRST_YEAR,
                END_YEAR
            );
        }
        if start >= end {
            bail!("empty year range {}..{}", start, end);
        }

        Ok(YearRange { start, end })
    }

    pub fn years(&self) -> Range<u16> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange {
            start: FIRST_YEAR,
            end: END_YEAR,
        }
    }
}

pub fn tasks_for_year(year: u16, variables: &[Variable], output_dir: &Path) -> Vec<DownloadTask> {
    variables
        .iter()
        .map(|&variable| DownloadTask::new(year, variable, output_dir))
        .collect()
}

/// Lazily yields every task, year by year, variables in the given order.
pub fn tasks<'a>(
    range: YearRange,
    variables: &'a [Variable],
    output_dir: &'a Path,
) -> impl Iterator<Item = DownloadTask> + 'a {
    range
        .years()
        .flat_map(move |year| tasks_for_year(year, variables, output_dir))
}

// -- Tests -------------------------------------------------------------------
