//! The fixed catalog of 20th Century Reanalysis (v3) daily files.
//!
//! See the PSL dataset page for the archive layout:
//! <https://psl.noaa.gov/data/gridded/data.20thC_ReanV3.html>

pub mod label;
pub mod task;
pub mod variable;

pub use label::DirectoryLabel;
pub use task::{tasks, tasks_for_year, DownloadTask, YearRange};
pub use variable::Variable;

/// Root of the daily means on the PSL THREDDS file server.
pub const BASE_URL: &str = "https://psl.noaa.gov/thredds/fileServer/Datasets/20thC_ReanV3/Dailies";

/// Scratch directory the files land in unless told otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "/home/scratch/20CR_v3";

/// First year of the reanalysis.
pub const FIRST_YEAR: u16 = 1836;

/// One past the last year of the reanalysis.
pub const END_YEAR: u16 = 2016;
