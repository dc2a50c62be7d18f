//! Directory label selecting the remote sub-path layout.

use std::fmt;

/// Years up to and including this one live under the `SI` directories.
pub const LAST_EARLY_YEAR: u16 = 1980;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The archive splits each variable into two directory trees by year.
pub enum DirectoryLabel {
    Early,
    Modern,
}

impl DirectoryLabel {
    pub fn for_year(year: u16) -> Self {
        if year <= LAST_EARLY_YEAR {
            DirectoryLabel::Early
        } else {
            DirectoryLabel::Modern
        }
    }

    /// The token the archive uses in directory names.
    pub fn token(&self) -> &'static str {
        match self {
            DirectoryLabel::Early => "SI",
            DirectoryLabel::Modern => "MO",
        }
    }
}

impl fmt::Display for DirectoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// -- Tests -------------------------------------------------------------------
