pub mod fetch;
pub mod list;

use anyhow::Result;

pub use fetch::fetch;
pub use list::list;

use crate::catalog::{Variable, YearRange};

use super::Selection;

impl Selection {
    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.start_year, self.end_year)
    }

    /// Chosen variables in catalog order, or all of them if none were named.
    pub fn variables(&self) -> Vec<Variable> {
        if self.variables.is_empty() {
            return Variable::ALL.to_vec();
        }

        Variable::ALL
            .into_iter()
            .filter(|v| self.variables.contains(v))
            .collect()
    }
}
