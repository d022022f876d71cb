//! Filter rows by domain.

use crate::selection::Selection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::ContestRecord;

/// Keeps rows whose domain matches the selection exactly.
pub struct DomainFilter {
    selection: Selection<String>,
}

impl DomainFilter {
    pub fn new(selection: Selection<String>) -> Self {
        Self { selection }
    }
}

impl Filter for DomainFilter {
    fn name(&self) -> &str {
        "DomainFilter"
    }

    fn apply(&self, rows: Vec<ContestRecord>) -> Result<Vec<ContestRecord>> {
        Ok(rows
            .into_iter()
            .filter(|row| self.selection.matches(&row.domain))
            .collect())
    }
}
