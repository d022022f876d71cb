//! Filter rows by department.

use crate::selection::Selection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::ContestRecord;

/// Keeps rows whose department matches the selection exactly.
pub struct DepartmentFilter {
    selection: Selection<String>,
}

impl DepartmentFilter {
    pub fn new(selection: Selection<String>) -> Self {
        Self { selection }
    }
}

impl Filter for DepartmentFilter {
    fn name(&self) -> &str {
        "DepartmentFilter"
    }

    fn apply(&self, rows: Vec<ContestRecord>) -> Result<Vec<ContestRecord>> {
        Ok(rows
            .into_iter()
            .filter(|row| self.selection.matches(&row.department))
            .collect())
    }
}
