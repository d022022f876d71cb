//! Filter rows by cohort year.

use crate::selection::Selection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::ContestRecord;

/// Keeps rows whose year matches the selection exactly.
///
/// With the wildcard selected this is a pass-through.
pub struct YearFilter {
    selection: Selection<u16>,
}

impl YearFilter {
    pub fn new(selection: Selection<u16>) -> Self {
        Self { selection }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply(&self, rows: Vec<ContestRecord>) -> Result<Vec<ContestRecord>> {
        Ok(rows
            .into_iter()
            .filter(|row| self.selection.matches(&row.year))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Standing;

    fn row(name: &str, year: u16) -> ContestRecord {
        ContestRecord {
            name: name.to_string(),
            department: "CSE".to_string(),
            year,
            domain: "CP".to_string(),
            score: 10.0,
            problems_solved: 2,
            standing: Standing::Present { rank: 1 },
        }
    }

    #[test]
    fn test_wildcard_keeps_all() {
        let filter = YearFilter::new(Selection::All);
        let rows = vec![row("A", 2), row("B", 3)];

        let kept = filter.apply(rows).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_only_keeps_matching_year() {
        let filter = YearFilter::new(Selection::Only(2));
        let rows = vec![row("A", 2), row("B", 3), row("C", 2)];

        let kept = filter.apply(rows).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.year == 2));
    }
}
