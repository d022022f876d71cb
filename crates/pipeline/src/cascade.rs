//! Dependent dropdown choices and stale-selection recovery.
//!
//! Choice sets are recomputed from the dataset and the upstream selections
//! on every interaction, in the fixed cascade order year -> department ->
//! domain. A downstream dropdown only ever offers values that actually occur
//! under the upstream choices, so no combination with zero matching rows is
//! selectable.

use crate::selection::{FilterSet, Selection};
use data_loader::ContestRecord;

/// Distinct values in first-seen order.
fn distinct_in_order<T, I>(values: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Wildcard first, then the distinct values.
fn choices<T>(values: Vec<T>) -> Vec<Selection<T>> {
    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(Selection::All);
    out.extend(values.into_iter().map(Selection::Only));
    out
}

/// Year choices: the wildcard, then every year in the dataset.
pub fn year_choices(rows: &[ContestRecord]) -> Vec<Selection<u16>> {
    choices(distinct_in_order(rows.iter().map(|row| row.year)))
}

/// Department choices under the chosen year.
pub fn department_choices(
    rows: &[ContestRecord],
    year: &Selection<u16>,
) -> Vec<Selection<String>> {
    choices(distinct_in_order(
        rows.iter()
            .filter(|row| year.matches(&row.year))
            .map(|row| row.department.clone()),
    ))
}

/// Domain choices under the chosen year and department.
pub fn domain_choices(
    rows: &[ContestRecord],
    year: &Selection<u16>,
    department: &Selection<String>,
) -> Vec<Selection<String>> {
    choices(distinct_in_order(
        rows.iter()
            .filter(|row| year.matches(&row.year) && department.matches(&row.department))
            .map(|row| row.domain.clone()),
    ))
}

/// Validate a selection set against the current dataset.
///
/// Runs in cascade order: any selected value that no longer occurs under its
/// upstream selections (e.g. a leftover from a previous dataset) is reset to
/// the wildcard. Recovery is local and silent apart from a warning log -
/// never an error.
pub fn sanitize(rows: &[ContestRecord], selection: &FilterSet) -> FilterSet {
    let year = match &selection.year {
        Selection::Only(year) if !rows.iter().any(|row| row.year == *year) => {
            tracing::warn!(year = *year, "stale year selection, resetting to wildcard");
            Selection::All
        }
        other => other.clone(),
    };

    let department = match &selection.department {
        Selection::Only(department)
            if !rows
                .iter()
                .any(|row| year.matches(&row.year) && row.department == *department) =>
        {
            tracing::warn!(
                department = %department,
                "stale department selection, resetting to wildcard"
            );
            Selection::All
        }
        other => other.clone(),
    };

    let domain = match &selection.domain {
        Selection::Only(domain)
            if !rows.iter().any(|row| {
                year.matches(&row.year)
                    && department.matches(&row.department)
                    && row.domain == *domain
            }) =>
        {
            tracing::warn!(domain = %domain, "stale domain selection, resetting to wildcard");
            Selection::All
        }
        other => other.clone(),
    };

    FilterSet {
        year,
        department,
        domain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Standing;

    fn row(name: &str, year: u16, department: &str, domain: &str) -> ContestRecord {
        ContestRecord {
            name: name.to_string(),
            department: department.to_string(),
            year,
            domain: domain.to_string(),
            score: 10.0,
            problems_solved: 2,
            standing: Standing::Present { rank: 1 },
        }
    }

    fn sample_rows() -> Vec<ContestRecord> {
        vec![
            row("A", 2, "CSE", "AIML"),
            row("B", 3, "ECE", "WebDev"),
            row("C", 2, "CSE", "CP"),
            row("D", 3, "CSE", "AIML"),
        ]
    }

    #[test]
    fn test_year_choices_wildcard_first() {
        let choices = year_choices(&sample_rows());
        assert_eq!(
            choices,
            vec![Selection::All, Selection::Only(2), Selection::Only(3)]
        );
    }

    #[test]
    fn test_department_choices_follow_year() {
        let rows = sample_rows();

        // Unconstrained: every department, first-seen order
        let all = department_choices(&rows, &Selection::All);
        assert_eq!(all.len(), 3);
        assert_eq!(all[1], Selection::Only("CSE".to_string()));
        assert_eq!(all[2], Selection::Only("ECE".to_string()));

        // Year 2 has no ECE rows
        let year2 = department_choices(&rows, &Selection::Only(2));
        assert_eq!(
            year2,
            vec![Selection::All, Selection::Only("CSE".to_string())]
        );
    }

    #[test]
    fn test_domain_choices_follow_year_and_department() {
        let rows = sample_rows();
        let domains = domain_choices(
            &rows,
            &Selection::Only(3),
            &Selection::Only("CSE".to_string()),
        );
        assert_eq!(
            domains,
            vec![Selection::All, Selection::Only("AIML".to_string())]
        );
    }

    #[test]
    fn test_sanitize_keeps_valid_selection() {
        let rows = sample_rows();
        let selection = FilterSet {
            year: Selection::Only(2),
            department: Selection::Only("CSE".to_string()),
            domain: Selection::Only("CP".to_string()),
        };

        assert_eq!(sanitize(&rows, &selection), selection);
    }

    #[test]
    fn test_sanitize_resets_department_invalidated_by_year() {
        let rows = sample_rows();
        // ECE only occurs in year 3; under year 2 it's stale
        let selection = FilterSet {
            year: Selection::Only(2),
            department: Selection::Only("ECE".to_string()),
            domain: Selection::All,
        };

        let clean = sanitize(&rows, &selection);
        assert_eq!(clean.year, Selection::Only(2));
        assert_eq!(clean.department, Selection::All);
    }

    #[test]
    fn test_sanitize_resets_value_from_other_dataset() {
        let rows = sample_rows();
        let selection = FilterSet {
            year: Selection::Only(7),
            department: Selection::Only("MECH".to_string()),
            domain: Selection::Only("Robotics".to_string()),
        };

        assert_eq!(sanitize(&rows, &selection), FilterSet::unfiltered());
    }

    #[test]
    fn test_sanitize_domain_checked_under_reset_upstream() {
        let rows = sample_rows();
        // Department is stale and resets; the domain is then valid under
        // (year 3, All) and must survive.
        let selection = FilterSet {
            year: Selection::Only(3),
            department: Selection::Only("MECH".to_string()),
            domain: Selection::Only("WebDev".to_string()),
        };

        let clean = sanitize(&rows, &selection);
        assert_eq!(clean.department, Selection::All);
        assert_eq!(clean.domain, Selection::Only("WebDev".to_string()));
    }

    #[test]
    fn test_empty_dataset_offers_only_wildcards() {
        let rows: Vec<ContestRecord> = Vec::new();
        assert_eq!(year_choices(&rows), vec![Selection::All]);
        assert_eq!(department_choices(&rows, &Selection::All), vec![Selection::All]);
    }
}
