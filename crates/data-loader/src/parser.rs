//! Parser for contest results files.
//!
//! One CSV file per contest with a required header row:
//! `Name, Department, Year, Domain, Score, ProbCount, Rank`.
//!
//! The raw `Rank` column uses `0` as an "absent" sentinel; rows are
//! translated into [`ContestRecord`]s (with a proper [`Standing`]) here, so
//! the sentinel never crosses the loading boundary.

use crate::error::{DataLoadError, Result};
use crate::types::{ContestRecord, Standing};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns the header row must contain.
pub const EXPECTED_COLUMNS: [&str; 7] = [
    "Name",
    "Department",
    "Year",
    "Domain",
    "Score",
    "ProbCount",
    "Rank",
];

/// One row exactly as it appears in the file.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Year")]
    year: u16,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Score")]
    score: f64,
    #[serde(rename = "ProbCount")]
    prob_count: u8,
    #[serde(rename = "Rank")]
    rank: u32,
}

impl From<RawRecord> for ContestRecord {
    fn from(raw: RawRecord) -> Self {
        ContestRecord {
            name: raw.name,
            department: raw.department,
            year: raw.year,
            domain: raw.domain,
            score: raw.score,
            problems_solved: raw.prob_count,
            standing: Standing::from_raw_rank(raw.rank),
        }
    }
}

/// Parse contest results from any reader.
///
/// # Arguments
/// * `reader` - The CSV input
/// * `source` - Name of the input used in error messages (usually the file name)
///
/// # Returns
/// * `Ok(Vec<ContestRecord>)` - All rows, in file order
/// * `Err` - On a missing column or the first unparseable row
pub fn parse_results<R: Read>(reader: R, source: &str) -> Result<Vec<ContestRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DataLoadError::ParseError {
            file: source.to_string(),
            line: 1,
            reason: e.to_string(),
        })?
        .clone();

    for column in EXPECTED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn {
                file: source.to_string(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Header occupies line 1
        let line = idx + 2;
        let raw = row.map_err(|e| DataLoadError::ParseError {
            file: source.to_string(),
            line,
            reason: e.to_string(),
        })?;
        records.push(raw.into());
    }

    Ok(records)
}

/// Parse a contest results file from disk.
pub fn parse_results_file(path: &Path) -> Result<Vec<ContestRecord>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            DataLoadError::IoError(e)
        }
    })?;
    parse_results(file, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Department,Year,Domain,Score,ProbCount,Rank
Asha,CSE,2,AIML,12,3,742
Bharat,ECE,3,WebDev,0,0,0
Chitra,CSE,2,CP,18,4,55
";

    #[test]
    fn test_parse_results() {
        let records = parse_results(SAMPLE.as_bytes(), "sample.csv").unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[0].year, 2);
        assert_eq!(records[0].problems_solved, 3);
        assert_eq!(records[0].standing, Standing::Present { rank: 742 });

        // Rank 0 becomes Absent
        assert_eq!(records[1].standing, Standing::Absent);
        assert_eq!(records[2].standing, Standing::Present { rank: 55 });
    }

    #[test]
    fn test_missing_column() {
        let input = "Name,Department,Year,Domain,Score,Rank\nAsha,CSE,2,AIML,12,742\n";
        let err = parse_results(input.as_bytes(), "sample.csv").unwrap_err();
        match err {
            DataLoadError::MissingColumn { column, .. } => assert_eq!(column, "ProbCount"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_row_reports_line() {
        let input = "\
Name,Department,Year,Domain,Score,ProbCount,Rank
Asha,CSE,2,AIML,12,3,742
Bharat,ECE,not-a-year,WebDev,0,0,0
";
        let err = parse_results(input.as_bytes(), "sample.csv").unwrap_err();
        match err {
            DataLoadError::ParseError { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_body_is_ok() {
        let input = "Name,Department,Year,Domain,Score,ProbCount,Rank\n";
        let records = parse_results(input.as_bytes(), "sample.csv").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_results_file(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
