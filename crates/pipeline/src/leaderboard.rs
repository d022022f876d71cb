//! Top-N leaderboard over the filtered rows.

use data_loader::{ContestRecord, Rank};
use serde::Serialize;

/// Leaderboard size used when the caller gives no usable N.
pub const DEFAULT_TOP_N: usize = 10;

/// One leaderboard line, re-indexed to a dense 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    /// Display position, 1..=n
    pub position: usize,
    pub name: String,
    pub year: u16,
    pub domain: String,
    pub department: String,
    pub score: f64,
    pub problems_solved: u8,
    /// Contest-wide rank (lower is better)
    pub rank: Rank,
}

/// Interpret a raw top-N request.
///
/// One policy everywhere: non-numeric or non-positive input falls back to
/// [`DEFAULT_TOP_N`] and is never an error.
pub fn parse_top_n(input: Option<&str>) -> usize {
    input
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_TOP_N)
}

/// The best `n` present contestants, best rank first.
///
/// Absent rows never appear. The sort is stable, so rows keep their file
/// order under equal ranks, and positions are re-indexed densely 1..=n even
/// when contest ranks have gaps.
pub fn top_performers(rows: &[ContestRecord], n: usize) -> Vec<LeaderboardRow> {
    let mut present: Vec<(&ContestRecord, Rank)> = rows
        .iter()
        .filter_map(|row| row.standing.rank().map(|rank| (row, rank)))
        .collect();
    present.sort_by_key(|(_, rank)| *rank);

    present
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, (row, rank))| LeaderboardRow {
            position: idx + 1,
            name: row.name.clone(),
            year: row.year,
            domain: row.domain.clone(),
            department: row.department.clone(),
            score: row.score,
            problems_solved: row.problems_solved,
            rank,
        })
        .collect()
}
