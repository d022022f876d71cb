//! Chart-ready numeric summaries over the filtered rows.
//!
//! The three histogram panels of the dashboard: presence distribution,
//! problems-solved counts, and rank-range counts. All outputs are dense
//! (zero-filled over their full range), so an empty filtered set degrades
//! to zeros instead of an error.

use anyhow::{bail, ensure, Result};
use data_loader::{ContestRecord, Rank};
use serde::Serialize;

// =============================================================================
// Presence distribution
// =============================================================================

/// Present/absent counts over a row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceSummary {
    pub present: usize,
    pub absent: usize,
}

impl PresenceSummary {
    pub fn total(&self) -> usize {
        self.present + self.absent
    }
}

/// Count present and absent contestants.
///
/// This is the one summary that keeps absent rows; everything downstream
/// (leaderboard, histograms) excludes them.
pub fn presence_summary(rows: &[ContestRecord]) -> PresenceSummary {
    let present = rows.iter().filter(|row| row.standing.is_present()).count();
    PresenceSummary {
        present,
        absent: rows.len() - present,
    }
}

// =============================================================================
// Problems solved
// =============================================================================

/// How many present contestants solved exactly 0, 1, ... `max_problems`
/// problems. Index = solved count; always dense over the full range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemCountSummary {
    counts: Vec<usize>,
}

impl ProblemCountSummary {
    /// Count per solved-count value, index 0..=max_problems.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Count present contestants per exact solved count, zero-filled over
/// `0..=max_problems`.
pub fn problem_count_summary(rows: &[ContestRecord], max_problems: u8) -> ProblemCountSummary {
    let mut counts = vec![0usize; max_problems as usize + 1];
    for row in rows.iter().filter(|row| row.standing.is_present()) {
        if let Some(slot) = counts.get_mut(row.problems_solved as usize) {
            *slot += 1;
        }
    }
    ProblemCountSummary { counts }
}

// =============================================================================
// Rank ranges
// =============================================================================

/// Edges of the dashboard's fixed layout, before the final catch-all.
const STANDARD_EDGES: [Rank; 6] = [0, 1_000, 5_000, 10_000, 15_000, 20_000];

/// Half-open rank buckets `[lo, hi)` for the rank-range histogram.
///
/// Edges are configuration, not derived from the filtered rows. The final
/// edge must cover the maximum rank of the full dataset, so a filtered
/// subset can never push a present row outside every bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankBins {
    edges: Vec<Rank>,
}

impl RankBins {
    /// Buckets from explicit edges: bucket `i` covers `[edges[i], edges[i+1])`.
    pub fn new(edges: Vec<Rank>) -> Result<Self> {
        ensure!(edges.len() >= 2, "rank bins need at least two edges");
        ensure!(
            edges.windows(2).all(|pair| pair[0] < pair[1]),
            "rank bin edges must be strictly ascending"
        );
        Ok(Self { edges })
    }

    /// The dashboard's fixed layout: 0-1000, 1000-5000, 5000-10000,
    /// 10000-15000, 15000-20000, 20000+, with the final edge stretched to
    /// cover `max_rank`.
    pub fn standard(max_rank: Rank) -> Self {
        let mut edges = STANDARD_EDGES.to_vec();
        let last = edges[edges.len() - 1];
        edges.push((max_rank + 1).max(last + 1));
        Self { edges }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label for bucket `i`: `"lo-hi"`, or `"lo+"` for the last.
    pub fn label(&self, i: usize) -> String {
        if i + 1 == self.len() {
            format!("{}+", self.edges[i])
        } else {
            format!("{}-{}", self.edges[i], self.edges[i + 1])
        }
    }

    fn bucket_index(&self, rank: Rank) -> Option<usize> {
        self.edges
            .windows(2)
            .position(|pair| pair[0] <= rank && rank < pair[1])
    }
}

/// One bucket of the rank-range histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankBucket {
    pub label: String,
    pub count: usize,
}

/// Bucket the present rows' ranks, zero-filling empty buckets, in bucket
/// order.
///
/// A present rank outside every bucket means the bins were configured
/// without covering the dataset's maximum rank; that is surfaced as an
/// error rather than dropping the row.
pub fn rank_range_summary(rows: &[ContestRecord], bins: &RankBins) -> Result<Vec<RankBucket>> {
    let mut counts = vec![0usize; bins.len()];
    for row in rows {
        let rank = match row.standing.rank() {
            Some(rank) => rank,
            None => continue,
        };
        match bins.bucket_index(rank) {
            Some(i) => counts[i] += 1,
            None => bail!("rank {} falls outside every configured bucket", rank),
        }
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| RankBucket {
            label: bins.label(i),
            count,
        })
        .collect())
}
