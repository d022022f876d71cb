//! Core domain types for contest result datasets.
//!
//! This module defines the fundamental data structures used throughout the
//! system: one record per contestant per contest, the presence/rank standing,
//! and the loaded dataset wrapper.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Contest-wide rank of a present contestant (1 = best).
///
/// Never zero inside the pipeline; the raw-file `0` sentinel is translated
/// at the loading boundary.
pub type Rank = u32;

// =============================================================================
// Standing
// =============================================================================

/// Whether a contestant took part in a contest, and where they placed.
///
/// Source files encode absence as `Rank == 0`. That sentinel exists only in
/// the files: rows are translated into this enum when loaded, so every rank
/// the pipeline sees belongs to a contestant who actually competed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    /// Took part and placed at `rank` (lower is better)
    Present { rank: Rank },
    /// Did not submit any qualifying result
    Absent,
}

impl Standing {
    /// Translate the raw-file rank column (`0` = absent).
    pub fn from_raw_rank(raw: Rank) -> Self {
        if raw == 0 {
            Standing::Absent
        } else {
            Standing::Present { rank: raw }
        }
    }

    /// The rank, if the contestant was present.
    pub fn rank(&self) -> Option<Rank> {
        match self {
            Standing::Present { rank } => Some(*rank),
            Standing::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Standing::Present { .. })
    }

    /// Back to the raw-file encoding (`0` = absent), for display and export.
    pub fn raw_rank(&self) -> Rank {
        self.rank().unwrap_or(0)
    }
}

// =============================================================================
// ContestRecord
// =============================================================================

/// One row per contestant per contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestRecord {
    pub name: String,
    pub department: String,
    /// Cohort year. Treated as a categorical column: equality-matched, never
    /// used in arithmetic.
    pub year: u16,
    pub domain: String,
    pub score: f64,
    /// Problems solved in this contest (0..=problems offered).
    pub problems_solved: u8,
    pub standing: Standing,
}

// =============================================================================
// ContestDataset
// =============================================================================

/// A loaded, validated, read-only contest dataset.
///
/// Identified by its contest label and swapped wholesale when the user picks
/// a different contest; records are never mutated or merged across contests.
#[derive(Debug, Clone)]
pub struct ContestDataset {
    contest: String,
    max_problems: u8,
    records: Vec<ContestRecord>,
}

impl ContestDataset {
    pub fn new(
        contest: impl Into<String>,
        max_problems: u8,
        records: Vec<ContestRecord>,
    ) -> Self {
        Self {
            contest: contest.into(),
            max_problems,
            records,
        }
    }

    /// Contest label as listed in the catalog.
    pub fn contest(&self) -> &str {
        &self.contest
    }

    /// Number of problems offered in this contest.
    pub fn max_problems(&self) -> u8 {
        self.max_problems
    }

    pub fn records(&self) -> &[ContestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum rank among present contestants, `0` for a dataset with none.
    ///
    /// Rank-range bucket edges are sized against this value so the final
    /// bucket covers every present row of the full dataset.
    pub fn max_rank(&self) -> Rank {
        self.records
            .iter()
            .filter_map(|record| record.standing.rank())
            .max()
            .unwrap_or(0)
    }

    /// Check dataset integrity:
    /// - ranks among present contestants are distinct
    /// - `problems_solved` stays within `0..=max_problems`
    ///
    /// Returns Ok(()) if valid, Err on the first violation found
    pub fn validate(&self) -> Result<()> {
        let mut seen_ranks: HashSet<Rank> = HashSet::new();
        for record in &self.records {
            if let Some(rank) = record.standing.rank() {
                if !seen_ranks.insert(rank) {
                    return Err(DataLoadError::ValidationError(format!(
                        "duplicate rank {} in contest {}",
                        rank, self.contest
                    )));
                }
            }
            if record.problems_solved > self.max_problems {
                return Err(DataLoadError::InvalidValue {
                    field: "ProbCount".to_string(),
                    value: record.problems_solved.to_string(),
                });
            }
        }
        Ok(())
    }
}
