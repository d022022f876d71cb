//! Pipeline for filtering and ranking contest results.
//!
//! This crate provides:
//! - Selection/FilterSet for cascade dropdown state
//! - Filter trait and per-column filters composed by FilterPipeline
//! - Cascade choice sets and stale-selection recovery
//! - Leaderboard ranking and chart-ready summaries
//!
//! ## Architecture
//! Every operation is a stateless query over `&[ContestRecord]`. The UI
//! layer owns the current selections and calls back into the pipeline on
//! each interaction, recomputing the valid choices, the filtered set, and
//! the derived summaries from scratch — there is no incremental update and
//! no shared mutable state.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_filters, cascade, top_performers, FilterSet};
//!
//! // Drop selections that a dataset switch made stale
//! let selection = cascade::sanitize(dataset.records(), &requested);
//!
//! // Filter, then rank
//! let filtered = apply_filters(dataset.records(), &selection)?;
//! let board = top_performers(&filtered, 10);
//! ```

pub mod cascade;
pub mod filter_pipeline;
pub mod filters;
pub mod leaderboard;
pub mod selection;
pub mod summary;
pub mod traits;

// Re-export main types
pub use filter_pipeline::{apply_filters, FilterPipeline};
pub use leaderboard::{parse_top_n, top_performers, LeaderboardRow, DEFAULT_TOP_N};
pub use selection::{FilterSet, Selection, WILDCARD};
pub use summary::{
    presence_summary, problem_count_summary, rank_range_summary, PresenceSummary,
    ProblemCountSummary, RankBins, RankBucket,
};
pub use traits::Filter;
