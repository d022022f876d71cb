//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable
//! column filters to be applied to contest rows.

use anyhow::Result;
use data_loader::ContestRecord;

/// Core trait for filtering contest rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<ContestRecord> and return the
///   retained rows, so the pipeline chains stages without re-cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows.
    ///
    /// # Arguments
    /// * `rows` - The rows to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<ContestRecord>)` - The retained rows, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, rows: Vec<ContestRecord>) -> Result<Vec<ContestRecord>>;
}
