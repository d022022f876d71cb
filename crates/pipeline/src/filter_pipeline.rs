//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{DepartmentFilter, DomainFilter, YearFilter};
use crate::selection::FilterSet;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::ContestRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::from_selection(&selection);
/// let filtered = pipeline.apply(rows)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the full cascade from one selection set, in the fixed order:
    /// year, then department, then domain.
    pub fn from_selection(selection: &FilterSet) -> Self {
        FilterPipeline::new()
            .add_filter(YearFilter::new(selection.year.clone()))
            .add_filter(DepartmentFilter::new(selection.department.clone()))
            .add_filter(DomainFilter::new(selection.domain.clone()))
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// Filters compose with logical AND: a row survives only if every filter
    /// keeps it.
    ///
    /// # Arguments
    /// * `rows` - The rows to filter
    ///
    /// # Returns
    /// * `Ok(Vec<ContestRecord>)` - The rows retained by all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, rows: Vec<ContestRecord>) -> Result<Vec<ContestRecord>> {
        let mut current = rows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a selection set to a dataset's rows in one call.
///
/// Applying the same selection to its own output returns it unchanged.
pub fn apply_filters(rows: &[ContestRecord], selection: &FilterSet) -> Result<Vec<ContestRecord>> {
    FilterPipeline::from_selection(selection).apply(rows.to_vec())
}
