//! Filter implementations for the cascade.
//!
//! This module contains the concrete per-column filters
//! that can be composed into a FilterPipeline.

pub mod department;
pub mod domain;
pub mod year;

// Re-export for convenience
pub use department::DepartmentFilter;
pub use domain::DomainFilter;
pub use year::YearFilter;
