//! # Data Loader Crate
//!
//! This crate handles loading and validating per-contest result datasets.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ContestRecord, Standing, ContestDataset)
//! - **parser**: Parse contest results CSV files
//! - **catalog**: Manifest-driven contest -> file lookup
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ContestCatalog;
//! use std::path::Path;
//!
//! // Discover the available contests
//! let catalog = ContestCatalog::load_from_file(Path::new("data/contests.toml"))?;
//!
//! // Load one contest's dataset
//! let dataset = catalog.load("Weekly Contest - 410 [11.08.2024]")?;
//!
//! println!("{}: {} rows", dataset.contest(), dataset.len());
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogEntry, ContestCatalog};
pub use error::{DataLoadError, Result};
pub use types::{ContestDataset, ContestRecord, Rank, Standing};
