//! Contest catalog: manifest-driven contest lookup.
//!
//! The original dashboards carried one hardcoded branch per contest file.
//! The catalog replaces that with a TOML manifest:
//!
//! ```toml
//! [[contest]]
//! label = "Weekly Contest - 410 [11.08.2024]"
//! file = "w410.csv"
//! problems = 4
//! ```
//!
//! Relative `file` paths resolve against the manifest's directory, so a
//! manifest can sit next to its data files and be moved as a unit.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::ContestDataset;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Problems offered per contest when the manifest doesn't say.
const DEFAULT_PROBLEMS: u8 = 4;

fn default_problems() -> u8 {
    DEFAULT_PROBLEMS
}

/// One contest in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display label, e.g. `"Weekly Contest - 410 [11.08.2024]"`
    pub label: String,
    /// Results CSV, relative to the manifest unless absolute
    pub file: PathBuf,
    /// Problems offered in this contest
    #[serde(default = "default_problems")]
    pub problems: u8,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "contest")]
    contests: Vec<CatalogEntry>,
}

/// The set of contests available for selection.
#[derive(Debug, Clone)]
pub struct ContestCatalog {
    base_dir: PathBuf,
    entries: Vec<CatalogEntry>,
}

impl ContestCatalog {
    /// Load the manifest from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataLoadError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                DataLoadError::IoError(e)
            }
        })?;

        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| DataLoadError::ManifestError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        for (idx, entry) in manifest.contests.iter().enumerate() {
            let duplicate = manifest.contests[..idx]
                .iter()
                .any(|earlier| earlier.label == entry.label);
            if duplicate {
                return Err(DataLoadError::ManifestError {
                    path: path.display().to_string(),
                    reason: format!("duplicate contest label: {}", entry.label),
                });
            }
        }

        let base_dir = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        Ok(Self {
            base_dir,
            entries: manifest.contests,
        })
    }

    /// All contests, in manifest order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up a contest by its label.
    pub fn find(&self, label: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    fn dataset_path(&self, entry: &CatalogEntry) -> PathBuf {
        if entry.file.is_absolute() {
            entry.file.clone()
        } else {
            self.base_dir.join(&entry.file)
        }
    }

    /// Load and validate one contest's dataset.
    ///
    /// # Returns
    /// * `Ok(ContestDataset)` - The parsed, validated dataset
    /// * `Err` - Unknown label, unreadable file, or failed validation
    pub fn load(&self, label: &str) -> Result<ContestDataset> {
        let entry = self.find(label).ok_or_else(|| DataLoadError::UnknownContest {
            label: label.to_string(),
        })?;
        let path = self.dataset_path(entry);

        tracing::info!(contest = %entry.label, path = %path.display(), "loading contest dataset");
        let records = parser::parse_results_file(&path)?;
        let dataset = ContestDataset::new(entry.label.clone(), entry.problems, records);
        dataset.validate()?;

        tracing::debug!(contest = %entry.label, rows = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Load every catalog entry, in parallel.
    ///
    /// Entries load independently, so one malformed file does not mask the
    /// others; each label is paired with its own outcome.
    pub fn load_all(&self) -> Vec<(String, Result<ContestDataset>)> {
        self.entries
            .par_iter()
            .map(|entry| (entry.label.clone(), self.load(&entry.label)))
            .collect()
    }
}
