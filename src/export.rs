//! Per-item CSV export
//!
//! One header row, then one row per processed item in fetch order.
//! Any failure here is fatal for the run.

use crate::error::{Result, SentimentError};
use crate::sentiment::ScoredItem;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 3] = ["Text", "Polarity", "Sentiment"];

/// Writes scored items to a CSV file, overwriting it each run
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the header and every item. Returns the file path.
    pub fn export(&self, items: &[ScoredItem]) -> Result<PathBuf> {
        let fail = |e: &dyn std::fmt::Display| {
            SentimentError::Export(format!("{}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| fail(&e))?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| fail(&e))?;
        writer.write_record(HEADER).map_err(|e| fail(&e))?;

        for item in items {
            // keeps the fractional part on whole values: 0.0, 1.0
            let polarity = format!("{:?}", item.polarity.value());
            writer
                .write_record([item.text.as_str(), polarity.as_str(), item.category.label()])
                .map_err(|e| fail(&e))?;
        }

        writer.flush().map_err(|e| fail(&e))?;
        tracing::info!("Exported {} rows to {}", items.len(), self.path.display());
        Ok(self.path.clone())
    }
}
