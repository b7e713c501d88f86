//! Project skeleton: directories and the starter data file.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Starter data file so that `folio serve` works right after init.
pub const SAMPLE_DATA: &str = include_str!("portfolio.json");

/// Create the project root, the assets directory and a sample data file.
///
/// Existing files are never overwritten.
pub fn create_structure(root: &Path, data: &Path, assets: &Path) -> Result<()> {
    for dir in [root, assets] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }

    if !data.exists() {
        if let Some(parent) = data.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(data, SAMPLE_DATA)
            .with_context(|| format!("Failed to write '{}'", data.display()))?;
    }
    Ok(())
}
